//! MCP surface of the creative meditation server.
//!
//! Tools run the meditate → insight → ponder workflow; prompts serve the static guides.

use creative_meditation::guides::{self, GuideMessage, GuideRole};
use creative_meditation::protocol::{InsightRequest, MeditateRequest, PonderRequest};
use creative_meditation::{CreativeEngine, SessionStore};
use rmcp::handler::server::router::prompt::PromptRouter;
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, GetPromptRequestParam, GetPromptResult, Implementation,
    ListPromptsResult, PaginatedRequestParam, PromptMessage, PromptMessageRole,
    ServerCapabilities, ServerInfo,
};
use rmcp::schemars;
use rmcp::service::RequestContext;
use rmcp::{
    prompt, prompt_handler, prompt_router, tool, tool_handler, tool_router,
    ErrorData as McpError, RoleServer, ServerHandler,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const INSTRUCTIONS: &str = "Creative meditation: a contemplative catalyst. Run 'creative_meditate' with a few context words to compose an emergent sentence, then 'creative_insight' to extract observations from it, then 'creative_ponder' for a deeper reflection (optionally with a haiku). The 'creative_workflow' prompt explains the full process.";

/// Creative Meditation MCP Service
#[derive(Clone)]
pub struct CreativeService {
    /// Meditation engine over the process-wide session store
    engine: Arc<CreativeEngine>,
    /// Tool router
    tool_router: ToolRouter<Self>,
    /// Prompt router
    prompt_router: PromptRouter<Self>,
}

impl CreativeService {
    pub fn new() -> Self {
        Self::with_store(Arc::new(SessionStore::new()))
    }

    pub fn with_store(store: Arc<SessionStore>) -> Self {
        Self {
            engine: Arc::new(CreativeEngine::new(store)),
            tool_router: Self::tool_router(),
            prompt_router: Self::prompt_router(),
        }
    }
}

impl Default for CreativeService {
    fn default() -> Self {
        Self::new()
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value).map_err(|err| {
        McpError::internal_error(format!("failed to serialize tool output: {err}"), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

fn prompt_messages(messages: Vec<GuideMessage>) -> Vec<PromptMessage> {
    messages
        .into_iter()
        .map(|message| {
            let role = match message.role {
                GuideRole::User => PromptMessageRole::User,
            };
            PromptMessage::new_text(role, message.content)
        })
        .collect()
}

// ============================================================================
// Prompt Arguments
// ============================================================================

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct MeditationSetupArgs {
    #[serde(default)]
    #[schemars(description = "What you're trying to explore or create")]
    pub creative_focus: Option<String>,

    #[serde(default)]
    #[schemars(description = "Optional specific context word suggestions")]
    pub context_suggestions: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct InsightInterpretationArgs {
    #[serde(default)]
    #[schemars(description = "Summary of insights from creative_insight")]
    pub insight_summary: Option<String>,

    #[serde(default)]
    #[schemars(description = "How you plan to apply these insights")]
    pub application_context: Option<String>,
}

#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
pub struct ContemplationGuideArgs {
    #[serde(default)]
    #[schemars(description = "The main theme to contemplate")]
    pub contemplation_theme: Option<String>,

    #[serde(default)]
    #[schemars(description = "How deep to go: shallow, moderate, deep")]
    pub depth_level: Option<String>,
}

// ============================================================================
// Tools
// ============================================================================

#[tool_router]
impl CreativeService {
    /// Compose an emergent sentence from sampled and context words
    #[tool(description = "Generates random/pseudorandom words mapped loosely with selected context words until a syntactically meaningful sentence emerges, then interprets it. Pass a seed for reproducible results.")]
    pub async fn creative_meditate(
        &self,
        Parameters(request): Parameters<MeditateRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.engine.meditate(request))
    }

    /// Extract insights from the latest meditation
    #[tool(description = "Examines the previous meditation result and extracts meaningful insights, patterns, or interpretations. Returns insights if found, or indicates none were discovered.")]
    pub async fn creative_insight(
        &self,
        Parameters(request): Parameters<InsightRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.engine.insight(request))
    }

    /// Reflect on insight text or the latest insights
    #[tool(description = "Takes insights from creative_insight (or explicit insight_text) and treats them as a prompt for deeper contemplation, optionally crystallized into a haiku.")]
    pub async fn creative_ponder(
        &self,
        Parameters(request): Parameters<PonderRequest>,
    ) -> Result<CallToolResult, McpError> {
        json_result(&self.engine.ponder(request))
    }
}

// ============================================================================
// Prompts
// ============================================================================

#[prompt_router]
impl CreativeService {
    #[prompt(
        name = "creative_workflow",
        description = "Guide for the creative meditation workflow: meditation, insight and contemplation."
    )]
    async fn creative_workflow(&self) -> Vec<PromptMessage> {
        prompt_messages(guides::creative_workflow())
    }

    #[prompt(
        name = "meditation_setup",
        description = "Template for setting up an effective creative meditation session."
    )]
    async fn meditation_setup(
        &self,
        Parameters(args): Parameters<MeditationSetupArgs>,
    ) -> Vec<PromptMessage> {
        let focus = args
            .creative_focus
            .as_deref()
            .unwrap_or(guides::DEFAULT_CREATIVE_FOCUS);
        prompt_messages(guides::meditation_setup(
            focus,
            args.context_suggestions.as_deref(),
        ))
    }

    #[prompt(
        name = "insight_interpretation",
        description = "Template for interpreting creative insights in practical contexts."
    )]
    async fn insight_interpretation(
        &self,
        Parameters(args): Parameters<InsightInterpretationArgs>,
    ) -> Vec<PromptMessage> {
        let summary = args
            .insight_summary
            .as_deref()
            .unwrap_or(guides::DEFAULT_INSIGHT_SUMMARY);
        prompt_messages(guides::insight_interpretation(
            summary,
            args.application_context.as_deref(),
        ))
    }

    #[prompt(
        name = "contemplation_guide",
        description = "Template for guiding deep contemplation of creative insights."
    )]
    async fn contemplation_guide(
        &self,
        Parameters(args): Parameters<ContemplationGuideArgs>,
    ) -> Vec<PromptMessage> {
        let theme = args
            .contemplation_theme
            .as_deref()
            .unwrap_or(guides::DEFAULT_CONTEMPLATION_THEME);
        let depth = args
            .depth_level
            .as_deref()
            .unwrap_or(guides::DEFAULT_DEPTH_LEVEL);
        prompt_messages(guides::contemplation_guide(theme, depth))
    }
}

#[tool_handler]
#[prompt_handler]
impl ServerHandler for CreativeService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_prompts()
                .build(),
            server_info: Implementation::from_build_env(),
            ..Default::default()
        }
    }
}
