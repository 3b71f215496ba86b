use anyhow::{Context, Result};
use rmcp::model::{CallToolRequestParam, GetPromptRequestParam, PromptMessageContent};
use rmcp::{service::ServiceExt, transport::TokioChildProcess};
use std::collections::HashSet;
use std::time::Duration;
use tokio::process::Command;

mod support;

async fn start_server() -> Result<
    rmcp::service::RunningService<rmcp::RoleClient, ()>,
> {
    let bin = support::locate_creative_mcp_bin()?;
    let mut cmd = Command::new(bin);
    cmd.env("RUST_LOG", "warn");
    cmd.env_remove("OLLAMA_BASE_URL");
    cmd.env_remove("MEMORY_DIR");

    let transport = TokioChildProcess::new(cmd).context("spawn mcp server")?;
    tokio::time::timeout(Duration::from_secs(10), ().serve(transport))
        .await
        .context("timeout starting MCP server")?
        .context("start MCP server")
}

async fn call_tool_json(
    service: &rmcp::service::RunningService<rmcp::RoleClient, ()>,
    name: &str,
    args: serde_json::Value,
) -> Result<serde_json::Value> {
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        service.call_tool(CallToolRequestParam {
            name: name.to_string().into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout calling tool")?
    .context("call tool")?;

    assert_ne!(result.is_error, Some(true), "{name} returned error");
    let text = result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.as_str())
        .with_context(|| format!("{name} missing text output"))?;
    serde_json::from_str(text).with_context(|| format!("{name} output is not JSON"))
}

#[tokio::test]
async fn mcp_exposes_tools_and_prompts() -> Result<()> {
    let service = start_server().await?;

    let tools = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_tools(Default::default()),
    )
    .await
    .context("timeout listing tools")??;
    let tool_names: HashSet<&str> = tools.tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in ["creative_meditate", "creative_insight", "creative_ponder"] {
        assert!(
            tool_names.contains(expected),
            "missing tool '{expected}' (available: {tool_names:?})"
        );
    }

    let prompts = tokio::time::timeout(
        Duration::from_secs(10),
        service.list_prompts(Default::default()),
    )
    .await
    .context("timeout listing prompts")??;
    let prompt_names: HashSet<&str> = prompts.prompts.iter().map(|p| p.name.as_str()).collect();
    for expected in [
        "creative_workflow",
        "meditation_setup",
        "insight_interpretation",
        "contemplation_guide",
    ] {
        assert!(
            prompt_names.contains(expected),
            "missing prompt '{expected}' (available: {prompt_names:?})"
        );
    }

    let args = serde_json::json!({
        "contemplation_theme": "tidal rhythm",
        "depth_level": "unheard-of",
    });
    let guide = tokio::time::timeout(
        Duration::from_secs(10),
        service.get_prompt(GetPromptRequestParam {
            name: "contemplation_guide".into(),
            arguments: args.as_object().cloned(),
        }),
    )
    .await
    .context("timeout getting prompt")??;
    assert_eq!(guide.messages.len(), 1);
    let PromptMessageContent::Text { text } = &guide.messages[0].content else {
        anyhow::bail!("contemplation_guide returned non-text content");
    };
    assert!(text.contains("## Theme: tidal rhythm"));
    assert!(text.contains("Explore underlying structures and practical implications"));

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn meditate_insight_ponder_round() -> Result<()> {
    let service = start_server().await?;

    let early = call_tool_json(&service, "creative_insight", serde_json::json!({})).await?;
    assert_eq!(early["insights"], serde_json::json!([]));
    assert!(early["message"].is_string());

    let early_ponder = call_tool_json(&service, "creative_ponder", serde_json::json!({})).await?;
    assert!(early_ponder["result"].is_string());

    let meditation = call_tool_json(
        &service,
        "creative_meditate",
        serde_json::json!({
            "context_words": ["creativity", "emergence"],
            "num_random_words": 8,
            "seed": "s1",
        }),
    )
    .await?;
    let session_id = meditation["session_id"]
        .as_str()
        .context("session_id missing")?
        .to_string();
    assert!(session_id.ends_with("_s1"));
    assert_eq!(meditation["random_words_used"], serde_json::json!(8));
    assert_eq!(
        meditation["emergent_sentence"]
            .as_str()
            .map(|s| s.split_whitespace().count()),
        Some(10)
    );

    let insight = call_tool_json(&service, "creative_insight", serde_json::json!({})).await?;
    assert_eq!(insight["meditation_session"], serde_json::json!(session_id));
    let count = insight["count"].as_u64().context("count missing")?;
    assert!((1..=3).contains(&count));

    let ponder = call_tool_json(&service, "creative_ponder", serde_json::json!({})).await?;
    assert_eq!(ponder["session_id"], serde_json::json!(session_id));
    assert_eq!(ponder["method"], serde_json::json!("internal_reflection"));
    assert!(ponder["haiku"].is_string());

    service.cancel().await.context("shutdown")?;
    Ok(())
}

#[tokio::test]
async fn negative_word_count_degrades_to_context_only() -> Result<()> {
    let service = start_server().await?;

    let meditation = call_tool_json(
        &service,
        "creative_meditate",
        serde_json::json!({
            "context_words": ["signal", "noise"],
            "num_random_words": -1,
        }),
    )
    .await?;
    assert_eq!(meditation["random_words_used"], serde_json::json!(0));
    assert_eq!(meditation["context_words_used"], serde_json::json!(2));
    assert!(meditation["interpretation"].is_string());

    service.cancel().await.context("shutdown")?;
    Ok(())
}
