//! Static guidance documents served as prompts.
//!
//! The documents are fixed text; callers can only interpolate a few strings into them.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GuideRole {
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuideMessage {
    pub role: GuideRole,
    pub content: String,
}

impl GuideMessage {
    fn user(content: String) -> Vec<Self> {
        vec![Self {
            role: GuideRole::User,
            content,
        }]
    }
}

pub const DEFAULT_CREATIVE_FOCUS: &str = "exploring new ideas";
pub const DEFAULT_INSIGHT_SUMMARY: &str = "recent creative insights";
pub const DEFAULT_CONTEMPLATION_THEME: &str = "emergent consciousness";
pub const DEFAULT_DEPTH_LEVEL: &str = "moderate";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthLevel {
    Shallow,
    Moderate,
    Deep,
}

impl DepthLevel {
    /// Recognized levels only; anything else is `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "shallow" => Some(Self::Shallow),
            "moderate" => Some(Self::Moderate),
            "deep" => Some(Self::Deep),
            _ => None,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Shallow => "Focus on surface-level patterns and immediate applications",
            Self::Moderate => "Explore underlying structures and practical implications",
            Self::Deep => "Delve into philosophical meanings and transformative potential",
        }
    }

    fn practice(self) -> &'static str {
        match self {
            Self::Shallow => "- **Breathing Exercise**: Take 5 deep breaths, focusing on the emergent patterns with each inhalation",
            Self::Moderate => "- **Pattern Mapping**: Draw or visualize how the concepts connect and flow",
            Self::Deep => "- **Philosophical Inquiry**: Question the nature of emergence, consciousness, and creative process itself",
        }
    }
}

fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

const WORKFLOW_GUIDE: &str = r#"# Creative Meditation Workflow Guide

## The Creative Process

Creative emergence happens when structured context meets generative chaos. This server provides three stages of creative exploration:

### Stage 1: Meditation (creative_meditate)
**Purpose**: Generate emergent meaning from conceptual fragments
- **Context Words**: Provide 2-5 words that represent your creative focus
- **Random Words**: The system generates conceptual "chaos" (default: 12 words)
- **Seed**: Optional for reproducible results
- **Result**: An emergent sentence + interpretive framework

### Stage 2: Insight (creative_insight)
**Purpose**: Extract patterns and understanding from the meditation
- **Analysis**: Identifies structural patterns, word relationships, conceptual density
- **Context Influence**: Shows how your input shaped the emergence
- **Patterns**: Reveals underlying structural concepts (flow, connection, tension, etc.)

### Stage 3: Contemplation (creative_ponder)
**Purpose**: Deepen understanding through reflective contemplation
- **Integration**: Synthesizes insights into coherent understanding
- **Emergence Themes**: Explores how simple interactions create complexity
- **Haiku**: Optional poetic crystallization of the insights

## Recommended Workflow

1. **Start with Intention**: Choose context words that represent your creative challenge
2. **Meditate**: Let the system generate emergent patterns from your context
3. **Extract Insights**: Understand what patterns emerged and why
4. **Contemplate**: Reflect deeply on the meaning and implications

## Creative Applications

- **Problem Solving**: Use context words related to your challenge
- **Idea Generation**: Explore abstract concepts through emergence
- **Pattern Recognition**: Discover hidden connections in complex topics
- **Creative Writing**: Generate conceptual frameworks for stories/poems
- **Design Thinking**: Explore form, function, and aesthetic relationships

## Tips for Best Results

- **Context Selection**: Choose words that genuinely intrigue or challenge you
- **Open Mindedness**: Don't judge the emergent results too quickly
- **Pattern Recognition**: Look for unexpected connections between your context and the random words
- **Iterative Process**: Run multiple meditations with slight variations
- **Reflection**: Spend time contemplating what the emergence reveals about your topic

The creative process is as much about discovery as it is about creation. Let the emergence guide you toward new perspectives."#;

/// Overview of the meditate, insight and ponder stages.
pub fn creative_workflow() -> Vec<GuideMessage> {
    GuideMessage::user(WORKFLOW_GUIDE.to_string())
}

pub fn meditation_setup(creative_focus: &str, context_suggestions: Option<&str>) -> Vec<GuideMessage> {
    let mut content = format!(
        r#"# Creative Meditation Setup

## Your Creative Focus: {creative_focus}

## Recommended Context Words
Choose 2-5 words that capture the essence of your creative exploration:

### Core Concepts
- Primary idea or challenge you're facing
- Key emotions or states you want to explore
- Essential qualities you seek to understand

### Supporting Elements
- Related concepts that provide context
- Contrasting ideas that create tension
- Abstract qualities that inspire emergence

## Example Context Word Sets
- For innovation: "disruption", "synthesis", "emergence", "flow"
- For problem-solving: "constraint", "solution", "pattern", "breakthrough"
- For creative writing: "narrative", "voice", "structure", "resonance"
- For design: "form", "function", "harmony", "transformation"

## Meditation Parameters
- **num_random_words**: 8-16 (more = more chaos, more potential patterns)
- **seed**: Use a specific seed for reproducible results, or leave empty for true randomness

## Next Steps
1. Select your context words based on your creative focus
2. Run `creative_meditate` with your chosen parameters
3. Follow with `creative_insight` to understand the patterns
4. Use `creative_ponder` for deeper contemplation"#
    );

    if let Some(suggestions) = non_empty(context_suggestions) {
        content.push_str(&format!("\n\n## Your Specific Suggestions\n{suggestions}"));
    }

    GuideMessage::user(content)
}

pub fn insight_interpretation(
    insight_summary: &str,
    application_context: Option<&str>,
) -> Vec<GuideMessage> {
    let mut content = format!(
        r#"# Interpreting Creative Insights

## Your Insights: {insight_summary}

## Insight Analysis Framework

### 1. Pattern Recognition
- **Structural Elements**: What patterns emerged from the meditation?
- **Context Integration**: How did your input words shape the results?
- **Conceptual Density**: How rich/complex were the emergent relationships?

### 2. Meaning Extraction
- **Core Message**: What central idea emerged from the chaos?
- **Unexpected Connections**: What surprising relationships were revealed?
- **Tension Points**: Where did opposing concepts create interesting dynamics?

### 3. Practical Applications
- **Problem Solving**: How might these patterns address your challenges?
- **Creative Opportunities**: What new directions do these insights suggest?
- **Decision Making**: How do these patterns inform your choices?

## Reflection Questions
- What surprised you most about the emergent patterns?
- How do these insights challenge your current assumptions?
- What practical actions emerge from this contemplation?
- How might you apply these patterns in your work/creative process?

## Integration Strategies
- **Immediate Application**: How can you use these insights right now?
- **Long-term Development**: How might these patterns evolve over time?
- **Collaborative Exploration**: How could you share these insights with others?"#
    );

    if let Some(application) = non_empty(application_context) {
        content.push_str(&format!(
            "\n\n## Your Application Context\n{application}\n\nConsider how these insights specifically apply to your current situation."
        ));
    }

    GuideMessage::user(content)
}

/// Unrecognized `depth_level` values borrow the moderate description but add no
/// level-specific practice.
pub fn contemplation_guide(contemplation_theme: &str, depth_level: &str) -> Vec<GuideMessage> {
    let recognized = DepthLevel::parse(depth_level);
    let depth_desc = recognized.unwrap_or(DepthLevel::Moderate).description();
    let practice_line = |level: DepthLevel| {
        if recognized == Some(level) {
            level.practice()
        } else {
            ""
        }
    };
    let shallow = practice_line(DepthLevel::Shallow);
    let moderate = practice_line(DepthLevel::Moderate);
    let deep = practice_line(DepthLevel::Deep);
    let level_title = capitalize(depth_level);

    let content = format!(
        r#"# Deep Contemplation Guide

## Theme: {contemplation_theme}
## Depth Level: {level_title} ({depth_desc})

## Contemplation Structure

### Phase 1: Surface Observation
- What immediate patterns catch your attention?
- Which elements feel most significant or surprising?
- How do the individual components relate to each other?

### Phase 2: Pattern Analysis
- What underlying structures emerge from the chaos?
- How do context and randomness interact to create meaning?
- What tensions or harmonies reveal themselves?

### Phase 3: Meaning Integration
- What deeper truths emerge from this creative process?
- How do these insights challenge or expand your understanding?
- What new possibilities open up through this emergence?

## Contemplative Practices

### For {depth_level} Depth:
{shallow}
{moderate}
{deep}

### Universal Practices:
- **Silent Observation**: Simply witness the patterns without judgment
- **Emotive Response**: Notice how the emergence makes you feel
- **Intuitive Knowing**: What does your intuition tell you about these patterns?

## Emergence Principles to Consider

### Chaos and Order
How does structured context give rise to meaningful patterns from random elements?

### Emergence vs. Design
What balance exists between intentional creation and spontaneous emergence?

### Consciousness and Complexity
How do simple interactions create complex, meaningful experiences?

## Practical Integration

### Immediate Actions:
- Document your key insights from this contemplation
- Identify one practical application of these patterns
- Note any questions that arose during contemplation

### Ongoing Practice:
- Return to these patterns during moments of creative block
- Use similar processes for other challenges or explorations
- Share insights with others to deepen collective understanding

## Final Reflection
What has this creative meditation revealed about the nature of emergence, consciousness, and creative potential?"#
    );

    GuideMessage::user(content)
}
