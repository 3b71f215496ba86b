use serde::Serialize;

/// One composition: the sampled words, the caller's context and what came of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeditationResult {
    pub sampled_words: Vec<String>,
    pub context_words: Vec<String>,
    pub composed_sentence: String,
    pub interpretation: String,
    /// Unix milliseconds.
    pub created_at: u64,
    pub session_id: String,
}

/// Observations extracted from one meditation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsightResult {
    pub insights: Vec<String>,
    /// Unix milliseconds.
    pub created_at: u64,
    /// Back-reference to [`MeditationResult::session_id`].
    pub source_session_id: String,
}

/// Reflective expansion of insight text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reflection {
    pub contemplation: String,
    pub method: &'static str,
    pub session_ref: Option<String>,
    pub haiku: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PonderOutcome {
    Reflection(Reflection),
    NoData,
}
