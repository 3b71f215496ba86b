//! Request and response shapes of the meditate, insight and ponder operations.
//!
//! Field names are the wire contract. Several request fields are accepted for
//! compatibility but have no effect.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_RANDOM_WORDS: i64 = 12;

fn default_num_random_words() -> i64 {
    DEFAULT_NUM_RANDOM_WORDS
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct MeditateRequest {
    /// Words blended into the meditation alongside the sampled ones
    #[serde(default)]
    #[schemars(description = "Context words that anchor the meditation (2-5 recommended)")]
    pub context_words: Vec<String>,

    /// Number of corpus words to sample (default: 12)
    #[serde(default = "default_num_random_words")]
    #[schemars(description = "Number of random words to sample; clamped to 0..=corpus size")]
    pub num_random_words: i64,

    #[serde(default)]
    #[schemars(description = "Optional seed for reproducible meditations")]
    pub seed: Option<String>,

    /// Accepted, no effect
    #[serde(default)]
    #[schemars(description = "Reserved; currently has no effect")]
    pub new_session: bool,
}

impl MeditateRequest {
    /// Requested sample size with negatives read as zero.
    pub fn sample_count(&self) -> usize {
        usize::try_from(self.num_random_words.max(0)).unwrap_or(usize::MAX)
    }
}

impl Default for MeditateRequest {
    fn default() -> Self {
        Self {
            context_words: Vec::new(),
            num_random_words: DEFAULT_NUM_RANDOM_WORDS,
            seed: None,
            new_session: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct MeditateResponse {
    pub session_id: String,
    pub emergent_sentence: String,
    pub interpretation: String,
    pub context_words_used: usize,
    pub random_words_used: usize,
}

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct InsightRequest {
    /// Accepted, no effect: insights always come from the latest meditation
    #[serde(default)]
    #[schemars(description = "Reserved; the latest meditation is always used")]
    pub meditation_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum InsightResponse {
    Found {
        insights: Vec<String>,
        count: usize,
        meditation_session: Option<String>,
    },
    NoMeditation {
        insights: Vec<String>,
        message: String,
    },
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PonderRequest {
    #[serde(default)]
    #[schemars(description = "Insight text to ponder; defaults to the latest insights")]
    pub insight_text: Option<String>,

    /// Accepted, no effect
    #[serde(default)]
    #[schemars(description = "Reserved; external consultation is not performed")]
    pub consult_model: Option<String>,

    /// Accepted, no effect
    #[serde(default = "default_true")]
    #[schemars(description = "Reserved; external consultation is not performed")]
    pub prefer_consult: bool,

    #[serde(default = "default_true")]
    #[schemars(description = "Attach a haiku to the contemplation (default: true)")]
    pub prefer_haiku: bool,
}

impl Default for PonderRequest {
    fn default() -> Self {
        Self {
            insight_text: None,
            consult_model: None,
            prefer_consult: true,
            prefer_haiku: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum PonderResponse {
    Reflection {
        contemplation: String,
        method: String,
        session_id: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        haiku: Option<String>,
    },
    NoData {
        result: String,
    },
}
