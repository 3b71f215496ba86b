use crate::composer::compose_with;
use crate::insight::extract;
use crate::interpreter::interpret;
use crate::ponder::ponder;
use crate::protocol::{
    InsightRequest, InsightResponse, MeditateRequest, MeditateResponse, PonderRequest,
    PonderResponse,
};
use crate::sampler::sample_with;
use crate::seed::rng_for;
use crate::session::SessionStore;
use crate::types::{InsightResult, MeditationResult, PonderOutcome};
use getrandom::getrandom;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

pub const NO_MEDITATION_MESSAGE: &str =
    "No previous meditation found. Please run creative_meditate first.";
pub const NO_INSIGHT_MESSAGE: &str =
    "No insights available. Please run creative_insight first or provide insight_text.";

fn unix_ms(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

fn hex_encode_lower(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len().saturating_mul(2));
    for b in bytes {
        let _ = write!(out, "{b:02x}");
    }
    out
}

fn random_entropy_hex() -> String {
    let mut bytes = [0u8; 8];
    if let Err(err) = getrandom(&mut bytes) {
        log::warn!("OS entropy unavailable ({err}); using thread rng for session id");
        bytes = rand::random();
    }
    hex_encode_lower(&bytes)
}

/// The meditate, insight and ponder operations over one [`SessionStore`].
///
/// Every operation succeeds; missing prior state is reported in the response.
pub struct CreativeEngine {
    store: Arc<SessionStore>,
    /// Last issued session timestamp; issued values strictly increase.
    last_issued_ms: AtomicU64,
}

impl Default for CreativeEngine {
    fn default() -> Self {
        Self::new(Arc::new(SessionStore::new()))
    }
}

impl CreativeEngine {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            last_issued_ms: AtomicU64::new(0),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn issue_timestamp(&self) -> u64 {
        let now = unix_ms(SystemTime::now());
        let prev = self
            .last_issued_ms
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        now.max(prev.saturating_add(1))
    }

    pub fn meditate(&self, request: MeditateRequest) -> MeditateResponse {
        let seed = request.seed.as_deref().filter(|s| !s.is_empty());
        if request.new_session {
            log::debug!("meditate: new_session requested; sessions are not tracked separately");
        }

        let created_at = self.issue_timestamp();
        let entropy = seed.map_or_else(random_entropy_hex, str::to_string);
        let session_id = format!("{created_at}_{entropy}");

        // One stream for both stages keeps a seeded meditation reproducible end to end.
        let mut rng = rng_for(seed);
        let sampled_words = sample_with(&mut rng, request.sample_count());
        let composed_sentence = compose_with(&mut rng, &sampled_words, &request.context_words);
        let interpretation = interpret(&composed_sentence, &request.context_words);

        log::debug!(
            "meditate: session={session_id} sampled={} context={}",
            sampled_words.len(),
            request.context_words.len()
        );

        let response = MeditateResponse {
            session_id: session_id.clone(),
            emergent_sentence: composed_sentence.clone(),
            interpretation: interpretation.clone(),
            context_words_used: request.context_words.len(),
            random_words_used: sampled_words.len(),
        };

        self.store.set_last_meditation(MeditationResult {
            sampled_words,
            context_words: request.context_words,
            composed_sentence,
            interpretation,
            created_at,
            session_id,
        });

        response
    }

    pub fn insight(&self, _request: InsightRequest) -> InsightResponse {
        let created_at = unix_ms(SystemTime::now());
        let derived = self.store.derive_insight(|meditation| InsightResult {
            insights: extract(meditation),
            created_at,
            source_session_id: meditation.session_id.clone(),
        });

        match derived {
            Some(insight) => {
                log::debug!(
                    "insight: {} insights from session={}",
                    insight.insights.len(),
                    insight.source_session_id
                );
                InsightResponse::Found {
                    count: insight.insights.len(),
                    meditation_session: Some(insight.source_session_id),
                    insights: insight.insights,
                }
            }
            None => {
                log::debug!("insight: no meditation stored");
                InsightResponse::NoMeditation {
                    insights: Vec::new(),
                    message: NO_MEDITATION_MESSAGE.to_string(),
                }
            }
        }
    }

    pub fn ponder(&self, request: PonderRequest) -> PonderResponse {
        let stored = self.store.last_insight();
        match ponder(
            request.insight_text.as_deref(),
            stored.as_ref(),
            request.prefer_haiku,
        ) {
            PonderOutcome::Reflection(reflection) => {
                log::debug!(
                    "ponder: session={:?} haiku={}",
                    reflection.session_ref,
                    reflection.haiku.is_some()
                );
                PonderResponse::Reflection {
                    contemplation: reflection.contemplation,
                    method: reflection.method.to_string(),
                    session_id: reflection.session_ref,
                    haiku: reflection.haiku,
                }
            }
            PonderOutcome::NoData => PonderResponse::NoData {
                result: NO_INSIGHT_MESSAGE.to_string(),
            },
        }
    }
}
