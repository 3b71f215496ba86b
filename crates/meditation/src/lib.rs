//! # Creative Meditation
//!
//! Seeded word sampling and canned reflection behind the creative meditation server.
//!
//! ## Pipeline
//!
//! ```text
//! corpus ──> sampler ──> composer ──> interpreter ──> SessionStore (meditation)
//!                                                         │
//!                      SessionStore (insight) <── insight ┘
//!                               │
//!                               └──> ponder
//! ```
//!
//! [`CreativeEngine`] runs the three request/response operations over an injected
//! [`SessionStore`]. Nothing here fails: missing prior state comes back as a response
//! variant and oversized counts are clamped.

pub mod corpus;
pub mod guides;
pub mod protocol;

mod composer;
mod engine;
mod insight;
mod interpreter;
mod ponder;
mod sampler;
mod seed;
mod session;
mod types;

pub use composer::{compose, compose_with};
pub use engine::{CreativeEngine, NO_INSIGHT_MESSAGE, NO_MEDITATION_MESSAGE};
pub use insight::{extract, FALLBACK_INSIGHT};
pub use interpreter::interpret;
pub use ponder::{ponder, HAIKUS, REFLECTION_METHOD};
pub use sampler::{sample, sample_with};
pub use seed::{rng_for, select_index, stable_hash, MeditationRng};
pub use session::SessionStore;
pub use types::{InsightResult, MeditationResult, PonderOutcome, Reflection};
