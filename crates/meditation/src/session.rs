use crate::types::{InsightResult, MeditationResult};
use std::sync::{Mutex, MutexGuard};

#[derive(Default)]
struct Slots {
    last_meditation: Option<MeditationResult>,
    last_insight: Option<InsightResult>,
}

/// Process-wide holder of the latest meditation and insight.
///
/// Each slot is last-write-wins. Concurrent callers share the slots, so an insight
/// may be derived from a meditation another caller wrote.
#[derive(Default)]
pub struct SessionStore {
    slots: Mutex<Slots>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Slots hold plain data, so a panic mid-write cannot leave them inconsistent.
    fn lock(&self) -> MutexGuard<'_, Slots> {
        self.slots
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn set_last_meditation(&self, meditation: MeditationResult) {
        self.lock().last_meditation = Some(meditation);
    }

    pub fn last_meditation(&self) -> Option<MeditationResult> {
        self.lock().last_meditation.clone()
    }

    pub fn set_last_insight(&self, insight: InsightResult) {
        self.lock().last_insight = Some(insight);
    }

    pub fn last_insight(&self) -> Option<InsightResult> {
        self.lock().last_insight.clone()
    }

    /// Read the latest meditation, derive an insight from it and store that insight,
    /// all under one lock. Returns `None` without touching the insight slot when no
    /// meditation exists.
    pub fn derive_insight<F>(&self, derive: F) -> Option<InsightResult>
    where
        F: FnOnce(&MeditationResult) -> InsightResult,
    {
        let mut slots = self.lock();
        let insight = derive(slots.last_meditation.as_ref()?);
        slots.last_insight = Some(insight.clone());
        Some(insight)
    }
}
