use crate::corpus;
use crate::seed::{rng_for, MeditationRng};
use rand::seq::SliceRandom;

/// Draw up to `count` distinct catalog words from `rng`, in draw order.
///
/// `count` is clamped to the catalog size.
pub fn sample_with(rng: &mut MeditationRng, count: usize) -> Vec<String> {
    let words = corpus::all_words();
    let amount = count.min(words.len());
    let sampled: Vec<String> = words
        .choose_multiple(rng, amount)
        .map(|w| (*w).to_string())
        .collect();
    log::trace!("sampled {} of {} requested words", sampled.len(), count);
    sampled
}

/// Seeded sampling without replacement; repeatable for a fixed `(count, seed)`.
pub fn sample(count: usize, seed: Option<&str>) -> Vec<String> {
    let mut rng = rng_for(seed);
    sample_with(&mut rng, count)
}
