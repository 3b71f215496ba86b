use crate::seed::{rng_for, MeditationRng};
use rand::seq::SliceRandom;

/// Blend sampled and context words into one shuffled pseudo-sentence.
///
/// Fewer than three words are joined as-is; otherwise the first word is the subject,
/// the second the verb and the rest the object. An empty blend yields `""`.
pub fn compose_with(rng: &mut MeditationRng, sampled: &[String], context: &[String]) -> String {
    let mut words: Vec<&str> = sampled
        .iter()
        .chain(context.iter())
        .map(String::as_str)
        .collect();
    words.shuffle(rng);

    if words.len() < 3 {
        return words.join(" ");
    }

    let subject = words[0];
    let verb = words[1];
    let object = words[2..].join(" ");
    format!("{subject} {verb} {object}")
}

pub fn compose(sampled: &[String], context: &[String], seed: Option<&str>) -> String {
    let mut rng = rng_for(seed);
    compose_with(&mut rng, sampled, context)
}
