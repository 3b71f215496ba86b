use crate::types::MeditationResult;

const STRUCTURAL_MARKERS: [&str; 4] = ["pattern", "structure", "connection", "flow"];

pub const FALLBACK_INSIGHT: &str =
    "The meditation produced a coherent emergent pattern without obvious contradictions.";

/// Canned observations about a meditation; at most three, or the single fallback.
///
/// Sentences of 5 to 10 words trigger no density observation.
pub fn extract(result: &MeditationResult) -> Vec<String> {
    let mut insights = Vec::with_capacity(3);

    if !result.context_words.is_empty() {
        insights.push(format!(
            "The context words {} shaped the emergence in unexpected ways.",
            result.context_words.join(", ")
        ));
    }

    let word_count = result.composed_sentence.split_whitespace().count();
    if word_count > 10 {
        insights.push(format!(
            "The sentence contains {word_count} words, suggesting rich conceptual density."
        ));
    } else if word_count < 5 {
        insights.push(format!(
            "The concise {word_count}-word sentence indicates focused emergence."
        ));
    }

    let structural: Vec<&str> = result
        .sampled_words
        .iter()
        .map(String::as_str)
        .filter(|w| STRUCTURAL_MARKERS.contains(w))
        .collect();
    if !structural.is_empty() {
        insights.push(format!(
            "Structural concepts like {} dominate this meditation.",
            structural.join(", ")
        ));
    }

    if insights.is_empty() {
        insights.push(FALLBACK_INSIGHT.to_string());
    }
    insights
}
