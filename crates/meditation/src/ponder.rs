//! Reflective expansion of insight text.

use crate::seed::select_index;
use crate::types::{InsightResult, PonderOutcome, Reflection};

pub const REFLECTION_METHOD: &str = "internal_reflection";

/// Clauses appended in this order for each theme found in the insight text.
const THEME_CLAUSES: [(&str, &str); 3] = [
    (
        "structure",
        "The structural elements suggest a framework for understanding complex relationships. ",
    ),
    (
        "emergence",
        "Emergent patterns indicate how simple interactions can create complex behaviors. ",
    ),
    (
        "context",
        "Contextual anchors provide stability amidst conceptual flow. ",
    ),
];

const CLOSING: &str =
    "\n\nThis meditation invites further exploration of how individual components interact to create meaning.";

pub const HAIKUS: [&str; 3] = [
    "Patterns emerge\nFrom chaos and structure\nConsciousness flows",
    "Words weave meaning\nContext shapes emergence\nInsight awakens",
    "Tension resolves\nIn balanced asymmetry\nHarmony emerges",
];

/// Expand `insight_text`, or the stored insight when no text is given.
///
/// Explicit text wins over the stored insight; the session reference still comes from
/// the stored insight when one exists.
pub fn ponder(
    insight_text: Option<&str>,
    stored: Option<&InsightResult>,
    with_haiku: bool,
) -> PonderOutcome {
    let insights = match (insight_text.filter(|t| !t.is_empty()), stored) {
        (Some(text), _) => text.to_string(),
        (None, Some(insight)) => insight.insights.join(" "),
        (None, None) => return PonderOutcome::NoData,
    };

    let lowered = insights.to_lowercase();
    let mut contemplation = format!("Upon deeper contemplation of: {insights}\n\n");
    for (theme, clause) in THEME_CLAUSES {
        if lowered.contains(theme) {
            contemplation.push_str(clause);
        }
    }
    contemplation.push_str(CLOSING);

    let haiku = with_haiku.then(|| HAIKUS[select_index(&insights, HAIKUS.len())].to_string());

    PonderOutcome::Reflection(Reflection {
        contemplation,
        method: REFLECTION_METHOD,
        session_ref: stored.map(|insight| insight.source_session_id.clone()),
        haiku,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(insights: &[&str], session: &str) -> InsightResult {
        InsightResult {
            insights: insights.iter().map(|s| s.to_string()).collect(),
            created_at: 0,
            source_session_id: session.to_string(),
        }
    }

    fn reflection(outcome: PonderOutcome) -> Reflection {
        match outcome {
            PonderOutcome::Reflection(reflection) => reflection,
            PonderOutcome::NoData => panic!("expected a reflection"),
        }
    }

    #[test]
    fn nothing_to_ponder_is_no_data() {
        assert_eq!(ponder(None, None, true), PonderOutcome::NoData);
        assert_eq!(ponder(Some(""), None, false), PonderOutcome::NoData);
    }

    #[test]
    fn clauses_follow_fixed_theme_order() {
        let out = reflection(ponder(
            Some("CONTEXT first, then Emergence, finally structure"),
            None,
            false,
        ));
        let structure = out.contemplation.find("The structural elements");
        let emergence = out.contemplation.find("Emergent patterns");
        let context = out.contemplation.find("Contextual anchors");
        assert!(structure.is_some() && emergence.is_some() && context.is_some());
        assert!(structure < emergence && emergence < context);
        assert!(out.contemplation.ends_with(CLOSING));
        assert_eq!(out.method, REFLECTION_METHOD);
        assert_eq!(out.haiku, None);
        assert_eq!(out.session_ref, None);
    }

    #[test]
    fn unmatched_text_gets_only_the_closing() {
        let out = reflection(ponder(Some("quiet"), None, false));
        assert_eq!(
            out.contemplation,
            format!("Upon deeper contemplation of: quiet\n\n{CLOSING}")
        );
    }

    #[test]
    fn stored_insight_is_joined_and_referenced() {
        let insight = stored(&["The context words x shaped it.", "Second."], "42_seed");
        let out = reflection(ponder(None, Some(&insight), true));
        assert!(out
            .contemplation
            .starts_with("Upon deeper contemplation of: The context words x shaped it. Second."));
        assert!(out.contemplation.contains("Contextual anchors"));
        assert_eq!(out.session_ref.as_deref(), Some("42_seed"));
        let haiku = out.haiku.expect("haiku requested");
        assert!(HAIKUS.contains(&haiku.as_str()));
    }

    #[test]
    fn explicit_text_wins_but_keeps_session_ref() {
        let insight = stored(&["structure"], "7_x");
        let out = reflection(ponder(Some("emergence"), Some(&insight), false));
        assert!(out.contemplation.contains("Emergent patterns"));
        assert!(!out.contemplation.contains("The structural elements"));
        assert_eq!(out.session_ref.as_deref(), Some("7_x"));
    }

    #[test]
    fn haiku_choice_is_stable() {
        let a = reflection(ponder(Some("same text"), None, true)).haiku;
        let b = reflection(ponder(Some("same text"), None, true)).haiku;
        assert_eq!(a, b);
    }
}
