//! Fixed word catalog sampled by meditations.
//!
//! Words are grouped by theme for readability only; nothing reads the grouping.

use once_cell::sync::Lazy;
use std::collections::HashSet;

const STRUCTURAL_RELATIONS: &[&str] = &[
    "pattern", "structure", "connection", "relationship", "interface",
    "binding", "constraint", "coupling", "dependency", "hierarchy",
    "layer", "boundary", "transition", "gradient", "threshold",
    "symmetry", "asymmetry", "balance", "tension", "equilibrium",
];

const MOVEMENT_AND_CHANGE: &[&str] = &[
    "flow", "cascade", "spiral", "cycle", "momentum",
    "acceleration", "deceleration", "inversion", "reversal", "iteration",
    "propagation", "diffusion", "concentration", "dispersal", "distribution",
    "accumulation", "depletion", "saturation", "emergence", "collapse",
];

const STATES_AND_CONDITIONS: &[&str] = &[
    "potential", "active", "latent", "manifest", "dormant",
    "stable", "volatile", "dynamic", "static", "fluid",
    "resolved", "unresolved", "open", "closed", "permeable",
    "present", "absent", "partial", "complete", "fractional",
];

const QUALITIES_AND_PROPERTIES: &[&str] = &[
    "density", "elasticity", "porosity", "brittleness", "fluidity",
    "opacity", "transparency", "conductivity", "resistance", "affinity",
    "resonance", "dissonance", "harmony", "discord", "coherence",
    "fragmentation", "integration", "coherence", "confusion", "clarity",
];

const PROCESSES: &[&str] = &[
    "iterate", "recurse", "branch", "merge", "diverge",
    "converge", "stabilize", "destabilize", "amplify", "dampen",
    "catalyze", "inhibit", "propagate", "contain", "distribute",
    "compose", "decompose", "modulate", "regulate", "optimize",
];

const SPATIAL_RELATIONS: &[&str] = &[
    "adjacent", "nested", "overlapping", "distinct", "parallel",
    "perpendicular", "concentric", "eccentric", "central", "peripheral",
    "superficial", "deep", "internal", "external", "intermediate",
    "proximal", "distal", "contiguous", "separated", "bridging",
];

const TEMPORAL_ASPECTS: &[&str] = &[
    "momentum", "precedence", "sequence", "simultaneous", "asynchronous",
    "delayed", "immediate", "accelerating", "decelerating", "cyclic",
    "linear", "recursive", "causal", "consequential", "contingent",
    "inevitable", "contingent", "reversible", "irreversible", "transient",
];

const LOGICAL_OPERATORS: &[&str] = &[
    "and", "or", "not", "if", "then", "unless",
    "because", "therefore", "consequently", "implies", "requires",
    "permits", "forbids", "invokes", "suspends", "overrides",
    "contradicts", "complements", "extends", "restricts", "refines",
];

const SCALE_AND_MAGNITUDE: &[&str] = &[
    "granular", "coarse", "microscopic", "macroscopic", "intermediate",
    "minimal", "maximal", "threshold", "saturation", "critical",
    "marginal", "dominant", "negligible", "substantial", "proportional",
    "scaled", "distributed", "concentrated", "diffuse", "localized",
];

const COUPLING_AND_COMPOSITION: &[&str] = &[
    "coupled", "decoupled", "loosely", "tightly", "strongly",
    "weakly", "directly", "indirectly", "mediated", "unmediated",
    "composite", "atomic", "modular", "monolithic", "distributed",
    "redundant", "singular", "replicated", "unique", "shared",
];

const THEMES: &[&[&str]] = &[
    STRUCTURAL_RELATIONS,
    MOVEMENT_AND_CHANGE,
    STATES_AND_CONDITIONS,
    QUALITIES_AND_PROPERTIES,
    PROCESSES,
    SPATIAL_RELATIONS,
    TEMPORAL_ASPECTS,
    LOGICAL_OPERATORS,
    SCALE_AND_MAGNITUDE,
    COUPLING_AND_COMPOSITION,
];

// Several themes share words; only the first occurrence is kept.
static CATALOG: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut seen = HashSet::new();
    THEMES
        .iter()
        .flat_map(|theme| theme.iter().copied())
        .filter(|word| seen.insert(*word))
        .collect()
});

/// The ordered, duplicate-free word catalog.
pub fn all_words() -> &'static [&'static str] {
    CATALOG.as_slice()
}

pub fn len() -> usize {
    CATALOG.len()
}

pub fn contains(word: &str) -> bool {
    CATALOG.iter().any(|w| *w == word)
}
