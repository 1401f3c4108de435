//! The ordered rule table. Evaluated top to bottom; first match wins.

use strain_core::constants::{
    PHRASE_ADDITION_RATIO, WORD_SUBSTITUTION_MAX, WORD_SUBSTITUTION_MIN,
};
use strain_core::models::MutationType;

use crate::scan::ChangeScan;

/// One classification rule: a named predicate over the scan and the label it
/// assigns.
pub struct Rule {
    pub name: &'static str,
    pub label: MutationType,
    pub predicate: fn(&ChangeScan) -> bool,
}

/// Priority-ordered cascade. Order is part of the contract.
pub const RULES: &[Rule] = &[
    Rule {
        name: "numeric tokens differ in count or value",
        label: MutationType::NumericalChange,
        predicate: |s| s.numbers_child != s.numbers_parent,
    },
    Rule {
        name: "urgency keyword count increased",
        label: MutationType::EmotionalAmplification,
        predicate: |s| s.urgency_child > s.urgency_parent,
    },
    Rule {
        name: "location keyword count changed",
        label: MutationType::LocationChange,
        predicate: |s| s.location_child != s.location_parent,
    },
    Rule {
        name: "time reference count changed",
        label: MutationType::TimeShift,
        predicate: |s| s.time_child != s.time_parent,
    },
    Rule {
        name: "authority attribution count changed",
        label: MutationType::SourceModification,
        predicate: |s| s.authority_child != s.authority_parent,
    },
    Rule {
        name: "word count grew past the phrase-addition ratio",
        label: MutationType::PhraseAddition,
        predicate: |s| {
            s.word_count_child as f64 > PHRASE_ADDITION_RATIO * s.word_count_parent as f64
        },
    },
    Rule {
        name: "shared-word ratio in the substitution band",
        label: MutationType::WordSubstitution,
        predicate: |s| {
            s.shared_word_ratio >= WORD_SUBSTITUTION_MIN
                && s.shared_word_ratio <= WORD_SUBSTITUTION_MAX
        },
    },
];

/// Classify a child text against its parent. Falls through to
/// `CONTEXT_SHIFT` when no rule fires.
pub fn classify(child: &str, parent: &str) -> MutationType {
    classify_scan(&ChangeScan::of(child, parent))
}

/// Classify from a precomputed scan.
pub fn classify_scan(scan: &ChangeScan) -> MutationType {
    RULES
        .iter()
        .find(|rule| (rule.predicate)(scan))
        .map(|rule| rule.label)
        .unwrap_or(MutationType::ContextShift)
}

/// Names of every rule whose predicate fires — not just the winner. Used for
/// the `mutation_patterns` field of variant analysis.
pub fn matched_patterns(scan: &ChangeScan) -> Vec<&'static str> {
    RULES
        .iter()
        .filter(|rule| (rule.predicate)(scan))
        .map(|rule| rule.name)
        .collect()
}
