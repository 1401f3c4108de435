//! Precomputed feature scan for one parent/child pair. Every rule predicate
//! reads from this; nothing is recomputed per rule.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

use strain_core::lexicon;

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+(?:\.\d+)?$").expect("static regex"))
}

/// Extract standalone numeric words from raw text, in order of appearance.
///
/// Only whole whitespace-delimited words count, after trimming surrounding
/// punctuation: "in 3 days" yields "3", "99.9%" yields "99.9", but the "19"
/// inside "COVID-19" is part of a name, not a quantity.
pub fn numeric_tokens(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter_map(|word| {
            let trimmed = word.trim_matches(|c: char| c.is_ascii_punctuation());
            (!trimmed.is_empty() && number_re().is_match(trimmed))
                .then(|| trimmed.to_string())
        })
        .collect()
}

/// All pairwise features the rule cascade looks at.
#[derive(Debug, Clone)]
pub struct ChangeScan {
    pub numbers_parent: Vec<String>,
    pub numbers_child: Vec<String>,
    pub urgency_parent: usize,
    pub urgency_child: usize,
    pub location_parent: usize,
    pub location_child: usize,
    pub time_parent: usize,
    pub time_child: usize,
    pub authority_parent: usize,
    pub authority_child: usize,
    pub word_count_parent: usize,
    pub word_count_child: usize,
    /// Distinct shared words over the larger distinct-word count.
    pub shared_word_ratio: f64,
}

impl ChangeScan {
    /// Scan a child text against its parent.
    pub fn of(child: &str, parent: &str) -> Self {
        let words_child = lexicon::words(child);
        let words_parent = lexicon::words(parent);

        let set_child: BTreeSet<&str> = words_child.iter().map(String::as_str).collect();
        let set_parent: BTreeSet<&str> = words_parent.iter().map(String::as_str).collect();
        let shared = set_child.intersection(&set_parent).count();
        let larger = set_child.len().max(set_parent.len());
        let shared_word_ratio = if larger == 0 {
            1.0
        } else {
            shared as f64 / larger as f64
        };

        Self {
            numbers_parent: numeric_tokens(parent),
            numbers_child: numeric_tokens(child),
            urgency_parent: lexicon::count_hits(&words_parent, lexicon::URGENCY_KEYWORDS),
            urgency_child: lexicon::count_hits(&words_child, lexicon::URGENCY_KEYWORDS),
            location_parent: lexicon::count_hits(&words_parent, lexicon::LOCATION_KEYWORDS),
            location_child: lexicon::count_hits(&words_child, lexicon::LOCATION_KEYWORDS),
            time_parent: lexicon::count_hits(&words_parent, lexicon::TIME_KEYWORDS),
            time_child: lexicon::count_hits(&words_child, lexicon::TIME_KEYWORDS),
            authority_parent: lexicon::count_hits(&words_parent, lexicon::AUTHORITY_KEYWORDS),
            authority_child: lexicon::count_hits(&words_child, lexicon::AUTHORITY_KEYWORDS),
            word_count_parent: words_parent.len(),
            word_count_child: words_child.len(),
            shared_word_ratio,
        }
    }
}
