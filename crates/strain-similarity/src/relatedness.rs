//! Edit-distance relatedness for mutation-type *labels*.
//!
//! This is deliberately a different metric from content similarity: it only
//! ever compares short label strings (e.g. deciding whether a family's
//! dominant mutation pattern has shifted), with a fixed 0.6 threshold.

use strain_core::constants::DEFAULT_LABEL_RELATEDNESS_THRESHOLD;
use strain_core::models::MutationType;

/// Levenshtein distance.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Normalized string similarity in [0, 1]: `1 - distance / max_len`.
pub fn string_similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / max_len as f64
}

/// Whether two mutation-type labels count as related (fixed 0.6 threshold).
pub fn labels_related(a: MutationType, b: MutationType) -> bool {
    string_similarity(a.as_str(), b.as_str()) >= DEFAULT_LABEL_RELATEDNESS_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levenshtein_basics() {
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("abcd", "abce"), 1);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
    }

    #[test]
    fn string_similarity_is_symmetric() {
        let a = "TIME_SHIFT";
        let b = "CONTEXT_SHIFT";
        assert_eq!(string_similarity(a, b), string_similarity(b, a));
    }

    #[test]
    fn identical_labels_are_related() {
        assert!(labels_related(
            MutationType::WordSubstitution,
            MutationType::WordSubstitution
        ));
    }

    #[test]
    fn dissimilar_labels_are_unrelated() {
        assert!(!labels_related(
            MutationType::NumericalChange,
            MutationType::EmotionalAmplification
        ));
    }
}
