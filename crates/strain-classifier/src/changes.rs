//! Parent/child diff report, computed once at ingest and stored on the node.

use std::collections::BTreeSet;

use strain_core::lexicon;
use strain_core::models::{ChangeReport, NumericChange};

use crate::scan::numeric_tokens;

/// Build the stored change report for a child text against its parent.
pub fn analyze_changes(child: &str, parent: &str) -> ChangeReport {
    let words_child = lexicon::words(child);
    let words_parent = lexicon::words(parent);

    let set_child: BTreeSet<&str> = words_child.iter().map(String::as_str).collect();
    let set_parent: BTreeSet<&str> = words_parent.iter().map(String::as_str).collect();

    let added_words: Vec<String> = set_child
        .difference(&set_parent)
        .map(|w| w.to_string())
        .collect();
    let removed_words: Vec<String> = set_parent
        .difference(&set_child)
        .map(|w| w.to_string())
        .collect();

    ChangeReport {
        length_delta: child.chars().count() as i64 - parent.chars().count() as i64,
        word_count_delta: words_child.len() as i64 - words_parent.len() as i64,
        added_words,
        removed_words,
        numeric_changes: numeric_diff(child, parent),
    }
}

/// Positional diff of the numeric-token sequences.
fn numeric_diff(child: &str, parent: &str) -> Vec<NumericChange> {
    let from = numeric_tokens(parent);
    let to = numeric_tokens(child);
    let len = from.len().max(to.len());

    (0..len)
        .filter_map(|i| {
            let f = from.get(i).cloned();
            let t = to.get(i).cloned();
            if f == t {
                None
            } else {
                Some(NumericChange {
                    position: i,
                    from: f,
                    to: t,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_added_and_removed_words() {
        let report = analyze_changes("the lake turned red", "the lake turned green");
        assert_eq!(report.added_words, vec!["red"]);
        assert_eq!(report.removed_words, vec!["green"]);
        assert_eq!(report.word_count_delta, 0);
    }

    #[test]
    fn numeric_diff_is_positional() {
        let report = analyze_changes(
            "gone in 72 hours, 99% effective",
            "gone in 3 days, 99% effective",
        );
        assert_eq!(
            report.numeric_changes,
            vec![NumericChange {
                position: 0,
                from: Some("3".into()),
                to: Some("72".into()),
            }]
        );
    }

    #[test]
    fn numeric_diff_reports_additions_as_open_ended() {
        let report = analyze_changes("5000 dead in 2 cities", "thousands dead");
        assert_eq!(report.numeric_changes.len(), 2);
        assert_eq!(report.numeric_changes[0].from, None);
        assert_eq!(report.numeric_changes[0].to, Some("5000".into()));
    }
}
