//! Content-shape signals: semantic drift, complexity, platform markers.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;
use strain_core::lexicon;
use strain_similarity::tokens;

use crate::history::{HistoryEntry, MutationHistory};

use super::{direction_of, Direction, SignalStatus};

/// How far variants have drifted from the original's vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticDriftSignal {
    pub status: SignalStatus,
    /// Mean of `1 - jaccard(variant, original)` over all mutations.
    pub mean_drift: f64,
    pub trend: Direction,
}

pub fn semantic_drift(history: &MutationHistory, config: &PredictionConfig) -> SemanticDriftSignal {
    if history.len() < config.min_history_for_trends {
        return SemanticDriftSignal {
            status: SignalStatus::InsufficientData,
            mean_drift: 0.0,
            trend: Direction::Stable,
        };
    }

    let original = tokens::significant_tokens(&history.original_content);
    let drift_of = |entry: &HistoryEntry| {
        1.0 - tokens::jaccard(&tokens::significant_tokens(&entry.content), &original)
    };

    let drifts: Vec<f64> = history.entries.iter().map(drift_of).collect();
    let mean_drift = drifts.iter().sum::<f64>() / drifts.len() as f64;

    let (early, late) = history.halves();
    let trend = direction_of(mean_of(early, drift_of), mean_of(late, drift_of));

    SemanticDriftSignal {
        status: SignalStatus::Ok,
        mean_drift,
        trend,
    }
}

/// Sentence-length × lexical-diversity complexity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexitySignal {
    pub status: SignalStatus,
    /// Mean per-mutation complexity score.
    pub score: f64,
    pub trend: Direction,
}

pub fn complexity(history: &MutationHistory, config: &PredictionConfig) -> ComplexitySignal {
    if history.len() < config.min_history_for_trends {
        return ComplexitySignal {
            status: SignalStatus::InsufficientData,
            score: 0.0,
            trend: Direction::Stable,
        };
    }

    let score_of = |entry: &HistoryEntry| text_complexity(&entry.content);
    let scores: Vec<f64> = history.entries.iter().map(score_of).collect();
    let score = scores.iter().sum::<f64>() / scores.len() as f64;

    let (early, late) = history.halves();
    let trend = direction_of(mean_of(early, score_of), mean_of(late, score_of));

    ComplexitySignal {
        status: SignalStatus::Ok,
        score,
        trend,
    }
}

/// Average words per sentence times distinct-word ratio.
pub fn text_complexity(text: &str) -> f64 {
    let words = lexicon::words(text);
    if words.is_empty() {
        return 0.0;
    }
    let sentences = text
        .split(['.', '!', '?'])
        .filter(|s| !s.trim().is_empty())
        .count()
        .max(1);
    let words_per_sentence = words.len() as f64 / sentences as f64;
    let distinct: BTreeSet<&str> = words.iter().map(String::as_str).collect();
    let diversity = distinct.len() as f64 / words.len() as f64;
    words_per_sentence * diversity
}

/// Cross-platform format markers: hashtags, mentions, URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformSignal {
    pub status: SignalStatus,
    pub hashtag_count: usize,
    pub mention_count: usize,
    pub url_count: usize,
    /// Markers present in mutations that the original did not carry.
    pub adaptation_detected: bool,
}

fn marker_re() -> &'static (Regex, Regex, Regex) {
    static RE: OnceLock<(Regex, Regex, Regex)> = OnceLock::new();
    RE.get_or_init(|| {
        (
            Regex::new(r"#\w+").expect("static regex"),
            Regex::new(r"@\w+").expect("static regex"),
            Regex::new(r"https?://\S+").expect("static regex"),
        )
    })
}

pub fn platform(history: &MutationHistory) -> PlatformSignal {
    if history.is_empty() {
        return PlatformSignal {
            status: SignalStatus::InsufficientData,
            hashtag_count: 0,
            mention_count: 0,
            url_count: 0,
            adaptation_detected: false,
        };
    }

    let (hashtag_re, mention_re, url_re) = marker_re();
    let count = |re: &Regex| {
        history
            .entries
            .iter()
            .map(|e| re.find_iter(&e.content).count())
            .sum::<usize>()
    };
    let hashtag_count = count(hashtag_re);
    let mention_count = count(mention_re);
    let url_count = count(url_re);

    let original_markers = hashtag_re.is_match(&history.original_content)
        || mention_re.is_match(&history.original_content)
        || url_re.is_match(&history.original_content);
    let adaptation_detected =
        !original_markers && (hashtag_count + mention_count + url_count) > 0;

    PlatformSignal {
        status: SignalStatus::Ok,
        hashtag_count,
        mention_count,
        url_count,
        adaptation_detected,
    }
}

fn mean_of(entries: &[HistoryEntry], f: impl Fn(&HistoryEntry) -> f64) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(f).sum::<f64>() / entries.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use strain_core::models::{MutationType, SemanticCluster};

    fn history_of(contents: &[&str]) -> MutationHistory {
        let t0 = Utc::now() - Duration::hours(100);
        MutationHistory {
            family_id: "f".into(),
            semantic_cluster: SemanticCluster::Medical,
            original_content: "turmeric cures covid in days".into(),
            original_timestamp: t0,
            entries: contents
                .iter()
                .enumerate()
                .map(|(i, c)| crate::history::HistoryEntry {
                    timestamp: t0 + Duration::hours(i as i64 + 1),
                    mutation_type: MutationType::ContextShift,
                    content: c.to_string(),
                    similarity: 0.8,
                    generation: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn drift_grows_as_vocabulary_changes() {
        let near = history_of(&[
            "turmeric cures covid in days",
            "turmeric cures covid in days now",
            "turmeric cures covid quickly in days",
        ]);
        let far = history_of(&[
            "turmeric cures covid in days",
            "ancient spice destroys the virus doctors hate",
            "miracle kitchen powder wipes out disease forever",
        ]);
        let near_drift = semantic_drift(&near, &PredictionConfig::default());
        let far_drift = semantic_drift(&far, &PredictionConfig::default());
        assert!(far_drift.mean_drift > near_drift.mean_drift);
        assert_eq!(far_drift.trend, Direction::Increasing);
    }

    #[test]
    fn platform_markers_flag_adaptation() {
        let h = history_of(&[
            "turmeric cures covid",
            "turmeric cures covid #truth @everyone",
            "turmeric cures covid https://example.com/proof",
        ]);
        let signal = platform(&h);
        assert_eq!(signal.hashtag_count, 1);
        assert_eq!(signal.mention_count, 1);
        assert_eq!(signal.url_count, 1);
        assert!(signal.adaptation_detected);
    }

    #[test]
    fn complexity_is_zero_for_empty_text() {
        assert_eq!(text_complexity(""), 0.0);
    }

    #[test]
    fn longer_sentences_score_higher() {
        let short = text_complexity("Virus bad. Stay home.");
        let long = text_complexity(
            "The ancient golden spice from distant markets destroys every known virus silently",
        );
        assert!(long > short);
    }
}
