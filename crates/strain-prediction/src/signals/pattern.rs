//! Mutation-pattern evolution across a family's lifetime.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;
use strain_core::models::MutationType;
use strain_similarity::relatedness::labels_related;

use crate::history::{HistoryEntry, MutationHistory};

use super::SignalStatus;

/// Dominant mutation type per lifetime third, and whether the family has
/// shifted from one kind of rewriting to an unrelated one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternEvolutionSignal {
    pub status: SignalStatus,
    pub early_dominant: Option<MutationType>,
    pub middle_dominant: Option<MutationType>,
    pub late_dominant: Option<MutationType>,
    /// Early and late dominants exist and are unrelated labels.
    pub pattern_shift: bool,
}

pub fn evolution(history: &MutationHistory, config: &PredictionConfig) -> PatternEvolutionSignal {
    if history.len() < config.min_history_for_trends {
        return PatternEvolutionSignal {
            status: SignalStatus::InsufficientData,
            early_dominant: None,
            middle_dominant: None,
            late_dominant: None,
            pattern_shift: false,
        };
    }

    let (early, middle, late) = history.thirds();
    let early_dominant = dominant_type(early);
    let middle_dominant = dominant_type(middle);
    let late_dominant = dominant_type(late);

    let pattern_shift = match (early_dominant, late_dominant) {
        (Some(a), Some(b)) => !labels_related(a, b),
        _ => false,
    };

    PatternEvolutionSignal {
        status: SignalStatus::Ok,
        early_dominant,
        middle_dominant,
        late_dominant,
        pattern_shift,
    }
}

/// Most frequent mutation type in a slice; ties go to whichever type
/// appeared first in the slice.
fn dominant_type(entries: &[HistoryEntry]) -> Option<MutationType> {
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    let mut first_seen: Vec<MutationType> = Vec::new();
    for entry in entries {
        let idx = match first_seen.iter().position(|t| *t == entry.mutation_type) {
            Some(idx) => idx,
            None => {
                first_seen.push(entry.mutation_type);
                first_seen.len() - 1
            }
        };
        *counts.entry(idx).or_insert(0) += 1;
    }
    let mut best: Option<(usize, usize)> = None;
    for (idx, count) in counts {
        match best {
            Some((_, best_count)) if count <= best_count => {}
            _ => best = Some((idx, count)),
        }
    }
    best.map(|(idx, _)| first_seen[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use strain_core::models::SemanticCluster;

    fn history_of(types: &[MutationType]) -> MutationHistory {
        let t0 = Utc::now() - Duration::hours(50);
        MutationHistory {
            family_id: "f".into(),
            semantic_cluster: SemanticCluster::General,
            original_content: "original claim".into(),
            original_timestamp: t0,
            entries: types
                .iter()
                .enumerate()
                .map(|(i, t)| HistoryEntry {
                    timestamp: t0 + Duration::hours(i as i64 + 1),
                    mutation_type: *t,
                    content: format!("variant {i}"),
                    similarity: 0.8,
                    generation: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn detects_shift_between_unrelated_dominants() {
        let h = history_of(&[
            MutationType::WordSubstitution,
            MutationType::WordSubstitution,
            MutationType::EmotionalAmplification,
            MutationType::EmotionalAmplification,
            MutationType::EmotionalAmplification,
            MutationType::EmotionalAmplification,
        ]);
        let signal = evolution(&h, &PredictionConfig::default());
        assert_eq!(signal.early_dominant, Some(MutationType::WordSubstitution));
        assert_eq!(
            signal.late_dominant,
            Some(MutationType::EmotionalAmplification)
        );
        assert!(signal.pattern_shift);
    }

    #[test]
    fn stable_pattern_is_not_a_shift() {
        let h = history_of(&[MutationType::NumericalChange; 6]);
        let signal = evolution(&h, &PredictionConfig::default());
        assert_eq!(signal.early_dominant, Some(MutationType::NumericalChange));
        assert!(!signal.pattern_shift);
    }

    #[test]
    fn tie_goes_to_first_seen_type() {
        assert_eq!(
            dominant_type(&history_of(&[
                MutationType::ContextShift,
                MutationType::NumericalChange,
            ]).entries),
            Some(MutationType::ContextShift)
        );
    }

    #[test]
    fn thin_history_reports_insufficient_data() {
        let h = history_of(&[MutationType::ContextShift]);
        let signal = evolution(&h, &PredictionConfig::default());
        assert_eq!(signal.status, SignalStatus::InsufficientData);
    }
}
