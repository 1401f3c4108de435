//! Reach signals: urgency loading, audience breadth, geographic spread.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;
use strain_core::lexicon;
use strain_core::models::SemanticCluster;

use crate::history::{HistoryEntry, MutationHistory};

use super::{direction_of, Direction, SignalStatus};

/// Urgency-keyword density across variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViralitySignal {
    pub status: SignalStatus,
    /// Mean urgency hits per mutation.
    pub urgency_density: f64,
    pub trend: Direction,
}

pub fn virality(history: &MutationHistory, config: &PredictionConfig) -> ViralitySignal {
    if history.len() < config.min_history_for_trends {
        return ViralitySignal {
            status: SignalStatus::InsufficientData,
            urgency_density: 0.0,
            trend: Direction::Stable,
        };
    }

    let density_of =
        |e: &HistoryEntry| lexicon::count_hits_in(&e.content, lexicon::URGENCY_KEYWORDS) as f64;
    let urgency_density =
        history.entries.iter().map(density_of).sum::<f64>() / history.len() as f64;

    let (early, late) = history.halves();
    let trend = direction_of(mean_of(early, density_of), mean_of(late, density_of));

    ViralitySignal {
        status: SignalStatus::Ok,
        urgency_density,
        trend,
    }
}

/// How many topical clusters the family's variants now touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudienceSignal {
    pub status: SignalStatus,
    pub clusters_touched: Vec<SemanticCluster>,
    /// Touched keyword clusters over the five available.
    pub diversity: f64,
}

pub fn audience(history: &MutationHistory, config: &PredictionConfig) -> AudienceSignal {
    if history.len() < config.min_history_for_trends {
        return AudienceSignal {
            status: SignalStatus::InsufficientData,
            clusters_touched: Vec::new(),
            diversity: 0.0,
        };
    }

    let mut touched: Vec<SemanticCluster> = Vec::new();
    for cluster in SemanticCluster::KEYED {
        let hit = history.entries.iter().any(|e| cluster.hits(&e.content) > 0);
        if hit {
            touched.push(cluster);
        }
    }
    let diversity = touched.len() as f64 / SemanticCluster::KEYED.len() as f64;

    AudienceSignal {
        status: SignalStatus::Ok,
        clusters_touched: touched,
        diversity,
    }
}

/// Whether the claim stays local or picks up place names as it spreads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpreadPattern {
    Localized,
    Spreading,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeographySignal {
    pub status: SignalStatus,
    /// Total location-keyword mentions across mutations.
    pub mention_count: usize,
    /// Distinct location keywords seen.
    pub distinct_locations: usize,
    pub pattern: SpreadPattern,
}

pub fn geography(history: &MutationHistory, config: &PredictionConfig) -> GeographySignal {
    if history.len() < config.min_history_for_trends {
        return GeographySignal {
            status: SignalStatus::InsufficientData,
            mention_count: 0,
            distinct_locations: 0,
            pattern: SpreadPattern::Localized,
        };
    }

    let mut mention_count = 0usize;
    let mut distinct: BTreeSet<&str> = BTreeSet::new();
    for entry in &history.entries {
        for word in lexicon::words(&entry.content) {
            if let Some(hit) = lexicon::LOCATION_KEYWORDS
                .iter()
                .find(|k| **k == word.as_str())
            {
                mention_count += 1;
                distinct.insert(hit);
            }
        }
    }

    let pattern = if distinct.len() > 1 {
        SpreadPattern::Spreading
    } else {
        SpreadPattern::Localized
    };

    GeographySignal {
        status: SignalStatus::Ok,
        mention_count,
        distinct_locations: distinct.len(),
        pattern,
    }
}

fn mean_of(entries: &[HistoryEntry], f: impl Fn(&HistoryEntry) -> f64) -> f64 {
    if entries.is_empty() {
        return 0.0;
    }
    entries.iter().map(f).sum::<f64>() / entries.len() as f64
}
