//! Signal detectors. Each is a pure function over a [`MutationHistory`] and
//! reports its own status; a thin history yields `InsufficientData`, never
//! an error.
//!
//! | Signal | What it measures |
//! |--------|------------------|
//! | Velocity | mutations/hour, recent window vs lifetime |
//! | Temporal clustering | gap statistics, burstiness |
//! | Pattern evolution | dominant mutation type per third, shifts |
//! | Semantic drift | token distance from the original, trended |
//! | Virality | urgency-keyword density, trended |
//! | Audience | semantic-cluster diversity across variants |
//! | Geography | location-mention spread |
//! | Complexity | words/sentence × lexical diversity, trended |
//! | Platform | hashtag/mention/URL format markers |

pub mod content;
pub mod pattern;
pub mod reach;
pub mod tempo;

pub use content::{ComplexitySignal, PlatformSignal, SemanticDriftSignal};
pub use pattern::PatternEvolutionSignal;
pub use reach::{AudienceSignal, GeographySignal, ViralitySignal};
pub use tempo::{TemporalClusteringSignal, VelocitySignal};

use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;

use crate::history::MutationHistory;

/// Whether a signal had enough history to say anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalStatus {
    Ok,
    InsufficientData,
}

/// Velocity trend over the recent window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Accelerating,
    Decelerating,
    Stable,
}

/// Direction of a trended scalar (halves comparison, 10% margin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Increasing,
    Decreasing,
    Stable,
}

/// Compare the mean of two halves with a 10% dead band.
pub(crate) fn direction_of(early_mean: f64, late_mean: f64) -> Direction {
    if late_mean > early_mean * 1.1 {
        Direction::Increasing
    } else if late_mean < early_mean * 0.9 {
        Direction::Decreasing
    } else {
        Direction::Stable
    }
}

/// All nine signals for one family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub velocity: VelocitySignal,
    pub temporal: TemporalClusteringSignal,
    pub evolution: PatternEvolutionSignal,
    pub drift: SemanticDriftSignal,
    pub virality: ViralitySignal,
    pub audience: AudienceSignal,
    pub geography: GeographySignal,
    pub complexity: ComplexitySignal,
    pub platform: PlatformSignal,
}

impl PatternAnalysis {
    /// Run every detector.
    pub fn analyze(history: &MutationHistory, config: &PredictionConfig) -> Self {
        Self {
            velocity: tempo::velocity(history, config),
            temporal: tempo::temporal_clustering(history, config),
            evolution: pattern::evolution(history, config),
            drift: content::semantic_drift(history, config),
            virality: reach::virality(history, config),
            audience: reach::audience(history, config),
            geography: reach::geography(history, config),
            complexity: content::complexity(history, config),
            platform: content::platform(history),
        }
    }

    /// Count of signals that reported data.
    pub fn active_count(&self) -> usize {
        [
            self.velocity.status,
            self.temporal.status,
            self.evolution.status,
            self.drift.status,
            self.virality.status,
            self.audience.status,
            self.geography.status,
            self.complexity.status,
            self.platform.status,
        ]
        .iter()
        .filter(|s| **s == SignalStatus::Ok)
        .count()
    }

    /// Count of signals that could not report.
    pub fn missing_count(&self) -> usize {
        9 - self.active_count()
    }
}
