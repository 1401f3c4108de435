//! Engine configuration. All thresholds are empirically chosen constants
//! (see [`crate::constants`]) surfaced here as named, overridable fields.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::{StrainError, StrainResult};

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Composite similarity at or above this is a variant (inclusive).
    pub similarity_threshold: f64,
    /// Boost per semantic cluster present in both texts.
    pub cluster_boost: f64,
    /// Relatedness threshold when comparing mutation-type labels.
    pub label_relatedness_threshold: f64,
    /// Default result cap for variant search.
    pub max_variant_results: usize,
    /// Window counted as "active branches" in spread analysis (hours).
    pub active_branch_window_hours: i64,
    /// Prediction subsystem tuning.
    pub prediction: PredictionConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: constants::DEFAULT_SIMILARITY_THRESHOLD,
            cluster_boost: constants::CLUSTER_BOOST,
            label_relatedness_threshold: constants::DEFAULT_LABEL_RELATEDNESS_THRESHOLD,
            max_variant_results: constants::DEFAULT_MAX_VARIANT_RESULTS,
            active_branch_window_hours: constants::DEFAULT_ACTIVE_BRANCH_WINDOW_HOURS,
            prediction: PredictionConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from TOML, falling back to defaults for absent fields.
    pub fn from_toml_str(s: &str) -> StrainResult<Self> {
        toml::from_str(s).map_err(|e| StrainError::Config {
            reason: e.to_string(),
        })
    }
}

/// Prediction-signal trigger constants.
///
/// These weights are preserved from observed behavior; there is no derivation
/// behind them beyond tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Recent window compared to lifetime average for velocity trend (hours).
    pub recent_window_hours: i64,
    /// Recent/lifetime rate ratio above which velocity is accelerating.
    pub accelerating_ratio: f64,
    /// Recent/lifetime rate ratio below which velocity is decelerating.
    pub decelerating_ratio: f64,
    /// Minimum history length before trend signals report data.
    pub min_history_for_trends: usize,
    /// Mean semantic drift above which a drift prediction fires.
    pub drift_trigger: f64,
    /// Urgency keyword density (per mutation) above which virality fires.
    pub virality_trigger: f64,
    /// Mean gap (hours) below which temporal clustering counts as bursty.
    pub burst_gap_hours: f64,
    /// Base confidence contribution per observed mutation.
    pub confidence_per_mutation: f64,
    /// Cap on the mutation-count-derived base confidence.
    pub base_confidence_cap: f64,
    /// Additive adjustment per strongly-active signal.
    pub signal_confidence_boost: f64,
    /// Subtractive adjustment per insufficient-data signal.
    pub missing_signal_penalty: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            recent_window_hours: constants::DEFAULT_RECENT_WINDOW_HOURS,
            accelerating_ratio: 1.5,
            decelerating_ratio: 0.5,
            min_history_for_trends: constants::MIN_HISTORY_FOR_TRENDS,
            drift_trigger: 0.4,
            virality_trigger: 1.0,
            burst_gap_hours: 2.0,
            confidence_per_mutation: 0.05,
            base_confidence_cap: 0.6,
            signal_confidence_boost: 0.05,
            missing_signal_penalty: 0.03,
        }
    }
}
