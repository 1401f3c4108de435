//! Timing signals: velocity and temporal clustering.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;

use crate::history::MutationHistory;

use super::{SignalStatus, Trend};

/// Mutation rate, lifetime vs recent window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VelocitySignal {
    pub status: SignalStatus,
    /// Mutations per hour over the family lifetime.
    pub rate_per_hour: f64,
    /// Mutations per hour inside the trailing window (relative to the
    /// newest mutation, so the signal is a pure function of history).
    pub recent_rate: f64,
    pub trend: Trend,
}

pub fn velocity(history: &MutationHistory, config: &PredictionConfig) -> VelocitySignal {
    if history.len() < config.min_history_for_trends {
        return VelocitySignal {
            status: SignalStatus::InsufficientData,
            rate_per_hour: 0.0,
            recent_rate: 0.0,
            trend: Trend::Stable,
        };
    }

    let rate_per_hour = history.len() as f64 / history.lifetime_hours();

    let newest = history.entries.last().map(|e| e.timestamp);
    let recent_count = match newest {
        Some(newest) => {
            let cutoff = newest - Duration::hours(config.recent_window_hours);
            history
                .entries
                .iter()
                .filter(|e| e.timestamp >= cutoff)
                .count()
        }
        None => 0,
    };
    let recent_rate = recent_count as f64 / config.recent_window_hours as f64;

    let trend = if recent_rate > rate_per_hour * config.accelerating_ratio {
        Trend::Accelerating
    } else if recent_rate < rate_per_hour * config.decelerating_ratio {
        Trend::Decelerating
    } else {
        Trend::Stable
    };

    VelocitySignal {
        status: SignalStatus::Ok,
        rate_per_hour,
        recent_rate,
        trend,
    }
}

/// Gap statistics between consecutive mutations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalClusteringSignal {
    pub status: SignalStatus,
    pub mean_gap_hours: f64,
    /// Coefficient of variation of the gaps; high values mean bursts.
    pub burstiness: f64,
    /// Mean gap under the configured burst threshold.
    pub is_bursty: bool,
}

pub fn temporal_clustering(
    history: &MutationHistory,
    config: &PredictionConfig,
) -> TemporalClusteringSignal {
    if history.len() < config.min_history_for_trends {
        return TemporalClusteringSignal {
            status: SignalStatus::InsufficientData,
            mean_gap_hours: 0.0,
            burstiness: 0.0,
            is_bursty: false,
        };
    }

    let mut timestamps = vec![history.original_timestamp];
    timestamps.extend(history.entries.iter().map(|e| e.timestamp));

    let gaps: Vec<f64> = timestamps
        .windows(2)
        .map(|w| (w[1] - w[0]).num_seconds() as f64 / 3600.0)
        .collect();

    let mean = gaps.iter().sum::<f64>() / gaps.len() as f64;
    let variance = gaps.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / gaps.len() as f64;
    let burstiness = if mean > 0.0 {
        variance.sqrt() / mean
    } else {
        0.0
    };

    TemporalClusteringSignal {
        status: SignalStatus::Ok,
        mean_gap_hours: mean,
        burstiness,
        is_bursty: mean < config.burst_gap_hours,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryEntry;
    use chrono::Utc;
    use strain_core::models::{MutationType, SemanticCluster};

    fn history(hours: &[i64]) -> MutationHistory {
        let t0 = Utc::now() - Duration::hours(1000);
        MutationHistory {
            family_id: "f".into(),
            semantic_cluster: SemanticCluster::General,
            original_content: "root".into(),
            original_timestamp: t0,
            entries: hours
                .iter()
                .enumerate()
                .map(|(i, h)| HistoryEntry {
                    timestamp: t0 + Duration::hours(*h),
                    mutation_type: MutationType::ContextShift,
                    content: format!("variant {i}"),
                    similarity: 0.8,
                    generation: 1,
                })
                .collect(),
        }
    }

    #[test]
    fn short_history_reports_insufficient_data() {
        let signal = velocity(&history(&[1]), &PredictionConfig::default());
        assert_eq!(signal.status, SignalStatus::InsufficientData);
    }

    #[test]
    fn burst_at_the_end_is_accelerating() {
        // 3 mutations in the last 2 hours of a 50-hour lifetime.
        let signal = velocity(&history(&[10, 48, 49, 50]), &PredictionConfig::default());
        assert_eq!(signal.status, SignalStatus::Ok);
        assert_eq!(signal.trend, Trend::Accelerating);
    }

    #[test]
    fn long_quiet_tail_is_decelerating() {
        // Dense activity for 50 hours, then one straggler at hour 100.
        let hours: Vec<i64> = (1..=50).chain([100]).collect();
        let signal = velocity(&history(&hours), &PredictionConfig::default());
        assert_eq!(signal.trend, Trend::Decelerating);
    }

    #[test]
    fn tight_gaps_are_bursty() {
        let signal = temporal_clustering(&history(&[1, 2, 3, 4]), &PredictionConfig::default());
        assert_eq!(signal.status, SignalStatus::Ok);
        assert!(signal.is_bursty);
        assert!((signal.mean_gap_hours - 1.0).abs() < 1e-9);
    }

    #[test]
    fn wide_gaps_are_not_bursty() {
        let signal = temporal_clustering(&history(&[20, 40, 60]), &PredictionConfig::default());
        assert!(!signal.is_bursty);
    }
}
