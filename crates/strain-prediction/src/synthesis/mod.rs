//! Maps triggered signals to ranked, explained predictions and assembles
//! the report envelope.

pub mod templates;

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use strain_core::config::PredictionConfig;
use strain_core::models::MutationType;

use crate::history::MutationHistory;
use crate::signals::reach::SpreadPattern;
use crate::signals::{Direction, PatternAnalysis, SignalStatus, Trend};

/// What kind of future behavior a prediction describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PredictionCategory {
    RapidMutation,
    BurstContinuation,
    PatternShift,
    SemanticDrift,
    EmotionalEscalation,
    NumericEscalation,
    AudienceExpansion,
    GeographicSpread,
    PlatformAdaptation,
}

impl PredictionCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PredictionCategory::RapidMutation => "RAPID_MUTATION",
            PredictionCategory::BurstContinuation => "BURST_CONTINUATION",
            PredictionCategory::PatternShift => "PATTERN_SHIFT",
            PredictionCategory::SemanticDrift => "SEMANTIC_DRIFT",
            PredictionCategory::EmotionalEscalation => "EMOTIONAL_ESCALATION",
            PredictionCategory::NumericEscalation => "NUMERIC_ESCALATION",
            PredictionCategory::AudienceExpansion => "AUDIENCE_EXPANSION",
            PredictionCategory::GeographicSpread => "GEOGRAPHIC_SPREAD",
            PredictionCategory::PlatformAdaptation => "PLATFORM_ADAPTATION",
        }
    }
}

/// One ranked forecast. `probability` is the fixed trigger weight of the
/// signal that fired, not a calibrated estimate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub category: PredictionCategory,
    pub probability: f64,
    /// Illustrative template rewrite of the latest variant, when the
    /// category has one.
    pub predicted_content: Option<String>,
    pub reasoning: String,
    pub confidence_factors: Vec<String>,
}

/// Full report envelope for one family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionReport {
    pub family_id: String,
    pub generated_at: DateTime<Utc>,
    /// Sorted by probability descending.
    pub predictions: Vec<Prediction>,
    pub prediction_summary: String,
    /// Mutation-count base plus per-signal adjustments, clamped to [0, 1].
    pub confidence: f64,
    pub pattern_analysis: PatternAnalysis,
    pub next_analysis_recommended: DateTime<Utc>,
}

/// Turn the signal set into a ranked report.
pub fn synthesize(
    history: &MutationHistory,
    analysis: PatternAnalysis,
    config: &PredictionConfig,
    rng: &mut StdRng,
) -> PredictionReport {
    let mut predictions = collect_predictions(history, &analysis, config, rng);
    predictions.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let confidence = overall_confidence(history, &analysis, config);
    let now = Utc::now();

    PredictionReport {
        family_id: history.family_id.clone(),
        generated_at: now,
        prediction_summary: summarize(&predictions, history),
        confidence,
        next_analysis_recommended: now + next_analysis_delay(&analysis),
        predictions,
        pattern_analysis: analysis,
    }
}

fn collect_predictions(
    history: &MutationHistory,
    analysis: &PatternAnalysis,
    config: &PredictionConfig,
    rng: &mut StdRng,
) -> Vec<Prediction> {
    let mut out = Vec::new();
    let latest = history.latest_content();

    if analysis.velocity.status == SignalStatus::Ok
        && analysis.velocity.trend == Trend::Accelerating
    {
        out.push(Prediction {
            category: PredictionCategory::RapidMutation,
            probability: 0.8,
            predicted_content: None,
            reasoning: format!(
                "mutation rate in the last {}h ({:.2}/h) outpaces the lifetime average ({:.2}/h)",
                config.recent_window_hours,
                analysis.velocity.recent_rate,
                analysis.velocity.rate_per_hour,
            ),
            confidence_factors: vec!["accelerating velocity".into()],
        });
    }

    if analysis.temporal.status == SignalStatus::Ok && analysis.temporal.is_bursty {
        out.push(Prediction {
            category: PredictionCategory::BurstContinuation,
            probability: 0.6,
            predicted_content: None,
            reasoning: format!(
                "variants arrive in bursts (mean gap {:.1}h, below the {:.1}h threshold)",
                analysis.temporal.mean_gap_hours, config.burst_gap_hours,
            ),
            confidence_factors: vec!["bursty arrival gaps".into()],
        });
    }

    if analysis.evolution.status == SignalStatus::Ok && analysis.evolution.pattern_shift {
        let (from, to) = (
            label_of(analysis.evolution.early_dominant),
            label_of(analysis.evolution.late_dominant),
        );
        out.push(Prediction {
            category: PredictionCategory::PatternShift,
            probability: 0.65,
            predicted_content: None,
            reasoning: format!("dominant mutation style moved from {from} to {to}"),
            confidence_factors: vec!["dominant type changed across lifetime thirds".into()],
        });
    }

    if analysis.drift.status == SignalStatus::Ok && analysis.drift.mean_drift > config.drift_trigger
    {
        out.push(Prediction {
            category: PredictionCategory::SemanticDrift,
            probability: 0.7,
            predicted_content: None,
            reasoning: format!(
                "variants have drifted {:.0}% from the original vocabulary and the distance is {}",
                analysis.drift.mean_drift * 100.0,
                direction_word(analysis.drift.trend),
            ),
            confidence_factors: vec!["vocabulary distance above trigger".into()],
        });
    }

    let virality_fired = analysis.virality.status == SignalStatus::Ok
        && (analysis.virality.urgency_density > config.virality_trigger
            || analysis.virality.trend == Direction::Increasing);
    if virality_fired {
        out.push(Prediction {
            category: PredictionCategory::EmotionalEscalation,
            probability: 0.75,
            predicted_content: Some(templates::urgency_prefix(latest, rng)),
            reasoning: format!(
                "urgency loading is {} ({:.2} markers per variant)",
                direction_word(analysis.virality.trend),
                analysis.virality.urgency_density,
            ),
            confidence_factors: vec!["urgency keyword density".into()],
        });
    }

    let numeric_history = history
        .entries
        .iter()
        .any(|e| e.mutation_type == MutationType::NumericalChange);
    if numeric_history {
        if let Some(content) = templates::escalate_numbers(latest, rng) {
            out.push(Prediction {
                category: PredictionCategory::NumericEscalation,
                probability: 0.7,
                predicted_content: Some(content),
                reasoning: "family already rewrites quantities; larger claims likely".into(),
                confidence_factors: vec!["observed NUMERICAL_CHANGE mutations".into()],
            });
        }
    }

    if analysis.audience.status == SignalStatus::Ok && analysis.audience.diversity > 0.4 {
        out.push(Prediction {
            category: PredictionCategory::AudienceExpansion,
            probability: 0.6,
            predicted_content: None,
            reasoning: format!(
                "variants already touch {} topical clusters",
                analysis.audience.clusters_touched.len(),
            ),
            confidence_factors: vec!["cross-cluster vocabulary".into()],
        });
    }

    if analysis.geography.status == SignalStatus::Ok
        && analysis.geography.pattern == SpreadPattern::Spreading
    {
        out.push(Prediction {
            category: PredictionCategory::GeographicSpread,
            probability: 0.6,
            predicted_content: None,
            reasoning: format!(
                "{} distinct places named so far; more localized retellings likely",
                analysis.geography.distinct_locations,
            ),
            confidence_factors: vec!["multiple location mentions".into()],
        });
    }

    if analysis.platform.status == SignalStatus::Ok && analysis.platform.adaptation_detected {
        out.push(Prediction {
            category: PredictionCategory::PlatformAdaptation,
            probability: 0.65,
            predicted_content: Some(templates::platform_adapt(
                latest,
                history.semantic_cluster,
                rng,
            )),
            reasoning: "variants picked up hashtag/mention/link formatting the original lacked"
                .into(),
            confidence_factors: vec!["new platform format markers".into()],
        });
    }

    out
}

/// Mutation-count base, capped, then adjusted per active and missing signal.
fn overall_confidence(
    history: &MutationHistory,
    analysis: &PatternAnalysis,
    config: &PredictionConfig,
) -> f64 {
    let base = (history.len() as f64 * config.confidence_per_mutation)
        .min(config.base_confidence_cap);
    let adjusted = base + config.signal_confidence_boost * analysis.active_count() as f64
        - config.missing_signal_penalty * analysis.missing_count() as f64;
    adjusted.clamp(0.0, 1.0)
}

fn next_analysis_delay(analysis: &PatternAnalysis) -> Duration {
    if analysis.velocity.status != SignalStatus::Ok {
        return Duration::hours(24);
    }
    match analysis.velocity.trend {
        Trend::Accelerating => Duration::hours(1),
        Trend::Stable => Duration::hours(6),
        Trend::Decelerating => Duration::hours(24),
    }
}

fn summarize(predictions: &[Prediction], history: &MutationHistory) -> String {
    match predictions.first() {
        Some(top) => format!(
            "{} forecasts for a family of {} mutations; leading: {} (p={:.2})",
            predictions.len(),
            history.len(),
            top.category.as_str(),
            top.probability,
        ),
        None => format!(
            "no signals triggered for a family of {} mutations",
            history.len(),
        ),
    }
}

fn label_of(t: Option<MutationType>) -> &'static str {
    t.map(MutationType::as_str).unwrap_or("unknown")
}

fn direction_word(d: Direction) -> &'static str {
    match d {
        Direction::Increasing => "increasing",
        Direction::Decreasing => "decreasing",
        Direction::Stable => "stable",
    }
}
