//! End-to-end prediction behavior over a registry-built family.

use std::collections::HashMap;

use chrono::{Duration, Utc};

use strain_core::EngineConfig;
use strain_genealogy::FamilyRegistry;
use strain_prediction::{PredictionCategory, PredictionEngine};

const ORIGINAL: &str = "Turmeric can cure COVID-19 completely in 3 days";
const PARAPHRASE: &str = "Turmeric completely cures coronavirus in just 3 days";
const NUMERIC_VARIANT: &str = "Turmeric completely cures covid in 5 days";
const URGENT_VARIANT: &str = "Urgent turmeric completely cures covid in 5 days";
const AMPLIFIED_VARIANT: &str =
    "Urgent warning turmeric completely cures covid in 5 days share everyone";

/// One family: original plus four mutations, the last three packed into the
/// final hours so velocity reads as accelerating, with urgency loading
/// ramping up across the history.
fn active_family() -> (FamilyRegistry, String) {
    let registry = FamilyRegistry::new(EngineConfig::default());
    let t0 = Utc::now() - Duration::hours(45);
    let outcome = registry
        .ingest_at(ORIGINAL, HashMap::new(), t0)
        .expect("ingest original");
    let family_id = outcome.family_id().to_string();

    for (text, offset_hours) in [
        (PARAPHRASE, 1),
        (NUMERIC_VARIANT, 40),
        (URGENT_VARIANT, 44),
        (AMPLIFIED_VARIANT, 45),
    ] {
        let outcome = registry
            .ingest_at(text, HashMap::new(), t0 + Duration::hours(offset_hours))
            .expect("ingest variant");
        assert!(outcome.is_mutation(), "expected {text:?} to join the family");
    }

    (registry, family_id)
}

#[test]
fn fresh_family_fails_soft() {
    let registry = FamilyRegistry::new(EngineConfig::default());
    let outcome = registry.ingest(ORIGINAL, HashMap::new()).unwrap();
    let engine = PredictionEngine::new(&registry);

    let report = engine.predict(outcome.family_id()).unwrap();
    assert!(report.predictions.is_empty());
    assert!(report.prediction_summary.contains("no signals"));
    assert!(report.confidence >= 0.0);
}

#[test]
fn unknown_family_is_an_error() {
    let registry = FamilyRegistry::new(EngineConfig::default());
    let engine = PredictionEngine::new(&registry);
    assert!(engine.predict("no-such-family").is_err());
}

#[test]
fn predictions_are_sorted_by_probability() {
    let (registry, family_id) = active_family();
    let engine = PredictionEngine::new(&registry);

    let report = engine.predict(&family_id).unwrap();
    assert!(report.predictions.len() >= 2);
    for pair in report.predictions.windows(2) {
        assert!(pair[0].probability >= pair[1].probability);
    }
}

#[test]
fn accelerating_family_triggers_rapid_mutation() {
    let (registry, family_id) = active_family();
    let engine = PredictionEngine::new(&registry);

    let report = engine.predict(&family_id).unwrap();
    let categories: Vec<PredictionCategory> =
        report.predictions.iter().map(|p| p.category).collect();
    assert!(categories.contains(&PredictionCategory::RapidMutation));
    assert!(categories.contains(&PredictionCategory::EmotionalEscalation));
    assert!(categories.contains(&PredictionCategory::NumericEscalation));

    // Accelerating velocity pulls the next look forward to one hour out.
    let delay = report.next_analysis_recommended - report.generated_at;
    assert_eq!(delay, Duration::hours(1));
}

#[test]
fn numeric_escalation_rewrites_the_quantities() {
    let (registry, family_id) = active_family();
    let engine = PredictionEngine::new(&registry);

    let report = engine.predict(&family_id).unwrap();
    let numeric = report
        .predictions
        .iter()
        .find(|p| p.category == PredictionCategory::NumericEscalation)
        .expect("numeric escalation prediction");
    let content = numeric.predicted_content.as_deref().unwrap();
    let value: u64 = content
        .split_whitespace()
        .find_map(|w| w.parse().ok())
        .expect("escalated content keeps a quantity");
    assert!(value > 5, "quantity should be escalated upward, got {value}");
    assert_eq!(value % 5, 0);
}

#[test]
fn same_seed_yields_identical_rewrites() {
    let (registry, family_id) = active_family();
    let a = PredictionEngine::with_seed(&registry, 99)
        .predict(&family_id)
        .unwrap();
    let b = PredictionEngine::with_seed(&registry, 99)
        .predict(&family_id)
        .unwrap();

    let contents =
        |r: &strain_prediction::PredictionReport| -> Vec<Option<String>> {
            r.predictions.iter().map(|p| p.predicted_content.clone()).collect()
        };
    assert_eq!(contents(&a), contents(&b));
}

#[test]
fn reports_are_cached_until_the_family_grows() {
    let (registry, family_id) = active_family();
    let engine = PredictionEngine::new(&registry);

    let first = engine.predict(&family_id).unwrap();
    let second = engine.predict(&family_id).unwrap();
    assert_eq!(first.generated_at, second.generated_at);

    registry
        .ingest("Warning turmeric completely cures covid in 5 days", HashMap::new())
        .unwrap();
    let third = engine.predict(&family_id).unwrap();
    assert_ne!(first.prediction_summary, third.prediction_summary);
}

#[test]
fn confidence_grows_with_history() {
    let registry = FamilyRegistry::new(EngineConfig::default());
    let fresh = registry.ingest(ORIGINAL, HashMap::new()).unwrap();
    let fresh_report = PredictionEngine::new(&registry)
        .predict(fresh.family_id())
        .unwrap();

    let (active_registry, family_id) = active_family();
    let active_report = PredictionEngine::new(&active_registry)
        .predict(&family_id)
        .unwrap();

    assert!(active_report.confidence > fresh_report.confidence);
}
