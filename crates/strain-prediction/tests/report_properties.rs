//! Report invariants that must hold for any mutation history shape.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use strain_core::config::PredictionConfig;
use strain_core::models::{MutationType, SemanticCluster};
use strain_prediction::signals::PatternAnalysis;
use strain_prediction::synthesis::synthesize;
use strain_prediction::MutationHistory;
use strain_prediction::history::HistoryEntry;

const PHRASES: &[&str] = &[
    "turmeric completely cures covid in 5 days",
    "urgent turmeric cure spreads in texas now",
    "doctors hide the turmeric cure from everyone",
    "breaking miracle spice wipes out the virus",
];

fn history_from(gaps: Vec<u8>, picks: Vec<u8>) -> MutationHistory {
    let t0 = Utc::now() - Duration::hours(2_000);
    let mut at = t0;
    let entries = gaps
        .iter()
        .zip(picks.iter().cycle())
        .map(|(gap, pick)| {
            at += Duration::hours(*gap as i64 + 1);
            HistoryEntry {
                timestamp: at,
                mutation_type: MutationType::ALL[*pick as usize % MutationType::ALL.len()],
                content: PHRASES[*pick as usize % PHRASES.len()].to_string(),
                similarity: 0.8,
                generation: 1,
            }
        })
        .collect();
    MutationHistory {
        family_id: "prop-family".to_string(),
        semantic_cluster: SemanticCluster::Medical,
        original_content: "turmeric can cure covid completely in 3 days".to_string(),
        original_timestamp: t0,
        entries,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_invariants_hold(
        gaps in prop::collection::vec(0u8..48, 0..12),
        picks in prop::collection::vec(0u8..16, 1..12),
    ) {
        let config = PredictionConfig::default();
        let history = history_from(gaps, picks);
        let analysis = PatternAnalysis::analyze(&history, &config);
        let mut rng = StdRng::seed_from_u64(0);
        let report = synthesize(&history, analysis, &config, &mut rng);

        prop_assert!((0.0..=1.0).contains(&report.confidence));
        prop_assert!(report.next_analysis_recommended >= report.generated_at);
        for pair in report.predictions.windows(2) {
            prop_assert!(pair[0].probability >= pair[1].probability);
        }
        for p in &report.predictions {
            prop_assert!((0.0..=1.0).contains(&p.probability));
            prop_assert!(!p.reasoning.is_empty());
        }

        // Categories serialize in wire form.
        let json = serde_json::to_value(&report).unwrap();
        if let Some(first) = json["predictions"].as_array().and_then(|a| a.first()) {
            let tag = first["category"].as_str().unwrap();
            prop_assert!(tag.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }
}
