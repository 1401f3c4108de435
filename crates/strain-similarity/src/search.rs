//! Batch operations: linear-scan variant search and greedy clustering.
//!
//! Both are O(n) in collection size per call — acceptable for moderate
//! corpora, and the documented scalability ceiling of the engine. The
//! semantic-fingerprint bucket index in the registry is the hook for
//! sharding this scan.

use rayon::prelude::*;

use strain_core::models::{ClusterGroup, VariantMatch};

use crate::engine::SimilarityEngine;

/// Options for [`find_variants`].
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Minimum composite similarity to report (inclusive).
    pub min_similarity: f64,
    /// Result cap after sorting.
    pub max_results: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            min_similarity: strain_core::constants::DEFAULT_SIMILARITY_THRESHOLD,
            max_results: strain_core::constants::DEFAULT_MAX_VARIANT_RESULTS,
        }
    }
}

/// Score `query` against every collection member, filter by
/// `min_similarity`, sort descending, truncate.
///
/// Ties sort by collection index so results are deterministic.
pub fn find_variants(
    engine: &SimilarityEngine,
    query: &str,
    collection: &[String],
    options: &SearchOptions,
) -> Vec<VariantMatch> {
    let mut matches: Vec<VariantMatch> = collection
        .par_iter()
        .enumerate()
        .filter_map(|(index, content)| {
            let result = engine.calculate(query, content);
            (result.overall >= options.min_similarity).then(|| VariantMatch {
                index,
                content: content.clone(),
                similarity: result.overall,
                result,
            })
        })
        .collect();

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    matches.truncate(options.max_results);
    matches
}

/// Greedy single-pass clustering: each text joins the first existing cluster
/// whose *representative* scores at or above `threshold`, else starts its
/// own cluster. Not globally optimal; deterministic given input order.
pub fn cluster_texts(
    engine: &SimilarityEngine,
    texts: &[String],
    threshold: f64,
) -> Vec<ClusterGroup> {
    let mut clusters: Vec<ClusterGroup> = Vec::new();

    for (index, text) in texts.iter().enumerate() {
        let assigned = clusters.iter_mut().find(|cluster| {
            let representative = &texts[cluster.representative];
            engine.calculate(text, representative).overall >= threshold
        });

        match assigned {
            Some(cluster) => cluster.members.push(index),
            None => clusters.push(ClusterGroup {
                representative: index,
                members: vec![index],
            }),
        }
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        vec![
            "Turmeric can cure COVID-19 completely in 3 days".to_string(),
            "Turmeric completely cures coronavirus in just 3 days".to_string(),
            "The weather is nice today".to_string(),
            "COVID-19 can be fully healed with turmeric in 72 hours".to_string(),
        ]
    }

    #[test]
    fn find_variants_ranks_and_filters() {
        let engine = SimilarityEngine::default();
        let hits = find_variants(
            &engine,
            "Turmeric cures covid in 3 days",
            &corpus(),
            &SearchOptions::default(),
        );
        assert!(!hits.is_empty());
        // The weather text never matches.
        assert!(hits.iter().all(|h| h.index != 2));
        // Descending similarity.
        for pair in hits.windows(2) {
            assert!(pair[0].similarity >= pair[1].similarity);
        }
    }

    #[test]
    fn find_variants_respects_max_results() {
        let engine = SimilarityEngine::default();
        let options = SearchOptions {
            min_similarity: 0.0,
            max_results: 2,
        };
        let hits = find_variants(&engine, "turmeric covid", &corpus(), &options);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn clustering_groups_the_turmeric_texts() {
        let engine = SimilarityEngine::default();
        let clusters = cluster_texts(&engine, &corpus(), 0.75);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].members, vec![0, 1, 3]);
        assert_eq!(clusters[1].members, vec![2]);
    }

    #[test]
    fn clustering_is_deterministic_per_input_order() {
        let engine = SimilarityEngine::default();
        let a = cluster_texts(&engine, &corpus(), 0.75);
        let b = cluster_texts(&engine, &corpus(), 0.75);
        assert_eq!(
            a.iter().map(|c| c.members.clone()).collect::<Vec<_>>(),
            b.iter().map(|c| c.members.clone()).collect::<Vec<_>>()
        );
    }
}
