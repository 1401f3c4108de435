//! Pairwise similarity engine.

use std::collections::BTreeSet;

use tracing::warn;

use strain_core::config::EngineConfig;
use strain_core::errors::SimilarityError;
use strain_core::lexicon;
use strain_core::models::{
    SemanticCluster, SimilarityBreakdown, SimilarityResult, VariantAnalysis,
};

use crate::tokens::{jaccard, significant_tokens};

/// Computes symmetric similarity between two texts.
///
/// Symmetry holds by construction: every component is a function of
/// unordered set operations. Only the optional variant analysis is
/// direction-sensitive (first argument is treated as the child).
#[derive(Debug, Clone, Default)]
pub struct SimilarityEngine {
    config: EngineConfig,
}

impl SimilarityEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Full similarity computation. Never fails: if the composite scorer
    /// errors, falls back to the bare raw-word Jaccard score.
    pub fn calculate(&self, a: &str, b: &str) -> SimilarityResult {
        match self.composite(a, b) {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, "composite similarity failed, falling back to lexical score");
                self.lexical_fallback(a, b)
            }
        }
    }

    /// Composite scorer: canonical-token Jaccard plus cluster boost.
    fn composite(&self, a: &str, b: &str) -> Result<SimilarityResult, SimilarityError> {
        let words_a = lexicon::words(a);
        let words_b = lexicon::words(b);
        if words_a.is_empty() || words_b.is_empty() {
            return Err(SimilarityError::DegenerateInput {
                reason: "text has no words".to_string(),
            });
        }

        let tokens_a = significant_tokens(a);
        let tokens_b = significant_tokens(b);
        // A text that canonicalizes to nothing (all stopwords / short words)
        // has no lexical evidence to score on; two of them must not read as
        // identical. Score such pairs over raw words instead.
        if tokens_a.is_empty() || tokens_b.is_empty() {
            return Err(SimilarityError::DegenerateInput {
                reason: "text has no significant tokens".to_string(),
            });
        }
        let lexical = jaccard(&tokens_a, &tokens_b);

        let shared_clusters = shared_clusters(&words_a, &words_b);
        let cluster_boost = shared_clusters.len() as f64 * self.config.cluster_boost;

        let overall = (lexical + cluster_boost).min(1.0);
        let structural = word_count_ratio(words_a.len(), words_b.len());
        let is_variant = overall >= self.config.similarity_threshold;

        let variant_analysis = is_variant.then(|| {
            let scan = strain_classifier::ChangeScan::of(a, b);
            VariantAnalysis {
                primary_type: strain_classifier::rules::classify_scan(&scan),
                mutation_patterns: strain_classifier::matched_patterns(&scan)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }
        });

        Ok(SimilarityResult {
            overall,
            breakdown: SimilarityBreakdown {
                lexical,
                cluster_boost,
                structural,
                shared_clusters,
            },
            is_variant,
            confidence: overall,
            variant_analysis,
        })
    }

    /// Bare lexical fallback over raw word sets. No cluster boost, no
    /// variant analysis.
    fn lexical_fallback(&self, a: &str, b: &str) -> SimilarityResult {
        let set_a: BTreeSet<String> = lexicon::words(a).into_iter().collect();
        let set_b: BTreeSet<String> = lexicon::words(b).into_iter().collect();
        let lexical = jaccard(&set_a, &set_b);
        SimilarityResult {
            overall: lexical,
            breakdown: SimilarityBreakdown {
                lexical,
                cluster_boost: 0.0,
                structural: word_count_ratio(set_a.len(), set_b.len()),
                shared_clusters: Vec::new(),
            },
            is_variant: lexical >= self.config.similarity_threshold,
            confidence: lexical,
            variant_analysis: None,
        }
    }
}

/// Clusters with at least one keyword hit in both texts.
fn shared_clusters(words_a: &[String], words_b: &[String]) -> Vec<SemanticCluster> {
    SemanticCluster::KEYED
        .into_iter()
        .filter(|c| {
            lexicon::count_hits(words_a, c.keywords()) > 0
                && lexicon::count_hits(words_b, c.keywords()) > 0
        })
        .collect()
}

/// Shorter word count over longer, 1.0 when both are empty.
fn word_count_ratio(a: usize, b: usize) -> f64 {
    let max = a.max(b);
    if max == 0 {
        1.0
    } else {
        a.min(b) as f64 / max as f64
    }
}
