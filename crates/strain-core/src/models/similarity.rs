use serde::{Deserialize, Serialize};

use super::cluster::SemanticCluster;
use super::mutation_type::MutationType;

/// Ephemeral output of a pairwise similarity computation. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Composite score in [0, 1]: `min(1, lexical + cluster_boost)`.
    pub overall: f64,
    pub breakdown: SimilarityBreakdown,
    /// Whether `overall` met the configured threshold (inclusive).
    pub is_variant: bool,
    /// Engine confidence in the verdict. Defined as the composite score
    /// itself; kept as a separate field so callers never conflate it with
    /// per-signal probabilities elsewhere.
    pub confidence: f64,
    /// Present only when `is_variant` is true.
    pub variant_analysis: Option<VariantAnalysis>,
}

/// Per-component scores behind the composite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityBreakdown {
    /// Jaccard over canonical significant tokens.
    pub lexical: f64,
    /// Total semantic-cluster boost applied.
    pub cluster_boost: f64,
    /// Word-count ratio (short/long). Informational only; not part of the
    /// composite.
    pub structural: f64,
    /// Clusters with hits in both texts.
    pub shared_clusters: Vec<SemanticCluster>,
}

/// Best-effort mutation analysis for a confirmed variant pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantAnalysis {
    /// Label the classifier assigns treating the second text as parent.
    pub primary_type: MutationType,
    /// Human-readable descriptions of the detected change patterns.
    pub mutation_patterns: Vec<String>,
}

/// One ranked hit from a batch variant search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantMatch {
    /// Index into the searched collection.
    pub index: usize,
    pub content: String,
    pub similarity: f64,
    pub result: SimilarityResult,
}

/// One greedy cluster from `cluster_texts`: representative plus members.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterGroup {
    /// Index of the representative (first member) in the input collection.
    pub representative: usize,
    /// Member indices in input order, representative included.
    pub members: Vec<usize>,
}
