use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cluster::SemanticCluster;
use super::mutation_type::MutationType;

/// Full query view of one family: tree, timeline, spread metrics.
/// Derived on demand from the registry; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyView {
    pub family_id: String,
    pub semantic_cluster: SemanticCluster,
    pub original_content: String,
    /// Mutations only; the original is not counted.
    pub mutation_count: usize,
    pub tree: FamilyTreeNode,
    /// All nodes in chronological order, original first.
    pub timeline: Vec<TimelineEntry>,
    pub spread: SpreadAnalysis,
}

/// One node of the nested family tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyTreeNode {
    pub content_hash: String,
    pub content: String,
    /// `None` for the original.
    pub mutation_type: Option<MutationType>,
    pub generation: u32,
    pub timestamp: DateTime<Utc>,
    pub children: Vec<FamilyTreeNode>,
}

/// One chronological timeline entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub timestamp: DateTime<Utc>,
    pub content_hash: String,
    pub mutation_type: Option<MutationType>,
    pub generation: u32,
}

/// How fast a family is spreading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpreadAnalysis {
    /// Mutations per hour over the family lifetime (timespan floored at 1h).
    pub spread_rate: f64,
    /// Mutations observed in the active window (default 24h).
    pub active_branches: usize,
    /// `active_branches / window_hours`.
    pub mutation_velocity: f64,
}

/// Registry-wide summary counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FamilyStats {
    pub family_count: usize,
    /// Originals plus mutations across all families.
    pub node_count: usize,
    /// `(family_id, node_count)` of the largest family, if any exist.
    pub largest_family: Option<(String, usize)>,
}
