use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint::ContentFingerprint;

use super::mutation_type::MutationType;

/// One observed variant inside a family.
///
/// `parent_hash` resolves within the owning family; `generation` is the edge
/// distance to the original (parent generation + 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationNode {
    /// UUID v4 identifier.
    pub mutation_id: String,
    pub content: String,
    pub content_hash: String,
    pub fingerprint: ContentFingerprint,
    pub parent_hash: String,
    pub mutation_type: MutationType,
    /// Composite similarity to the parent at ingest time.
    pub similarity: f64,
    pub generation: u32,
    pub timestamp: DateTime<Utc>,
    /// Free-form caller metadata, opaque to the engine.
    pub metadata: HashMap<String, String>,
    /// Diff against the parent, computed once at ingest and stored.
    pub changes: ChangeReport,
}

/// What changed between a parent and child text. Attached to the node at
/// ingest; never recomputed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChangeReport {
    /// Character-length delta (child minus parent).
    pub length_delta: i64,
    /// Word-count delta (child minus parent).
    pub word_count_delta: i64,
    /// Words present in the child but not the parent.
    pub added_words: Vec<String>,
    /// Words present in the parent but not the child.
    pub removed_words: Vec<String>,
    /// Positional numeric substitutions.
    pub numeric_changes: Vec<NumericChange>,
}

/// A numeric token that changed between parent and child at the same
/// position in the number sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumericChange {
    /// Index within the text's numeric-token sequence.
    pub position: usize,
    /// Parent-side value (`None` when the child added a number).
    pub from: Option<String>,
    /// Child-side value (`None` when the child dropped a number).
    pub to: Option<String>,
}
