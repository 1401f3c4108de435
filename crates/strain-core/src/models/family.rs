use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::fingerprint::ContentFingerprint;

use super::cluster::SemanticCluster;
use super::mutation::MutationNode;

/// The first-seen content a family is rooted at. Created once, immutable
/// thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OriginalRecord {
    pub content: String,
    pub content_hash: String,
    pub fingerprint: ContentFingerprint,
    pub timestamp: DateTime<Utc>,
    /// Free-form caller metadata, opaque to the engine.
    pub metadata: HashMap<String, String>,
}

/// A rooted tree of content variants sharing one original.
///
/// Invariants: exactly one immutable `original`; `mutations` is append-only;
/// every node's `parent_hash` resolves to the original or another node in
/// this same family (no cross-family edges, no cycles).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationFamily {
    /// UUID v4 identifier.
    pub family_id: String,
    pub created_at: DateTime<Utc>,
    /// Topical bucket assigned from the original content.
    pub semantic_cluster: SemanticCluster,
    pub original: OriginalRecord,
    pub mutations: Vec<MutationNode>,
}

impl MutationFamily {
    /// Total node count including the original.
    pub fn node_count(&self) -> usize {
        self.mutations.len() + 1
    }

    /// Look up a mutation node by content hash.
    pub fn node_by_hash(&self, content_hash: &str) -> Option<&MutationNode> {
        self.mutations.iter().find(|m| m.content_hash == content_hash)
    }

    /// Whether `content_hash` is the original or any node in this family.
    pub fn contains_hash(&self, content_hash: &str) -> bool {
        self.original.content_hash == content_hash || self.node_by_hash(content_hash).is_some()
    }

    /// Generation of the node with `content_hash`, if present (original = 0).
    pub fn generation_of(&self, content_hash: &str) -> Option<u32> {
        if self.original.content_hash == content_hash {
            Some(0)
        } else {
            self.node_by_hash(content_hash).map(|n| n.generation)
        }
    }
}
