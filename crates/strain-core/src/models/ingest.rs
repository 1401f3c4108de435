use serde::{Deserialize, Serialize};

use super::cluster::SemanticCluster;
use super::mutation_type::MutationType;

/// Discriminated outcome of ingesting one piece of content.
///
/// Tagged serialization keeps the envelope self-describing for controllers
/// and the immunity tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "disposition", rename_all = "snake_case")]
pub enum IngestOutcome {
    /// Identical normalized text already known; nothing was created.
    ExactDuplicate {
        family_id: String,
        content_hash: String,
    },
    /// No known content was similar enough; a new family was rooted here.
    Original {
        family_id: String,
        content_hash: String,
        semantic_cluster: SemanticCluster,
    },
    /// Variant of known content; appended to the matched family.
    Mutation {
        family_id: String,
        mutation_id: String,
        content_hash: String,
        parent_hash: String,
        mutation_type: MutationType,
        generation: u32,
        /// Composite similarity to the chosen parent.
        confidence: f64,
    },
}

impl IngestOutcome {
    pub fn family_id(&self) -> &str {
        match self {
            IngestOutcome::ExactDuplicate { family_id, .. }
            | IngestOutcome::Original { family_id, .. }
            | IngestOutcome::Mutation { family_id, .. } => family_id,
        }
    }

    pub fn is_mutation(&self) -> bool {
        matches!(self, IngestOutcome::Mutation { .. })
    }

    pub fn is_original(&self) -> bool {
        matches!(self, IngestOutcome::Original { .. })
    }

    pub fn is_exact_duplicate(&self) -> bool {
        matches!(self, IngestOutcome::ExactDuplicate { .. })
    }
}
