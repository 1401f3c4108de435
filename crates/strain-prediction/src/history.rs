//! Chronological view of a family's mutation history — the input every
//! signal detector works from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use strain_core::models::{MutationFamily, MutationType, SemanticCluster};

/// One mutation observation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub mutation_type: MutationType,
    pub content: String,
    pub similarity: f64,
    pub generation: u32,
}

/// A family's full history in chronological order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MutationHistory {
    pub family_id: String,
    pub semantic_cluster: SemanticCluster,
    pub original_content: String,
    pub original_timestamp: DateTime<Utc>,
    pub entries: Vec<HistoryEntry>,
}

impl MutationHistory {
    pub fn from_family(family: &MutationFamily) -> Self {
        let mut entries: Vec<HistoryEntry> = family
            .mutations
            .iter()
            .map(|m| HistoryEntry {
                timestamp: m.timestamp,
                mutation_type: m.mutation_type,
                content: m.content.clone(),
                similarity: m.similarity,
                generation: m.generation,
            })
            .collect();
        entries.sort_by_key(|e| e.timestamp);

        Self {
            family_id: family.family_id.clone(),
            semantic_cluster: family.semantic_cluster,
            original_content: family.original.content.clone(),
            original_timestamp: family.original.timestamp,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lifetime from the original to the newest mutation, in hours, floored
    /// at one hour.
    pub fn lifetime_hours(&self) -> f64 {
        let last = self
            .entries
            .last()
            .map(|e| e.timestamp)
            .unwrap_or(self.original_timestamp);
        ((last - self.original_timestamp).num_seconds() as f64 / 3600.0).max(1.0)
    }

    /// The newest mutation content, or the original when there are none.
    pub fn latest_content(&self) -> &str {
        self.entries
            .last()
            .map(|e| e.content.as_str())
            .unwrap_or(&self.original_content)
    }

    /// Split the entries into early/middle/late thirds. Empty slices when
    /// the history is too short to split meaningfully.
    pub fn thirds(&self) -> (&[HistoryEntry], &[HistoryEntry], &[HistoryEntry]) {
        let n = self.entries.len();
        let a = n / 3;
        let b = 2 * n / 3;
        (&self.entries[..a], &self.entries[a..b], &self.entries[b..])
    }

    /// Split the entries into halves.
    pub fn halves(&self) -> (&[HistoryEntry], &[HistoryEntry]) {
        let mid = self.entries.len() / 2;
        (&self.entries[..mid], &self.entries[mid..])
    }
}
