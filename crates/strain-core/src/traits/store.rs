use crate::models::MutationFamily;

/// Repository seam for family persistence.
///
/// The in-process registry keeps its own hash/children indexes; a store only
/// holds whole families. Implementations must be safe to call from multiple
/// threads — the registry serializes writes itself.
pub trait FamilyStore: Send + Sync {
    /// Fetch a family by id.
    fn get(&self, family_id: &str) -> Option<MutationFamily>;

    /// Insert or replace a family.
    fn put(&self, family: MutationFamily);

    /// All family ids whose semantic fingerprint (of the original) starts
    /// with `prefix`. An empty prefix scans everything.
    fn scan_by_prefix(&self, prefix: &str) -> Vec<String>;

    /// All family ids.
    fn all_ids(&self) -> Vec<String>;

    /// Number of stored families.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
