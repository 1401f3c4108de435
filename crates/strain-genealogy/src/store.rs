//! In-memory family store. The default [`FamilyStore`] backend; a persistent
//! implementation can be swapped in behind the same trait.

use dashmap::DashMap;

use strain_core::models::MutationFamily;
use strain_core::traits::FamilyStore;

/// DashMap-backed store keyed by family id.
#[derive(Debug, Default)]
pub struct MemoryFamilyStore {
    families: DashMap<String, MutationFamily>,
}

impl MemoryFamilyStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FamilyStore for MemoryFamilyStore {
    fn get(&self, family_id: &str) -> Option<MutationFamily> {
        self.families.get(family_id).map(|f| f.clone())
    }

    fn put(&self, family: MutationFamily) {
        self.families.insert(family.family_id.clone(), family);
    }

    fn scan_by_prefix(&self, prefix: &str) -> Vec<String> {
        self.families
            .iter()
            .filter(|entry| {
                entry
                    .original
                    .fingerprint
                    .semantic_fingerprint
                    .starts_with(prefix)
            })
            .map(|entry| entry.family_id.clone())
            .collect()
    }

    fn all_ids(&self) -> Vec<String> {
        self.families.iter().map(|e| e.family_id.clone()).collect()
    }

    fn len(&self) -> usize {
        self.families.len()
    }
}
