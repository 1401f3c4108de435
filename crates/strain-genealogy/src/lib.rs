//! # strain-genealogy
//!
//! The authoritative in-process mutation-family registry and the genealogy
//! query engine over it.
//!
//! Ingestion pipeline: hash → exact-duplicate gate → full-corpus similarity
//! scan → classify → extend family, or root a new one. Queries fan out from
//! the registry: nested tree views, ancestor paths, descendants, common
//! ancestors, spread metrics.

pub mod queries;
pub mod registry;
pub mod spread;
pub mod store;
pub mod tree;

pub use queries::{CommonAncestry, DescendantEntry, DescendantOptions, GenealogyEngine, PathEntry};
pub use registry::FamilyRegistry;
pub use store::MemoryFamilyStore;
pub use tree::FamilyGraph;
