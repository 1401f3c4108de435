//! # strain-core
//!
//! Foundation crate for the strain mutation-genealogy engine.
//! Defines all shared types, errors, config, lexicons, and fingerprinting.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod fingerprint;
pub mod lexicon;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{StrainError, StrainResult};
pub use fingerprint::ContentFingerprint;
pub use models::{
    IngestOutcome, MutationFamily, MutationNode, MutationType, SemanticCluster, SimilarityResult,
};
