//! Shared data model for the engine: families, nodes, similarity results,
//! ingest outcomes, and query views.

mod cluster;
mod family;
mod ingest;
mod mutation;
mod mutation_type;
mod similarity;
mod view;

pub use cluster::SemanticCluster;
pub use family::{MutationFamily, OriginalRecord};
pub use ingest::IngestOutcome;
pub use mutation::{ChangeReport, MutationNode, NumericChange};
pub use mutation_type::MutationType;
pub use similarity::{
    ClusterGroup, SimilarityBreakdown, SimilarityResult, VariantAnalysis, VariantMatch,
};
pub use view::{FamilyStats, FamilyTreeNode, FamilyView, SpreadAnalysis, TimelineEntry};
