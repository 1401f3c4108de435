//! Error taxonomy. Every public engine operation returns a
//! [`StrainResult`] — nothing panics across the API boundary, and lookup
//! misses are errors-as-values, never exceptions.

mod genealogy_error;
mod prediction_error;
mod similarity_error;

pub use genealogy_error::GenealogyError;
pub use prediction_error::PredictionError;
pub use similarity_error::SimilarityError;

/// Convenience alias used across the workspace.
pub type StrainResult<T> = Result<T, StrainError>;

/// Top-level engine error.
#[derive(Debug, thiserror::Error)]
pub enum StrainError {
    #[error(transparent)]
    Genealogy(#[from] GenealogyError),

    #[error(transparent)]
    Similarity(#[from] SimilarityError),

    #[error(transparent)]
    Prediction(#[from] PredictionError),

    #[error("invalid config: {reason}")]
    Config { reason: String },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("internal invariant violated: {details}")]
    Internal { details: String },
}
