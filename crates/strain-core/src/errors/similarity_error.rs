/// Similarity computation errors. The engine catches these internally and
/// falls back to the bare lexical score; they only cross the boundary when
/// even the fallback is impossible.
#[derive(Debug, thiserror::Error)]
pub enum SimilarityError {
    #[error("degenerate input: {reason}")]
    DegenerateInput { reason: String },

    #[error("composite scoring failed: {reason}")]
    ScoringFailed { reason: String },
}
