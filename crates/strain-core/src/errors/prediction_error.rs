/// Prediction subsystem errors.
///
/// Thin history is NOT an error — signals degrade to `InsufficientData`
/// status and the report still comes back. These variants cover genuine
/// failures only.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("prediction failed for family {family_id}: {reason}")]
    Failed { family_id: String, reason: String },

    #[error("template rewrite failed: {reason}")]
    TemplateFailed { reason: String },
}
