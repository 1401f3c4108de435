/// Family registry and genealogy traversal errors.
#[derive(Debug, thiserror::Error)]
pub enum GenealogyError {
    #[error("family not found: {identifier}")]
    FamilyNotFound { identifier: String },

    #[error("node not found: {identifier}")]
    NodeNotFound { identifier: String },

    #[error("nodes {a} and {b} belong to different families")]
    CrossFamily { a: String, b: String },

    #[error("family {family_id} is inconsistent: {details}")]
    Inconsistent { family_id: String, details: String },
}
