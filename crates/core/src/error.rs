/// Domain error taxonomy shared across the workspace.
///
/// `NotFound` carries the id as requested, so a lookup with a malformed
/// id reports the caller's own string back.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
