/// Domain error taxonomy shared by every service.
///
/// Store failures are reclassified into [`CoreError::Internal`] by the
/// service that observed them; the other variants describe caller mistakes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity does not exist or is not visible to the caller.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// The entity failed validation after construction or merge.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The request could not be interpreted.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The caller identity is missing.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for [`CoreError::NotFound`] with any displayable id.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        CoreError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}
