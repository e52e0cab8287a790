use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Every variant is request-scoped: surfaced to the caller, never retried,
/// never fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The entity addressed by the request does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A parent entity referenced by the payload does not exist.
    ///
    /// Distinct from [`CoreError::NotFound`]: the request target may be
    /// fine, but it points at a parent that is absent, so nothing is
    /// persisted.
    #[error("Referenced {entity} with id {id} does not exist")]
    ReferenceNotFound { entity: &'static str, id: DbId },

    /// The request shape is malformed (e.g. id present on create,
    /// id missing or mismatched on update).
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
