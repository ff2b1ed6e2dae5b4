use crate::types::DbId;

/// Domain-level error taxonomy.
///
/// Transport-agnostic: the `api` crate maps these onto HTTP statuses.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// An entity lookup by id resolved to zero rows.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed a schema check before any persistence call.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The write conflicts with an existing row (unique constraint).
    #[error("Conflict: {0}")]
    Conflict(String),

    /// The request carried no usable identity for a gated path.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Anything the caller cannot act on; detail stays in the logs.
    #[error("Internal error: {0}")]
    Internal(String),
}
