use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during store operations.
///
/// Backend detail stays internal; the handler boundary converts every
/// variant into the generic 500 response.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend failed to execute the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A document could not be converted to or from its typed model.
    #[error("document serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
