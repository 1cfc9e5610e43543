//! Error types for the storage layer.

use noteworthy_core::ValidationError;
use thiserror::Error;
use uuid::Uuid;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying database error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Note absent, or owned by someone else. Callers cannot tell which.
    #[error("note not found: {0}")]
    NoteNotFound(Uuid),

    /// Caller-supplied field failed a domain constraint.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Migration error.
    #[error("migration error: {0}")]
    Migration(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}
