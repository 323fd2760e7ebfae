//! Errors surfaced by the rewriter store.

use thiserror::Error;

use crate::validation::ValidationError;

/// Failure of a user, config or history operation.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Connection or query failure reported by SQLite
    #[error("store error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Schema could not be applied
    #[error("schema migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Input rejected before reaching the store
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Unique key collision, e.g. a taken username
    #[error("{entity} already exists: {id}")]
    AlreadyExists { entity: &'static str, id: String },
}

/// Result of a store operation.
pub type Result<T> = std::result::Result<T, DatabaseError>;
