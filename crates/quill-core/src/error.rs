//! Storage-boundary error types.

use thiserror::Error;

/// Repository-level errors.
///
/// Absence of a record is not an error at this level: read accessors
/// return `Option` and updates report an affected-row flag instead.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
