//! Repository Module
//!
//! Data access over SQLite. Repositories are free functions taking the
//! connection pool. The engine's own writes are limited to charges,
//! shifts and reconciliation reports — every other table is maintained
//! by the administrative application and read-only here.

// Pricing
pub mod price_rule;
pub mod school_class;

// Enrollment domain
pub mod academic_session;
pub mod enrollment;

// Billing artifacts
pub mod charge;

// Cash handling
pub mod ledger;
pub mod reconciliation;
pub mod shift;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => RepoError::NotFound(err.to_string()),
            sqlx::Error::Database(db) if db.message().contains("UNIQUE constraint failed") => {
                RepoError::Duplicate(db.message().to_string())
            }
            _ => RepoError::Database(err.to_string()),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
