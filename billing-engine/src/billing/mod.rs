//! Billing Schedule Generation and Batch Cycle Runs

pub mod money;
pub mod runner;
pub mod schedule;

pub use runner::{BatchBillingRunner, BatchResult, FailedEnrollment};
pub use schedule::{GenerationMode, generate};

use crate::db::repository::RepoError;
use thiserror::Error;

/// Billing errors
#[derive(Debug, Error)]
pub enum BillingError {
    /// No price rule at any cascade level — a business condition the
    /// tenant staff must fix, surfaced verbatim and never defaulted.
    #[error("No pricing rule configured for year {academic_year} (tenant {tenant_id})")]
    MissingPricingRule { tenant_id: i64, academic_year: i32 },

    /// A second active enrollment for the same (student, session) —
    /// the duplicate is refused, the first one is billed.
    #[error("Duplicate active enrollment for student {student_id} in session {session_id}")]
    DuplicateEnrollment { student_id: i64, session_id: i64 },

    #[error("Invalid billing period: {0}")]
    InvalidPeriod(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
