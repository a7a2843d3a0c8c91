//! Cash Reconciliation Engine
//!
//! End-of-shift blind cash close. The state machine has two states,
//! `COUNTING → CLOSED`, and the transition is terminal: a closed shift
//! is never reopened and its report is never edited. The operator
//! declares counted totals before seeing anything the system recorded,
//! so the count cannot be adjusted to match.

mod count;
mod engine;

pub use count::{CASH_DENOMINATIONS, CashCount, DeclaredCount, DenominationCount};
pub use engine::ReconciliationEngine;

pub use crate::db::repository::ledger::{LedgerSource, SqliteLedger};

use crate::db::repository::RepoError;
use thiserror::Error;

/// Reconciliation errors
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("Shift {0} not found")]
    ShiftNotFound(i64),

    /// The shift was already closed, possibly by a racing close; its
    /// report is immutable and a new one will not be created.
    #[error("Shift {0} is already closed")]
    ShiftAlreadyClosed(i64),

    /// Ledger totals could not be fetched. The transition is blocked:
    /// the operator stays in COUNTING and no report row is written.
    #[error("Ledger totals unavailable: {0}")]
    LedgerUnavailable(String),

    #[error("Invalid cash count: {0}")]
    InvalidCount(String),

    #[error(transparent)]
    Repo(#[from] RepoError),
}
