//! Shift Model

use serde::{Deserialize, Serialize};

/// Shift status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ShiftStatus {
    Open,
    Closed,
}

impl Default for ShiftStatus {
    fn default() -> Self {
        Self::Open
    }
}

/// An operator's cash-handling shift.
///
/// Open shifts accumulate ledger entries; closing runs the blind cash
/// reconciliation and is terminal — a closed shift is never reopened, a
/// new shift is a new row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Shift {
    pub id: i64,
    pub tenant_id: i64,
    /// Operator employee ID
    pub operator_id: i64,
    /// Operator name snapshot
    pub operator_name: String,
    pub status: ShiftStatus,
    /// Shift start (Unix millis); lower bound of the ledger window
    pub start_time: i64,
    /// Shift end (Unix millis), set at close
    pub end_time: Option<i64>,
    pub note: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Open shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftOpen {
    pub operator_id: i64,
    pub operator_name: String,
    pub note: Option<String>,
}
