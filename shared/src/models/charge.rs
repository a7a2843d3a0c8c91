//! Charge Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Charge payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ChargeStatus {
    Pending,
    Paid,
    Void,
}

/// One monthly tuition charge.
///
/// Unique per (tenant, student, billing_year, billing_month) regardless
/// of status — a period that already carries a charge is never billed
/// again, whether the existing charge came from a batch run, a re-run or
/// a manual entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Charge {
    pub id: i64,
    pub tenant_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    /// Nominal billing year (constant across a session's charges)
    pub billing_year: i32,
    /// Calendar month being billed (1..=12)
    pub billing_month: u32,
    /// Amount due, 2 decimal places
    pub amount: f64,
    pub due_date: NaiveDate,
    pub status: ChargeStatus,
    pub created_at: i64,
}

/// Uninserted charge row produced by the schedule generator.
///
/// Persistence stays with the caller so a generation run can be inspected
/// (or discarded) before anything is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChargeCreate {
    pub tenant_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub billing_year: i32,
    pub billing_month: u32,
    pub amount: f64,
    pub due_date: NaiveDate,
}
