//! Enrollment Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enrollment lifecycle status. Only `Active` enrollments are eligible
/// for charge generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum EnrollmentStatus {
    Active,
    Locked,
    Transferred,
    Withdrawn,
}

/// A student's enrollment into a class for one academic session.
///
/// Created by the enrollment workflow; the billing engine only reads it.
/// At most one Active enrollment may exist per (student, session) — the
/// batch runner re-verifies this defensively rather than assuming it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Enrollment {
    pub id: i64,
    pub tenant_id: i64,
    pub student_id: i64,
    pub class_id: i64,
    pub session_id: i64,
    pub enrollment_date: NaiveDate,
    pub status: EnrollmentStatus,
    pub created_at: i64,
}
