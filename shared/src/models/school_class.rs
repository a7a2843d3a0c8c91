//! School Class Model

use serde::{Deserialize, Serialize};

/// A class (course offering) students enroll into.
///
/// Carries the linkage the billing engine needs to resolve pricing: the
/// course it belongs to and, when set, the explicit academic year used as
/// the nominal billing year for its charges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct SchoolClass {
    pub id: i64,
    pub tenant_id: i64,
    pub course_id: i64,
    pub name: String,
    /// Explicit academic year; falls back to the session label/start date
    pub academic_year: Option<i32>,
}
