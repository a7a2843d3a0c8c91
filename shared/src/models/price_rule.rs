//! Price Rule Model

use serde::{Deserialize, Serialize};

/// Tuition price rule.
///
/// One row per (tenant, academic year, course?, class?) scope; a NULL
/// `course_id`/`class_id` widens the scope, the both-NULL row being the
/// tenant's general rule. The engine treats rules as read-only: they are
/// created and edited through administrative screens, and a rule already
/// referenced by a generated charge is never retroactively changed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct PriceRule {
    pub id: i64,
    pub tenant_id: i64,
    /// Academic year the rule applies to (e.g. 2025)
    pub academic_year: i32,
    /// Course scope; NULL applies to every course
    pub course_id: Option<i64>,
    /// Class scope; NULL applies to every class
    pub class_id: Option<i64>,
    /// One-off fee charged when a student enrolls
    pub enrollment_fee: f64,
    /// Recurring monthly tuition fee
    pub monthly_fee: f64,
    /// Day of month the charge falls due (1..=31, clamped to month length)
    pub due_day: u32,
    pub created_at: i64,
    pub updated_at: i64,
}
