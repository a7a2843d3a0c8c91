//! Price Rule Repository
//!
//! Read-only: rules are maintained through administrative screens and
//! must never be written by the engine.

use super::RepoResult;
use shared::models::PriceRule;
use sqlx::SqlitePool;

/// Find the rule for one exact scope, NULL-safe on both scope columns.
///
/// `course_id IS ?` / `class_id IS ?` match the both-NULL general rule
/// as well as concrete scopes; at most one row can exist per scope.
pub async fn find_by_scope(
    pool: &SqlitePool,
    tenant_id: i64,
    academic_year: i32,
    course_id: Option<i64>,
    class_id: Option<i64>,
) -> RepoResult<Option<PriceRule>> {
    let rule = sqlx::query_as::<_, PriceRule>(
        "SELECT id, tenant_id, academic_year, course_id, class_id, enrollment_fee, monthly_fee, due_day, created_at, updated_at FROM price_rule WHERE tenant_id = ? AND academic_year = ? AND course_id IS ? AND class_id IS ?",
    )
    .bind(tenant_id)
    .bind(academic_year)
    .bind(course_id)
    .bind(class_id)
    .fetch_optional(pool)
    .await?;
    Ok(rule)
}

/// All rules of a tenant for one academic year.
pub async fn find_by_year(
    pool: &SqlitePool,
    tenant_id: i64,
    academic_year: i32,
) -> RepoResult<Vec<PriceRule>> {
    let rules = sqlx::query_as::<_, PriceRule>(
        "SELECT id, tenant_id, academic_year, course_id, class_id, enrollment_fee, monthly_fee, due_day, created_at, updated_at FROM price_rule WHERE tenant_id = ? AND academic_year = ? ORDER BY course_id, class_id",
    )
    .bind(tenant_id)
    .bind(academic_year)
    .fetch_all(pool)
    .await?;
    Ok(rules)
}
