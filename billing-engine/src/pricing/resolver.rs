//! Price Cascade Resolver

use super::cascade::cascade;
use crate::billing::schedule;
use crate::db::repository::{RepoError, RepoResult, price_rule, school_class};
use shared::models::{AcademicSession, Enrollment, PriceRule};
use sqlx::SqlitePool;

/// Resolve the most specific price rule for the target scope.
///
/// Candidates are probed in cascade order and the first existing rule
/// wins; partial matches are never merged or averaged, and a more
/// recently created general rule never outranks a specific one.
/// `Ok(None)` means pricing is not configured for this target — callers
/// surface that to the operator, they do not default the price.
pub async fn resolve(
    pool: &SqlitePool,
    tenant_id: i64,
    academic_year: i32,
    course_id: Option<i64>,
    class_id: Option<i64>,
) -> RepoResult<Option<PriceRule>> {
    for scope in cascade(course_id, class_id) {
        if let Some(rule) =
            price_rule::find_by_scope(pool, tenant_id, academic_year, scope.course_id, scope.class_id)
                .await?
        {
            tracing::debug!(
                tenant_id,
                academic_year,
                course_id = ?scope.course_id,
                class_id = ?scope.class_id,
                rule_id = rule.id,
                "Resolved price rule"
            );
            return Ok(Some(rule));
        }
    }
    Ok(None)
}

/// Resolve pricing for an enrollment, deriving the course and the
/// nominal billing year from its class linkage before walking the
/// cascade.
pub async fn resolve_for_enrollment(
    pool: &SqlitePool,
    enrollment: &Enrollment,
    session: &AcademicSession,
) -> RepoResult<Option<PriceRule>> {
    let class = school_class::find_by_id(pool, enrollment.tenant_id, enrollment.class_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Class {} not found", enrollment.class_id)))?;
    let academic_year = schedule::nominal_billing_year(class.academic_year, session);
    resolve(
        pool,
        enrollment.tenant_id,
        academic_year,
        Some(class.course_id),
        Some(enrollment.class_id),
    )
    .await
}
