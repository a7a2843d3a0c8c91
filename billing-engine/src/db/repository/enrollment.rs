//! Enrollment Repository
//!
//! Read-only: enrollments are created by the enrollment workflow; the
//! billing engine only selects them for charge generation.

use super::RepoResult;
use shared::models::Enrollment;
use sqlx::SqlitePool;

pub async fn find_by_id(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<Enrollment>> {
    let enrollment = sqlx::query_as::<_, Enrollment>(
        "SELECT id, tenant_id, student_id, class_id, session_id, enrollment_date, status, created_at FROM enrollment WHERE tenant_id = ? AND id = ?",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(enrollment)
}

/// All active enrollments of a tenant, oldest first so that the batch
/// runner's duplicate re-check keeps the earliest of a duplicated pair.
pub async fn find_active(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<Enrollment>> {
    let enrollments = sqlx::query_as::<_, Enrollment>(
        "SELECT id, tenant_id, student_id, class_id, session_id, enrollment_date, status, created_at FROM enrollment WHERE tenant_id = ? AND status = 'ACTIVE' ORDER BY id",
    )
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(enrollments)
}
