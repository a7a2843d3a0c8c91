//! Academic Session Repository
//!
//! Read-only: sessions are maintained by the academic administration.

use super::RepoResult;
use shared::models::AcademicSession;
use sqlx::SqlitePool;

pub async fn find_by_id(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<AcademicSession>> {
    let session = sqlx::query_as::<_, AcademicSession>(
        "SELECT id, tenant_id, label, start_date, end_date FROM academic_session WHERE tenant_id = ? AND id = ?",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(session)
}

pub async fn find_by_tenant(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Vec<AcademicSession>> {
    let sessions = sqlx::query_as::<_, AcademicSession>(
        "SELECT id, tenant_id, label, start_date, end_date FROM academic_session WHERE tenant_id = ? ORDER BY start_date DESC",
    )
    .bind(tenant_id)
    .fetch_all(pool)
    .await?;
    Ok(sessions)
}
