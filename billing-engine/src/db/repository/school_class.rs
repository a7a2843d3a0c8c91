//! School Class Repository
//!
//! Read-only: class records come from the academic administration side.

use super::RepoResult;
use shared::models::SchoolClass;
use sqlx::SqlitePool;

pub async fn find_by_id(
    pool: &SqlitePool,
    tenant_id: i64,
    id: i64,
) -> RepoResult<Option<SchoolClass>> {
    let class = sqlx::query_as::<_, SchoolClass>(
        "SELECT id, tenant_id, course_id, name, academic_year FROM school_class WHERE tenant_id = ? AND id = ?",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(class)
}
