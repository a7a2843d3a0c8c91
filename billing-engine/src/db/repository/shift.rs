//! Shift Repository

use super::{RepoError, RepoResult};
use shared::models::{Shift, ShiftOpen};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, tenant_id: i64, id: i64) -> RepoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, Shift>(
        "SELECT id, tenant_id, operator_id, operator_name, status, start_time, end_time, note, created_at, updated_at FROM shift WHERE tenant_id = ? AND id = ?",
    )
    .bind(tenant_id)
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(shift)
}

pub async fn find_open(pool: &SqlitePool, tenant_id: i64) -> RepoResult<Option<Shift>> {
    let shift = sqlx::query_as::<_, Shift>(
        "SELECT id, tenant_id, operator_id, operator_name, status, start_time, end_time, note, created_at, updated_at FROM shift WHERE tenant_id = ? AND status = 'OPEN' LIMIT 1",
    )
    .bind(tenant_id)
    .fetch_optional(pool)
    .await?;
    Ok(shift)
}

/// Open a new shift. Only one shift may be open per tenant at a time;
/// the partial unique index on open shifts backs this check.
pub async fn open(pool: &SqlitePool, tenant_id: i64, data: ShiftOpen) -> RepoResult<Shift> {
    if data.operator_name.trim().is_empty() {
        return Err(RepoError::Validation("Operator name cannot be empty".into()));
    }
    if find_open(pool, tenant_id).await?.is_some() {
        return Err(RepoError::Duplicate("A shift is already open".into()));
    }

    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO shift (id, tenant_id, operator_id, operator_name, status, start_time, note, created_at, updated_at) VALUES (?, ?, ?, ?, 'OPEN', ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(tenant_id)
    .bind(data.operator_id)
    .bind(data.operator_name)
    .bind(now)
    .bind(data.note)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, tenant_id, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to open shift".into()))
}

pub async fn find_all(
    pool: &SqlitePool,
    tenant_id: i64,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<Shift>> {
    let shifts = sqlx::query_as::<_, Shift>(
        "SELECT id, tenant_id, operator_id, operator_name, status, start_time, end_time, note, created_at, updated_at FROM shift WHERE tenant_id = ? ORDER BY start_time DESC LIMIT ? OFFSET ?",
    )
    .bind(tenant_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(shifts)
}
