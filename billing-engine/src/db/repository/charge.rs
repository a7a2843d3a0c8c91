//! Charge Repository
//!
//! The only write path is [`insert_if_absent`]: the UNIQUE index on
//! (tenant_id, student_id, billing_year, billing_month) is the
//! serialization point for concurrent batch workers, and a conflict is
//! surfaced as a distinguishable outcome rather than an error.

use super::RepoResult;
use shared::models::{Charge, ChargeCreate};
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use std::collections::HashSet;

/// Outcome of an insert-if-absent attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeInsert {
    Inserted(i64),
    /// A charge for this (student, year, month) already exists —
    /// whether from a prior run, a racing worker or a manual entry.
    AlreadyExists,
}

pub async fn insert_if_absent(pool: &SqlitePool, data: &ChargeCreate) -> RepoResult<ChargeInsert> {
    let id = snowflake_id();
    let rows = sqlx::query(
        "INSERT INTO charge (id, tenant_id, student_id, class_id, billing_year, billing_month, amount, due_date, status, created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, 'PENDING', ?) ON CONFLICT (tenant_id, student_id, billing_year, billing_month) DO NOTHING",
    )
    .bind(id)
    .bind(data.tenant_id)
    .bind(data.student_id)
    .bind(data.class_id)
    .bind(data.billing_year)
    .bind(data.billing_month)
    .bind(data.amount)
    .bind(data.due_date)
    .bind(now_millis())
    .execute(pool)
    .await?
    .rows_affected();

    if rows == 0 {
        Ok(ChargeInsert::AlreadyExists)
    } else {
        Ok(ChargeInsert::Inserted(id))
    }
}

/// Billing periods that already carry a charge for the student.
pub async fn existing_periods(
    pool: &SqlitePool,
    tenant_id: i64,
    student_id: i64,
) -> RepoResult<HashSet<(i32, u32)>> {
    let rows: Vec<(i64, i64)> = sqlx::query_as(
        "SELECT billing_year, billing_month FROM charge WHERE tenant_id = ? AND student_id = ?",
    )
    .bind(tenant_id)
    .bind(student_id)
    .fetch_all(pool)
    .await?;
    Ok(rows
        .into_iter()
        .map(|(year, month)| (year as i32, month as u32))
        .collect())
}

pub async fn find_by_student(
    pool: &SqlitePool,
    tenant_id: i64,
    student_id: i64,
) -> RepoResult<Vec<Charge>> {
    let charges = sqlx::query_as::<_, Charge>(
        "SELECT id, tenant_id, student_id, class_id, billing_year, billing_month, amount, due_date, status, created_at FROM charge WHERE tenant_id = ? AND student_id = ? ORDER BY billing_year, billing_month",
    )
    .bind(tenant_id)
    .bind(student_id)
    .fetch_all(pool)
    .await?;
    Ok(charges)
}

/// Total number of charges for a tenant (batch summaries, tests).
pub async fn count(pool: &SqlitePool, tenant_id: i64) -> RepoResult<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM charge WHERE tenant_id = ?")
        .bind(tenant_id)
        .fetch_one(pool)
        .await?;
    Ok(count)
}
