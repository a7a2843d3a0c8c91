//! Shared test fixtures
//!
//! Seeds the tables the engine treats as read-only (rules, classes,
//! sessions, enrollments, ledger) the way the administrative application
//! would have written them.

#![allow(dead_code)]

use billing_engine::DbService;
use shared::util::{now_millis, snowflake_id};
use sqlx::SqlitePool;
use tempfile::TempDir;

pub const TENANT: i64 = 1;

/// Fresh on-disk database in a temp dir; keep the guard alive for the
/// duration of the test.
pub async fn setup_db() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("billing.db");
    let db = DbService::new(path.to_str().expect("utf-8 temp path"))
        .await
        .expect("open database");
    (dir, db.pool)
}

pub async fn insert_session(pool: &SqlitePool, id: i64, label: &str, start: &str, end: &str) {
    sqlx::query(
        "INSERT INTO academic_session (id, tenant_id, label, start_date, end_date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(TENANT)
    .bind(label)
    .bind(start)
    .bind(end)
    .execute(pool)
    .await
    .expect("insert session");
}

pub async fn insert_class(pool: &SqlitePool, id: i64, course_id: i64, academic_year: Option<i32>) {
    sqlx::query(
        "INSERT INTO school_class (id, tenant_id, course_id, name, academic_year) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(TENANT)
    .bind(course_id)
    .bind(format!("Class {id}"))
    .bind(academic_year)
    .execute(pool)
    .await
    .expect("insert class");
}

pub async fn insert_enrollment(
    pool: &SqlitePool,
    id: i64,
    student_id: i64,
    class_id: i64,
    session_id: i64,
    date: &str,
) {
    sqlx::query(
        "INSERT INTO enrollment (id, tenant_id, student_id, class_id, session_id, enrollment_date, status, created_at) VALUES (?, ?, ?, ?, ?, ?, 'ACTIVE', ?)",
    )
    .bind(id)
    .bind(TENANT)
    .bind(student_id)
    .bind(class_id)
    .bind(session_id)
    .bind(date)
    .bind(now_millis())
    .execute(pool)
    .await
    .expect("insert enrollment");
}

pub async fn insert_rule(
    pool: &SqlitePool,
    academic_year: i32,
    course_id: Option<i64>,
    class_id: Option<i64>,
    monthly_fee: f64,
    due_day: u32,
) -> i64 {
    let id = snowflake_id();
    let now = now_millis();
    sqlx::query(
        "INSERT INTO price_rule (id, tenant_id, academic_year, course_id, class_id, enrollment_fee, monthly_fee, due_day, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(TENANT)
    .bind(academic_year)
    .bind(course_id)
    .bind(class_id)
    .bind(monthly_fee / 10.0)
    .bind(monthly_fee)
    .bind(due_day as i64)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await
    .expect("insert price rule");
    id
}

pub async fn insert_ledger(pool: &SqlitePool, channel: &str, amount: f64, recorded_at: i64) {
    sqlx::query(
        "INSERT INTO ledger_entry (id, tenant_id, channel, amount, recorded_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(snowflake_id())
    .bind(TENANT)
    .bind(channel)
    .bind(amount)
    .bind(recorded_at)
    .execute(pool)
    .await
    .expect("insert ledger entry");
}

pub async fn charge_count(pool: &SqlitePool) -> i64 {
    billing_engine::db::repository::charge::count(pool, TENANT)
        .await
        .expect("count charges")
}
