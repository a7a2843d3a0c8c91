//! Reconciliation Report Repository
//!
//! Reports are written once, inside the shift-close transaction, and
//! never updated: these readers are the whole public surface.

use super::RepoResult;
use shared::models::ReconciliationReport;
use sqlx::SqlitePool;

pub async fn find_by_shift(
    pool: &SqlitePool,
    tenant_id: i64,
    shift_id: i64,
) -> RepoResult<Option<ReconciliationReport>> {
    let report = sqlx::query_as::<_, ReconciliationReport>(
        "SELECT id, tenant_id, shift_id, declared_cash, declared_card_terminal, declared_bank_transfer, declared_mobile_wallet, system_cash, system_card_terminal, system_bank_transfer, system_mobile_wallet, variance_cash, variance_card_terminal, variance_bank_transfer, variance_mobile_wallet, variance_total, status, generated_at FROM reconciliation_report WHERE tenant_id = ? AND shift_id = ?",
    )
    .bind(tenant_id)
    .bind(shift_id)
    .fetch_optional(pool)
    .await?;
    Ok(report)
}

pub async fn find_all(
    pool: &SqlitePool,
    tenant_id: i64,
    limit: i32,
    offset: i32,
) -> RepoResult<Vec<ReconciliationReport>> {
    let reports = sqlx::query_as::<_, ReconciliationReport>(
        "SELECT id, tenant_id, shift_id, declared_cash, declared_card_terminal, declared_bank_transfer, declared_mobile_wallet, system_cash, system_card_terminal, system_bank_transfer, system_mobile_wallet, variance_cash, variance_card_terminal, variance_bank_transfer, variance_mobile_wallet, variance_total, status, generated_at FROM reconciliation_report WHERE tenant_id = ? ORDER BY generated_at DESC LIMIT ? OFFSET ?",
    )
    .bind(tenant_id)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;
    Ok(reports)
}
