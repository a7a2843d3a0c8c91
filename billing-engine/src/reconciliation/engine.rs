//! Shift Close Transition
//!
//! `COUNTING → CLOSED`: fetch the recorded ledger totals for the shift
//! window, compare against the blind declaration, and persist shift
//! closure and report in one transaction. A ledger fetch failure blocks
//! the transition entirely — a partial report is never written.

use super::count::DeclaredCount;
use super::ReconcileError;
use crate::billing::money::{to_decimal, to_f64};
use crate::db::repository::ledger::{LedgerSource, SqliteLedger};
use crate::db::repository::{shift, RepoError};
use rust_decimal::prelude::*;
use shared::models::{
    Channel, ChannelTotals, ReconcileStatus, ReconciliationReport, ShiftStatus,
};
use shared::util::snowflake_id;
use sqlx::SqlitePool;
use std::sync::Arc;

pub struct ReconciliationEngine {
    pool: SqlitePool,
    ledger: Arc<dyn LedgerSource>,
}

impl ReconciliationEngine {
    pub fn new(pool: SqlitePool) -> Self {
        let ledger = Arc::new(SqliteLedger::new(pool.clone()));
        Self { pool, ledger }
    }

    /// Use a different ledger source (tests, hosted ledger service).
    pub fn with_ledger(pool: SqlitePool, ledger: Arc<dyn LedgerSource>) -> Self {
        Self { pool, ledger }
    }

    /// Close a shift: compare the declared counts against recorded
    /// ledger totals for `[shift start, closed_at]` and persist the
    /// immutable report.
    ///
    /// The report is `Match` only when every per-channel variance is
    /// exactly zero; offsetting divergences that net the grand total to
    /// zero are still `Divergent`. A second close of the same shift
    /// fails with [`ReconcileError::ShiftAlreadyClosed`].
    pub async fn close(
        &self,
        tenant_id: i64,
        shift_id: i64,
        declared: &DeclaredCount,
        closed_at: i64,
    ) -> Result<ReconciliationReport, ReconcileError> {
        let declared = declared.totals()?;

        let shift = shift::find_by_id(&self.pool, tenant_id, shift_id)
            .await?
            .ok_or(ReconcileError::ShiftNotFound(shift_id))?;
        if shift.status == ShiftStatus::Closed {
            return Err(ReconcileError::ShiftAlreadyClosed(shift_id));
        }

        let system = self
            .ledger
            .channel_totals(tenant_id, shift.start_time, closed_at)
            .await
            .map_err(|e| ReconcileError::LedgerUnavailable(e.to_string()))?;

        let mut variance = ChannelTotals::default();
        let mut variance_total = Decimal::ZERO;
        let mut divergent = false;
        for channel in Channel::ALL {
            let diff = to_decimal(declared.get(channel)) - to_decimal(system.get(channel));
            variance.set(channel, to_f64(diff));
            variance_total += diff;
            if !diff.is_zero() {
                divergent = true;
            }
        }
        let status = if divergent {
            ReconcileStatus::Divergent
        } else {
            ReconcileStatus::Match
        };

        let report = ReconciliationReport {
            id: snowflake_id(),
            tenant_id,
            shift_id,
            declared_cash: declared.cash,
            declared_card_terminal: declared.card_terminal,
            declared_bank_transfer: declared.bank_transfer,
            declared_mobile_wallet: declared.mobile_wallet,
            system_cash: system.cash,
            system_card_terminal: system.card_terminal,
            system_bank_transfer: system.bank_transfer,
            system_mobile_wallet: system.mobile_wallet,
            variance_cash: variance.cash,
            variance_card_terminal: variance.card_terminal,
            variance_bank_transfer: variance.bank_transfer,
            variance_mobile_wallet: variance.mobile_wallet,
            variance_total: to_f64(variance_total),
            status,
            generated_at: closed_at,
        };

        // Shift closure and report insert commit together; the guarded
        // UPDATE serializes racing closes, the unique shift_id index on
        // the report table backs it up.
        let mut tx = self.pool.begin().await.map_err(RepoError::from)?;
        let rows = sqlx::query(
            "UPDATE shift SET status = 'CLOSED', end_time = ?, updated_at = ? WHERE id = ? AND tenant_id = ? AND status = 'OPEN'",
        )
        .bind(closed_at)
        .bind(closed_at)
        .bind(shift_id)
        .bind(tenant_id)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::from)?
        .rows_affected();
        if rows == 0 {
            return Err(ReconcileError::ShiftAlreadyClosed(shift_id));
        }
        sqlx::query(
            "INSERT INTO reconciliation_report (id, tenant_id, shift_id, declared_cash, declared_card_terminal, declared_bank_transfer, declared_mobile_wallet, system_cash, system_card_terminal, system_bank_transfer, system_mobile_wallet, variance_cash, variance_card_terminal, variance_bank_transfer, variance_mobile_wallet, variance_total, status, generated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(report.id)
        .bind(report.tenant_id)
        .bind(report.shift_id)
        .bind(report.declared_cash)
        .bind(report.declared_card_terminal)
        .bind(report.declared_bank_transfer)
        .bind(report.declared_mobile_wallet)
        .bind(report.system_cash)
        .bind(report.system_card_terminal)
        .bind(report.system_bank_transfer)
        .bind(report.system_mobile_wallet)
        .bind(report.variance_cash)
        .bind(report.variance_card_terminal)
        .bind(report.variance_bank_transfer)
        .bind(report.variance_mobile_wallet)
        .bind(report.variance_total)
        .bind(report.status)
        .bind(report.generated_at)
        .execute(&mut *tx)
        .await
        .map_err(RepoError::from)?;
        tx.commit().await.map_err(RepoError::from)?;

        tracing::info!(
            tenant_id,
            shift_id,
            status = ?report.status,
            variance_total = report.variance_total,
            "Shift closed"
        );
        Ok(report)
    }
}
