//! Ledger Repository
//!
//! Read-only aggregation over recorded transactions. Day-to-day payment
//! handling in the main application writes this table; the engine only
//! sums it per channel for a shift window.

use super::RepoResult;
use crate::billing::money;
use async_trait::async_trait;
use shared::models::{Channel, ChannelTotals, LedgerEntry};
use sqlx::SqlitePool;

/// Raw entries inside a window, oldest first (audit drill-down behind a
/// reconciliation report).
pub async fn list_window(
    pool: &SqlitePool,
    tenant_id: i64,
    from_millis: i64,
    to_millis: i64,
) -> RepoResult<Vec<LedgerEntry>> {
    let entries = sqlx::query_as::<_, LedgerEntry>(
        "SELECT id, tenant_id, channel, amount, recorded_at FROM ledger_entry WHERE tenant_id = ? AND recorded_at >= ? AND recorded_at <= ? ORDER BY recorded_at",
    )
    .bind(tenant_id)
    .bind(from_millis)
    .bind(to_millis)
    .fetch_all(pool)
    .await?;
    Ok(entries)
}

/// Source of per-channel ledger totals for a time window.
///
/// The reconciliation engine compares declared counts against these
/// totals. The seam exists so the fetch-failure path can be exercised
/// and so a hosted ledger service could stand in for the local table.
#[async_trait]
pub trait LedgerSource: Send + Sync {
    async fn channel_totals(
        &self,
        tenant_id: i64,
        from_millis: i64,
        to_millis: i64,
    ) -> RepoResult<ChannelTotals>;
}

/// Production ledger source over the engine's SQLite pool.
#[derive(Clone)]
pub struct SqliteLedger {
    pool: SqlitePool,
}

impl SqliteLedger {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LedgerSource for SqliteLedger {
    async fn channel_totals(
        &self,
        tenant_id: i64,
        from_millis: i64,
        to_millis: i64,
    ) -> RepoResult<ChannelTotals> {
        let rows: Vec<(Channel, f64)> = sqlx::query_as(
            "SELECT channel, SUM(amount) FROM ledger_entry WHERE tenant_id = ? AND recorded_at >= ? AND recorded_at <= ? GROUP BY channel",
        )
        .bind(tenant_id)
        .bind(from_millis)
        .bind(to_millis)
        .fetch_all(&self.pool)
        .await?;

        let mut totals = ChannelTotals::default();
        for (channel, amount) in rows {
            // REAL summation drifts; totals are canonically 2dp
            totals.set(channel, money::round2(amount));
        }
        Ok(totals)
    }
}
