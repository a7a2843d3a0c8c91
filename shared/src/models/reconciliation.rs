//! Reconciliation Report Model

use super::ledger::{Channel, ChannelTotals};
use serde::{Deserialize, Serialize};

/// Outcome of a shift close comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum ReconcileStatus {
    /// Every per-channel variance is exactly zero
    Match,
    /// At least one channel diverges, even if the grand total nets out
    Divergent,
}

/// End-of-shift reconciliation report.
///
/// Created exactly once per shift close and immutable afterwards: a new
/// shift close creates a new report, never edits a prior one. Per-channel
/// variances are retained even when the total is zero so offsetting
/// divergences stay visible to an auditor.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct ReconciliationReport {
    pub id: i64,
    pub tenant_id: i64,
    pub shift_id: i64,
    pub declared_cash: f64,
    pub declared_card_terminal: f64,
    pub declared_bank_transfer: f64,
    pub declared_mobile_wallet: f64,
    pub system_cash: f64,
    pub system_card_terminal: f64,
    pub system_bank_transfer: f64,
    pub system_mobile_wallet: f64,
    pub variance_cash: f64,
    pub variance_card_terminal: f64,
    pub variance_bank_transfer: f64,
    pub variance_mobile_wallet: f64,
    pub variance_total: f64,
    pub status: ReconcileStatus,
    pub generated_at: i64,
}

impl ReconciliationReport {
    pub fn declared(&self) -> ChannelTotals {
        ChannelTotals {
            cash: self.declared_cash,
            card_terminal: self.declared_card_terminal,
            bank_transfer: self.declared_bank_transfer,
            mobile_wallet: self.declared_mobile_wallet,
        }
    }

    pub fn system(&self) -> ChannelTotals {
        ChannelTotals {
            cash: self.system_cash,
            card_terminal: self.system_card_terminal,
            bank_transfer: self.system_bank_transfer,
            mobile_wallet: self.system_mobile_wallet,
        }
    }

    pub fn variance(&self) -> ChannelTotals {
        ChannelTotals {
            cash: self.variance_cash,
            card_terminal: self.variance_card_terminal,
            bank_transfer: self.variance_bank_transfer,
            mobile_wallet: self.variance_mobile_wallet,
        }
    }

    /// Variance for one channel (declared − system).
    pub fn channel_variance(&self, channel: Channel) -> f64 {
        self.variance().get(channel)
    }
}
