//! Blind Cash Count
//!
//! COUNTING-phase input: the operator counts physical cash by
//! denomination and keys the digital channel totals from terminal and
//! bank slips by hand, without system assistance.

use super::ReconcileError;
use crate::billing::money::{round2, to_decimal, to_f64};
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use shared::models::ChannelTotals;

/// Euro cash denominations accepted by the count, descending.
pub const CASH_DENOMINATIONS: [f64; 15] = [
    500.0, 200.0, 100.0, 50.0, 20.0, 10.0, 5.0, 2.0, 1.0, 0.50, 0.20, 0.10, 0.05, 0.02, 0.01,
];

/// Counted quantity of one denomination.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DenominationCount {
    pub value: f64,
    pub quantity: u32,
}

/// Physical cash count over the fixed denomination set.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CashCount {
    pub counts: Vec<DenominationCount>,
}

impl CashCount {
    /// Total counted cash: Σ value × quantity. Denominations outside the
    /// fixed set are rejected.
    pub fn total(&self) -> Result<f64, ReconcileError> {
        let mut sum = Decimal::ZERO;
        for count in &self.counts {
            if !CASH_DENOMINATIONS.contains(&count.value) {
                return Err(ReconcileError::InvalidCount(format!(
                    "Unknown denomination: {}",
                    count.value
                )));
            }
            sum += to_decimal(count.value) * Decimal::from(count.quantity);
        }
        Ok(to_f64(sum))
    }
}

/// Operator-declared totals for all four channels, assembled blind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeclaredCount {
    /// Physical cash, counted by denomination
    pub cash: CashCount,
    /// Card terminal batch total, summed from slips
    pub card_terminal: f64,
    /// Bank transfer total, summed from statements
    pub bank_transfer: f64,
    /// Mobile wallet total, summed from vouchers
    pub mobile_wallet: f64,
}

impl DeclaredCount {
    pub fn totals(&self) -> Result<ChannelTotals, ReconcileError> {
        Ok(ChannelTotals {
            cash: self.cash.total()?,
            card_terminal: round2(self.card_terminal),
            bank_transfer: round2(self.bank_transfer),
            mobile_wallet: round2(self.mobile_wallet),
        })
    }
}
