//! Ledger Entry Model

use serde::{Deserialize, Serialize};

/// Payment channel of a recorded transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Channel {
    Cash,
    CardTerminal,
    BankTransfer,
    MobileWallet,
}

impl Channel {
    /// All channels, in reporting order.
    pub const ALL: [Channel; 4] = [
        Channel::Cash,
        Channel::CardTerminal,
        Channel::BankTransfer,
        Channel::MobileWallet,
    ];
}

/// A transaction recorded by day-to-day payment handling.
///
/// Written by the main application; the billing engine only aggregates
/// these into per-channel totals for a shift window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct LedgerEntry {
    pub id: i64,
    pub tenant_id: i64,
    pub channel: Channel,
    pub amount: f64,
    pub recorded_at: i64,
}

/// Per-channel money totals (declared, system, or variance).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelTotals {
    pub cash: f64,
    pub card_terminal: f64,
    pub bank_transfer: f64,
    pub mobile_wallet: f64,
}

impl ChannelTotals {
    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Cash => self.cash,
            Channel::CardTerminal => self.card_terminal,
            Channel::BankTransfer => self.bank_transfer,
            Channel::MobileWallet => self.mobile_wallet,
        }
    }

    pub fn set(&mut self, channel: Channel, amount: f64) {
        match channel {
            Channel::Cash => self.cash = amount,
            Channel::CardTerminal => self.card_terminal = amount,
            Channel::BankTransfer => self.bank_transfer = amount,
            Channel::MobileWallet => self.mobile_wallet = amount,
        }
    }
}
