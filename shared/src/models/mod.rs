//! Data models
//!
//! Shared between the billing engine and the administrative frontend
//! (via API serialization). DB row types use
//! `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod academic_session;
pub mod charge;
pub mod enrollment;
pub mod ledger;
pub mod price_rule;
pub mod reconciliation;
pub mod school_class;
pub mod shift;

// Re-exports
pub use academic_session::*;
pub use charge::*;
pub use enrollment::*;
pub use ledger::*;
pub use price_rule::*;
pub use reconciliation::*;
pub use school_class::*;
pub use shift::*;
