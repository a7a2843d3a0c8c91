//! Money calculation utilities using rust_decimal for precision
//!
//! All monetary arithmetic runs in `Decimal` and converts to `f64` for
//! storage/serialization, rounded to 2 decimal places half-up (matching
//! currency display conventions, not banker's rounding).

use rust_decimal::prelude::*;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Re-round an f64 amount to the canonical 2 decimal places.
#[inline]
pub fn round2(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Prorated first-month amount by remaining-days ratio.
///
/// `remaining_days = days_in_month - enrollment_day + 1`. Rounding is
/// applied exactly once, here. Never negative.
pub fn prorated_amount(monthly_fee: f64, enrollment_day: u32, days_in_month: u32) -> f64 {
    let fee = to_decimal(monthly_fee);
    let remaining = Decimal::from(days_in_month.saturating_sub(enrollment_day) + 1);
    let days = Decimal::from(days_in_month);
    to_f64((fee * remaining / days).max(Decimal::ZERO))
}
