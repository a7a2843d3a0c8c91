//! Calendar helpers for monthly billing math
//!
//! All dates are `chrono::NaiveDate`; reference dates are threaded in
//! from callers, never read from a global clock, so date-dependent
//! behavior stays reproducible in tests.

use chrono::{Datelike, Months, NaiveDate};

/// First day of the date's month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    // day 1 always exists
    date.with_day(1).unwrap_or(date)
}

/// First day of the following month.
pub fn next_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1)
}

/// Number of days in the date's month.
pub fn days_in_month(date: NaiveDate) -> u32 {
    next_month(date).pred_opt().map(|d| d.day()).unwrap_or(28)
}
