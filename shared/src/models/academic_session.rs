//! Academic Session Model

use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// One school year's date range.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AcademicSession {
    pub id: i64,
    pub tenant_id: i64,
    /// Display label, e.g. "Curso 2025-2026"; may embed a 4-digit year
    pub label: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl AcademicSession {
    /// First exactly-4-digit year token embedded in the label, if any.
    ///
    /// "Curso 2025-2026" yields 2025; runs of more or fewer digits are
    /// ignored.
    pub fn label_year(&self) -> Option<i32> {
        let bytes = self.label.as_bytes();
        let mut run_start: Option<usize> = None;
        for i in 0..=bytes.len() {
            let is_digit = i < bytes.len() && bytes[i].is_ascii_digit();
            match (run_start, is_digit) {
                (None, true) => run_start = Some(i),
                (Some(start), false) => {
                    if i - start == 4 {
                        return self.label[start..i].parse().ok();
                    }
                    run_start = None;
                }
                _ => {}
            }
        }
        None
    }

    /// Whether the given calendar month overlaps this session's range.
    pub fn covers_month(&self, year: i32, month: u32) -> bool {
        let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
            return false;
        };
        let Some(last) = first
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
        else {
            return false;
        };
        first <= self.end_date && last >= self.start_date
    }
}
