//! Billing Schedule Generator
//!
//! Pure month-by-month charge generation for a single enrollment.
//! Persistence stays with the caller so a run can be inspected (or
//! discarded) before anything is written, and so tests never need a
//! database. The reference month for cycle runs is threaded in through
//! [`GenerationMode`] rather than read from a clock.

use super::BillingError;
use super::money;
use crate::utils::time::{days_in_month, first_of_month, next_month};
use chrono::{Datelike, NaiveDate};
use shared::models::{AcademicSession, ChargeCreate, Enrollment, PriceRule};
use std::collections::HashSet;

/// Generation window mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Bill through the given cycle month (inclusive) and no further.
    /// Used by the batch runner; months between the start cursor and the
    /// cycle month that are still unbilled are caught up.
    CurrentMonthOnly { year: i32, month: u32 },
    /// Bill every month through the session end month. Used when an
    /// enrollment's full schedule is generated up front.
    ThroughSessionEnd,
}

/// Nominal billing year for an enrollment's charges.
///
/// Preference order: the class's explicit academic year, a 4-digit year
/// embedded in the session label, the session start year.
pub fn nominal_billing_year(class_year: Option<i32>, session: &AcademicSession) -> i32 {
    class_year
        .or_else(|| session.label_year())
        .unwrap_or_else(|| session.start_date.year())
}

/// First month to bill: the later of session start and enrollment date,
/// truncated to the first of its month.
pub fn start_cursor(enrollment: &Enrollment, session: &AcademicSession) -> NaiveDate {
    first_of_month(session.start_date.max(enrollment.enrollment_date))
}

/// End boundary (first day of the last billed month) for a mode.
pub fn end_boundary(
    session: &AcademicSession,
    mode: GenerationMode,
) -> Result<NaiveDate, BillingError> {
    match mode {
        GenerationMode::CurrentMonthOnly { year, month } => NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| BillingError::InvalidPeriod(format!("{year}-{month:02}"))),
        GenerationMode::ThroughSessionEnd => Ok(first_of_month(session.end_date)),
    }
}

/// Number of monthly periods in the inclusive window; 0 when inverted.
pub fn month_span(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    ((end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32 + 1) as u32
}

/// Generate the charge rows for one enrollment.
///
/// Walks month-by-month from the start cursor to the mode's end boundary,
/// skipping periods already present in `existing_periods` (the
/// idempotency guard: a re-run over billed periods is a no-op). The due
/// day is clamped to each month's length. The enrollment month itself is
/// prorated by remaining days when the student joined after the rule's
/// due day.
pub fn generate(
    enrollment: &Enrollment,
    rule: Option<&PriceRule>,
    session: &AcademicSession,
    class_year: Option<i32>,
    existing_periods: &HashSet<(i32, u32)>,
    mode: GenerationMode,
) -> Result<Vec<ChargeCreate>, BillingError> {
    let billing_year = nominal_billing_year(class_year, session);
    let Some(rule) = rule else {
        // Callers should not get this far without a rule; reject rather
        // than panic if one does.
        return Err(BillingError::MissingPricingRule {
            tenant_id: enrollment.tenant_id,
            academic_year: billing_year,
        });
    };

    let enrollment_month = first_of_month(enrollment.enrollment_date);
    let mut cursor = start_cursor(enrollment, session);
    let end = end_boundary(session, mode)?;

    let mut charges = Vec::new();
    while cursor <= end {
        let month = cursor.month();
        if !existing_periods.contains(&(billing_year, month)) {
            let days = days_in_month(cursor);
            let due_day = rule.due_day.min(days);
            let due_date = cursor.with_day(due_day).unwrap_or(cursor);

            // Daily proration applies only to the enrollment month
            // itself, when the student joined after the due day.
            let amount = if cursor == enrollment_month
                && enrollment.enrollment_date.day() > rule.due_day
            {
                money::prorated_amount(rule.monthly_fee, enrollment.enrollment_date.day(), days)
            } else {
                money::round2(rule.monthly_fee)
            };

            charges.push(ChargeCreate {
                tenant_id: enrollment.tenant_id,
                student_id: enrollment.student_id,
                class_id: enrollment.class_id,
                billing_year,
                billing_month: month,
                amount,
                due_date,
            });
        }
        cursor = next_month(cursor);
    }
    Ok(charges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::EnrollmentStatus;

    fn session(label: &str, start: &str, end: &str) -> AcademicSession {
        AcademicSession {
            id: 10,
            tenant_id: 1,
            label: label.to_string(),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
        }
    }

    fn enrollment(date: &str) -> Enrollment {
        Enrollment {
            id: 1000,
            tenant_id: 1,
            student_id: 500,
            class_id: 42,
            session_id: 10,
            enrollment_date: date.parse().unwrap(),
            status: EnrollmentStatus::Active,
            created_at: 0,
        }
    }

    fn rule(monthly_fee: f64, due_day: u32) -> PriceRule {
        PriceRule {
            id: 7,
            tenant_id: 1,
            academic_year: 2025,
            course_id: Some(100),
            class_id: None,
            enrollment_fee: 0.0,
            monthly_fee,
            due_day,
            created_at: 0,
            updated_at: 0,
        }
    }

    #[test]
    fn full_session_schedule_prorates_only_the_first_month() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-20");
        let rule = rule(10000.0, 10);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::ThroughSessionEnd,
        )
        .unwrap();

        // September through June inclusive
        assert_eq!(charges.len(), 10);
        // 10000 * (30 - 20 + 1) / 30, rounded half-up
        assert_eq!(charges[0].amount, 3666.67);
        assert_eq!(charges[0].billing_month, 9);
        for charge in &charges[1..] {
            assert_eq!(charge.amount, 10000.0);
        }
        // Nominal year from the label, constant across calendar years
        assert!(charges.iter().all(|c| c.billing_year == 2025));
    }

    #[test]
    fn no_proration_when_enrolled_on_or_before_due_day() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-10");
        let rule = rule(10000.0, 10);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::CurrentMonthOnly { year: 2025, month: 9 },
        )
        .unwrap();

        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].amount, 10000.0);
    }

    #[test]
    fn due_day_clamps_to_month_length() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-01");
        let rule = rule(200.0, 31);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::ThroughSessionEnd,
        )
        .unwrap();

        let by_month: Vec<(u32, NaiveDate)> =
            charges.iter().map(|c| (c.billing_month, c.due_date)).collect();
        // 28-day February, 30-day months, 31-day months
        assert!(by_month.contains(&(2, "2026-02-28".parse().unwrap())));
        assert!(by_month.contains(&(9, "2025-09-30".parse().unwrap())));
        assert!(by_month.contains(&(10, "2025-10-31".parse().unwrap())));
    }

    #[test]
    fn due_day_clamps_to_leap_february() {
        let session = session("Curso 2023-2024", "2023-09-01", "2024-06-30");
        let enrollment = enrollment("2023-09-01");
        let rule = rule(200.0, 31);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::CurrentMonthOnly { year: 2024, month: 2 },
        )
        .unwrap();

        let feb = charges.iter().find(|c| c.billing_month == 2).unwrap();
        assert_eq!(feb.due_date, "2024-02-29".parse::<NaiveDate>().unwrap());
    }

    #[test]
    fn existing_periods_are_skipped() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-01");
        let rule = rule(100.0, 5);

        let existing: HashSet<(i32, u32)> = [(2025, 9), (2025, 10)].into_iter().collect();
        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &existing,
            GenerationMode::CurrentMonthOnly { year: 2025, month: 11 },
        )
        .unwrap();

        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].billing_month, 11);
    }

    #[test]
    fn rerun_with_first_runs_periods_is_a_noop() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-15");
        let rule = rule(100.0, 5);

        let first = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::ThroughSessionEnd,
        )
        .unwrap();
        let periods: HashSet<(i32, u32)> = first
            .iter()
            .map(|c| (c.billing_year, c.billing_month))
            .collect();

        let second = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &periods,
            GenerationMode::ThroughSessionEnd,
        )
        .unwrap();
        assert!(second.is_empty());
    }

    #[test]
    fn cycle_before_enrollment_month_generates_nothing() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-11-15");
        let rule = rule(100.0, 5);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::CurrentMonthOnly { year: 2025, month: 10 },
        )
        .unwrap();
        assert!(charges.is_empty());
    }

    #[test]
    fn enrollment_before_session_start_cursors_to_session_start() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        // Enrolled over the summer, before the session begins
        let enrollment = enrollment("2025-07-20");
        let rule = rule(100.0, 10);

        let charges = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::CurrentMonthOnly { year: 2025, month: 9 },
        )
        .unwrap();

        // No proration: September is not the enrollment month
        assert_eq!(charges.len(), 1);
        assert_eq!(charges[0].billing_month, 9);
        assert_eq!(charges[0].amount, 100.0);
    }

    #[test]
    fn nominal_year_prefers_class_then_label_then_start_date() {
        let labeled = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        assert_eq!(nominal_billing_year(Some(2024), &labeled), 2024);
        assert_eq!(nominal_billing_year(None, &labeled), 2025);

        let unlabeled = session("Infantil B", "2025-09-01", "2026-06-30");
        assert_eq!(nominal_billing_year(None, &unlabeled), 2025);
    }

    #[test]
    fn missing_rule_is_rejected_not_defaulted() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-01");

        let err = generate(
            &enrollment,
            None,
            &session,
            None,
            &HashSet::new(),
            GenerationMode::ThroughSessionEnd,
        )
        .unwrap_err();
        assert!(matches!(err, BillingError::MissingPricingRule { .. }));
    }

    #[test]
    fn invalid_cycle_month_is_rejected() {
        let session = session("Curso 2025-2026", "2025-09-01", "2026-06-30");
        let enrollment = enrollment("2025-09-01");
        let rule = rule(100.0, 5);

        let err = generate(
            &enrollment,
            Some(&rule),
            &session,
            None,
            &HashSet::new(),
            GenerationMode::CurrentMonthOnly { year: 2025, month: 13 },
        )
        .unwrap_err();
        assert!(matches!(err, BillingError::InvalidPeriod(_)));
    }

    #[test]
    fn month_span_counts_inclusive_windows() {
        let sep: NaiveDate = "2025-09-01".parse().unwrap();
        let jun: NaiveDate = "2026-06-01".parse().unwrap();
        assert_eq!(month_span(sep, jun), 10);
        assert_eq!(month_span(sep, sep), 1);
        assert_eq!(month_span(jun, sep), 0);
    }
}
