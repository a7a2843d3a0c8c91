//! Batch Billing Runner
//!
//! Runs one billing cycle for a tenant across its active enrollments.
//! Enrollments are processed independently under a bounded concurrency
//! limit: one misconfigured course must not block billing for the rest
//! of the school, so per-enrollment errors are collected into the batch
//! summary and the run never aborts early.

use super::BillingError;
use super::schedule::{self, GenerationMode};
use crate::db::repository::charge::ChargeInsert;
use crate::db::repository::{RepoError, academic_session, charge, enrollment, school_class};
use crate::pricing;
use chrono::NaiveDate;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use shared::models::{AcademicSession, Enrollment};
use sqlx::SqlitePool;
use std::collections::{HashMap, HashSet};

/// One enrollment that could not be billed.
#[derive(Debug, Clone, Serialize)]
pub struct FailedEnrollment {
    pub enrollment_id: i64,
    pub reason: String,
}

/// Summary of one billing cycle run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchResult {
    pub generated_count: u32,
    pub skipped_count: u32,
    pub failed: Vec<FailedEnrollment>,
}

pub struct BatchBillingRunner {
    pool: SqlitePool,
    concurrency: usize,
}

impl BatchBillingRunner {
    pub fn new(pool: SqlitePool, concurrency: usize) -> Self {
        Self {
            pool,
            concurrency: concurrency.max(1),
        }
    }

    /// Run the billing cycle for every active enrollment of the tenant
    /// whose session covers the target month.
    ///
    /// Workers share no mutable state; the charge uniqueness index is
    /// the serialization point, and losing an insert race to another
    /// worker counts as a skip, not a failure.
    pub async fn run_cycle(
        &self,
        tenant_id: i64,
        target_year: i32,
        target_month: u32,
    ) -> Result<BatchResult, BillingError> {
        if NaiveDate::from_ymd_opt(target_year, target_month, 1).is_none() {
            return Err(BillingError::InvalidPeriod(format!(
                "{target_year}-{target_month:02}"
            )));
        }

        let sessions: HashMap<i64, AcademicSession> =
            academic_session::find_by_tenant(&self.pool, tenant_id)
                .await?
                .into_iter()
                .map(|s| (s.id, s))
                .collect();
        let enrollments = enrollment::find_active(&self.pool, tenant_id).await?;

        let mut result = BatchResult::default();
        let mut seen = HashSet::new();
        let mut eligible = Vec::new();
        for en in enrollments {
            let Some(session) = sessions.get(&en.session_id) else {
                result.failed.push(FailedEnrollment {
                    enrollment_id: en.id,
                    reason: format!("Academic session {} not found", en.session_id),
                });
                continue;
            };
            if !session.covers_month(target_year, target_month) {
                continue;
            }
            // Defensive re-check of the one-active-enrollment invariant:
            // only the first enrollment per (student, session) is billed.
            if !seen.insert((en.student_id, en.session_id)) {
                result.failed.push(FailedEnrollment {
                    enrollment_id: en.id,
                    reason: BillingError::DuplicateEnrollment {
                        student_id: en.student_id,
                        session_id: en.session_id,
                    }
                    .to_string(),
                });
                continue;
            }
            eligible.push((en, session.clone()));
        }

        let eligible_count = eligible.len();
        let outcomes: Vec<(i64, Result<(u32, u32), BillingError>)> = stream::iter(eligible)
            .map(|(en, session)| {
                let pool = self.pool.clone();
                async move {
                    let id = en.id;
                    let outcome =
                        process_enrollment(&pool, &en, &session, target_year, target_month).await;
                    (id, outcome)
                }
            })
            .buffer_unordered(self.concurrency)
            .collect()
            .await;

        for (enrollment_id, outcome) in outcomes {
            match outcome {
                Ok((generated, skipped)) => {
                    result.generated_count += generated;
                    result.skipped_count += skipped;
                }
                Err(e) => {
                    tracing::warn!(enrollment_id, error = %e, "Enrollment billing failed");
                    result.failed.push(FailedEnrollment {
                        enrollment_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            tenant_id,
            target_year,
            target_month,
            enrollments = eligible_count,
            generated = result.generated_count,
            skipped = result.skipped_count,
            failed = result.failed.len(),
            "Billing cycle finished"
        );
        Ok(result)
    }
}

/// Bill one enrollment for the cycle month. Errors are isolated by the
/// caller; they never abort the batch.
async fn process_enrollment(
    pool: &SqlitePool,
    enrollment: &Enrollment,
    session: &AcademicSession,
    target_year: i32,
    target_month: u32,
) -> Result<(u32, u32), BillingError> {
    let class = school_class::find_by_id(pool, enrollment.tenant_id, enrollment.class_id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Class {} not found", enrollment.class_id)))?;

    let billing_year = schedule::nominal_billing_year(class.academic_year, session);
    let rule = pricing::resolve(
        pool,
        enrollment.tenant_id,
        billing_year,
        Some(class.course_id),
        Some(enrollment.class_id),
    )
    .await?
    .ok_or(BillingError::MissingPricingRule {
        tenant_id: enrollment.tenant_id,
        academic_year: billing_year,
    })?;

    let existing =
        charge::existing_periods(pool, enrollment.tenant_id, enrollment.student_id).await?;
    let mode = GenerationMode::CurrentMonthOnly {
        year: target_year,
        month: target_month,
    };
    let charges = schedule::generate(
        enrollment,
        Some(&rule),
        session,
        class.academic_year,
        &existing,
        mode,
    )?;

    // Periods filtered out by the idempotency guard count as skipped
    let span = schedule::month_span(
        schedule::start_cursor(enrollment, session),
        schedule::end_boundary(session, mode)?,
    );
    let mut skipped = span.saturating_sub(charges.len() as u32);

    let mut generated = 0u32;
    for data in &charges {
        match charge::insert_if_absent(pool, data).await? {
            ChargeInsert::Inserted(_) => generated += 1,
            // Another worker or a prior run won the race — benign
            ChargeInsert::AlreadyExists => skipped += 1,
        }
    }

    tracing::debug!(
        enrollment_id = enrollment.id,
        student_id = enrollment.student_id,
        generated,
        skipped,
        "Enrollment billed"
    );
    Ok((generated, skipped))
}
