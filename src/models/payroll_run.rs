//! Payroll run descriptor and lifecycle.
//!
//! A [`PayrollRun`] defines the period being paid and the pay date. Its
//! [`RunStatus`] only moves forward: `draft → processing → approved → paid`,
//! with `cancelled` reachable from any state that is not `paid`.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};

/// Lifecycle status of a payroll run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Being prepared; records may be rebuilt freely.
    Draft,
    /// Records are being computed and reviewed.
    Processing,
    /// Approved for payment; records are immutable inputs to disbursement.
    Approved,
    /// Paid out.
    Paid,
    /// Abandoned.
    Cancelled,
}

impl RunStatus {
    /// Returns the snake_case name of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Draft => "draft",
            RunStatus::Processing => "processing",
            RunStatus::Approved => "approved",
            RunStatus::Paid => "paid",
            RunStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true if moving from `self` to `next` is a legal transition.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::RunStatus;
    ///
    /// assert!(RunStatus::Draft.can_transition_to(RunStatus::Processing));
    /// assert!(RunStatus::Approved.can_transition_to(RunStatus::Cancelled));
    /// assert!(!RunStatus::Paid.can_transition_to(RunStatus::Cancelled));
    /// assert!(!RunStatus::Approved.can_transition_to(RunStatus::Draft));
    /// ```
    pub fn can_transition_to(&self, next: RunStatus) -> bool {
        matches!(
            (self, next),
            (RunStatus::Draft, RunStatus::Processing)
                | (RunStatus::Processing, RunStatus::Approved)
                | (RunStatus::Approved, RunStatus::Paid)
                | (RunStatus::Draft, RunStatus::Cancelled)
                | (RunStatus::Processing, RunStatus::Cancelled)
                | (RunStatus::Approved, RunStatus::Cancelled)
        )
    }

    /// Returns true if bank files may be generated for a run in this status.
    pub fn is_disbursable(&self) -> bool {
        matches!(self, RunStatus::Approved | RunStatus::Paid)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payroll run: one pay period for a set of employees.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollRun, RunStatus};
/// use chrono::NaiveDate;
/// use uuid::Uuid;
///
/// let mut run = PayrollRun::new(
///     Uuid::nil(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// assert_eq!(run.period_label(), "2026-01");
/// run.transition(RunStatus::Processing).unwrap();
/// assert!(run.transition(RunStatus::Paid).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier of the run.
    pub id: Uuid,
    /// First day of the pay period (inclusive).
    pub period_start: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub period_end: NaiveDate,
    /// The date employees are paid.
    pub pay_date: NaiveDate,
    /// Lifecycle status.
    pub status: RunStatus,
}

impl PayrollRun {
    /// Creates a new run in `draft` status.
    pub fn new(id: Uuid, period_start: NaiveDate, period_end: NaiveDate, pay_date: NaiveDate) -> Self {
        Self {
            id,
            period_start,
            period_end,
            pay_date,
            status: RunStatus::Draft,
        }
    }

    /// Creates a new `draft` run with a freshly generated id.
    ///
    /// Record ids derive from the run id, so a rebuilt run must reuse the
    /// original run rather than calling this again.
    pub fn draft(period_start: NaiveDate, period_end: NaiveDate, pay_date: NaiveDate) -> Self {
        Self::new(Uuid::new_v4(), period_start, period_end, pay_date)
    }

    /// Moves the run to `next`, rejecting transitions that are not allowed.
    pub fn transition(&mut self, next: RunStatus) -> EngineResult<()> {
        if !self.status.can_transition_to(next) {
            return Err(EngineError::InvalidRunTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }

    /// Fails unless the run is approved or paid.
    pub fn ensure_disbursable(&self) -> EngineResult<()> {
        if self.status.is_disbursable() {
            Ok(())
        } else {
            Err(EngineError::RunNotDisbursable {
                run_id: self.id,
                status: self.status,
            })
        }
    }

    /// Returns the period label used in references and file names (`YYYY-MM`).
    pub fn period_label(&self) -> String {
        format!(
            "{:04}-{:02}",
            self.period_start.year(),
            self.period_start.month()
        )
    }

    /// Returns the number of calendar days in the period (inclusive).
    pub fn period_days(&self) -> i64 {
        (self.period_end - self.period_start).num_days() + 1
    }

    /// Checks if a given date falls within this pay period (inclusive).
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.period_start && date <= self.period_end
    }
}
