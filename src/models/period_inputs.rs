//! Attendance, leave and ad-hoc pay facts for one employee in one run.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{DeductionType, EarningType};
use crate::money::Money;

/// The circumstances under which extra hours were worked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftType {
    /// Ordinary overtime on a working day.
    Standard,
    /// Night-shift hours inside the normal schedule.
    NightShift,
    /// Work on a weekly rest day or public holiday.
    RestDayOrHoliday,
    /// Overtime worked at night.
    NightOvertime,
}

impl ShiftType {
    /// Returns the snake_case name used in audit payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShiftType::Standard => "standard",
            ShiftType::NightShift => "night_shift",
            ShiftType::RestDayOrHoliday => "rest_day_or_holiday",
            ShiftType::NightOvertime => "night_overtime",
        }
    }

    /// The earning type the hours are paid under.
    pub fn earning_type(&self) -> EarningType {
        match self {
            ShiftType::Standard | ShiftType::NightOvertime => EarningType::Overtime,
            ShiftType::NightShift => EarningType::NightShift,
            ShiftType::RestDayOrHoliday => EarningType::Holiday,
        }
    }

    /// Returns true if the hours count toward the daily/weekly overtime caps.
    ///
    /// Night-shift hours inside the normal schedule are not overtime.
    pub fn counts_toward_overtime_cap(&self) -> bool {
        !matches!(self, ShiftType::NightShift)
    }
}

/// Extra hours worked on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeEntry {
    /// The date the hours were worked.
    pub date: NaiveDate,
    /// Number of hours.
    pub hours: Decimal,
    /// Circumstances of the work, which determine the multiplier.
    pub shift_type: ShiftType,
}

/// An earning supplied by the caller (bonus, allowance, reimbursement…).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningInput {
    /// The kind of earning.
    pub earning_type: EarningType,
    /// Description printed on the payslip.
    #[serde(default)]
    pub description: String,
    /// Amount; `null` or missing is zero.
    #[serde(default, deserialize_with = "crate::money::null_as_zero")]
    pub amount: Money,
}

/// A deduction supplied by the caller (insurance, loan repayment…).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionInput {
    /// The kind of deduction.
    pub deduction_type: DeductionType,
    /// Description printed on the payslip.
    #[serde(default)]
    pub description: String,
    /// Amount; `null` or missing is zero.
    #[serde(default, deserialize_with = "crate::money::null_as_zero")]
    pub amount: Money,
}

/// Everything about the period that affects one employee's record.
///
/// All fields default to "nothing happened", so `PeriodInputs::default()` pays
/// the plain salary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PeriodInputs {
    /// Overtime, night-shift and rest-day hours.
    pub overtime: Vec<OvertimeEntry>,
    /// Days of unpaid absence.
    pub unpaid_absence_days: Decimal,
    /// Sick days taken in this period.
    pub sick_days_taken: u32,
    /// Sick days already used earlier in the leave year.
    pub sick_days_used_before: u32,
    /// Additional earnings.
    pub earnings: Vec<EarningInput>,
    /// Additional deductions.
    pub deductions: Vec<DeductionInput>,
    /// Months worked in the year, when the 13th-month payment is due this run.
    pub thirteenth_month_months: Option<u32>,
}
