//! Rate derivation and regular salary.
//!
//! Hourly and daily rates are derived from the monthly salary and kept at full
//! decimal precision; only the amounts computed from them are rounded.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::SalaryRules;
use crate::models::{AuditStep, Earning, EarningType};
use crate::money::Money;

/// Days per month used for the daily rate.
pub const DEFAULT_DAYS_PER_MONTH: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Normal working hours per week.
pub const DEFAULT_STANDARD_WEEKLY_HOURS: Decimal = Decimal::from_parts(44, 0, 0, false, 0);

/// Weeks per year.
pub const DEFAULT_WEEKS_PER_YEAR: Decimal = Decimal::from_parts(52, 0, 0, false, 0);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Returns the hourly rate: monthly × 12 ÷ (weeks per year × weekly hours).
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use payroll_engine::config::SalaryRules;
/// use rust_decimal::Decimal;
///
/// // 572 × 12 ÷ (52 × 44) = 3
/// assert_eq!(hourly_rate(Decimal::new(572, 0), &SalaryRules::default()), Decimal::new(3, 0));
/// ```
pub fn hourly_rate(monthly_salary: Decimal, rules: &SalaryRules) -> Decimal {
    let annual_hours = rules.weeks_per_year * rules.standard_weekly_hours;
    if annual_hours.is_zero() {
        return Decimal::ZERO;
    }
    monthly_salary * MONTHS_PER_YEAR / annual_hours
}

/// Returns the daily rate: monthly ÷ days per month.
pub fn daily_rate(monthly_salary: Decimal, rules: &SalaryRules) -> Decimal {
    if rules.days_per_month.is_zero() {
        return Decimal::ZERO;
    }
    monthly_salary / rules.days_per_month
}

/// The result of the regular salary calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegularSalaryResult {
    /// The regular earning line.
    pub earning: Earning,
    /// Days of the period the employee was employed.
    pub employed_days: i64,
    /// Calendar days in the period.
    pub period_days: i64,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the regular salary for a period, pro-rated by the calendar days
/// the employee was employed within it.
///
/// A full period pays exactly the monthly salary; a partial period pays
/// `monthly × employed_days ÷ period_days`, rounded once.
///
/// # Arguments
///
/// * `monthly_salary` - The monthly salary
/// * `hire_date` - First day of employment
/// * `termination_date` - Last day of employment, if any
/// * `period_start` - First day of the pay period
/// * `period_end` - Last day of the pay period
/// * `step_number` - The step number for audit trail sequencing
pub fn compute_regular_salary(
    monthly_salary: Decimal,
    hire_date: NaiveDate,
    termination_date: Option<NaiveDate>,
    period_start: NaiveDate,
    period_end: NaiveDate,
    step_number: u32,
) -> RegularSalaryResult {
    let period_days = (period_end - period_start).num_days() + 1;

    let employed_from = hire_date.max(period_start);
    let employed_to = termination_date.map_or(period_end, |end| end.min(period_end));
    let employed_days = ((employed_to - employed_from).num_days() + 1).clamp(0, period_days);

    let salary = Money::new(monthly_salary);
    let prorated = employed_days < period_days;
    let amount = if prorated {
        salary.pro_rata(Decimal::from(employed_days), Decimal::from(period_days))
    } else {
        salary
    };

    let (description, reasoning) = if prorated {
        (
            format!("Base salary ({}/{} days)", employed_days, period_days),
            format!(
                "Employed {} of {} days ({} to {}): ${} × {} ÷ {} = ${}",
                employed_days,
                period_days,
                employed_from,
                employed_to,
                salary,
                employed_days,
                period_days,
                amount
            ),
        )
    } else {
        (
            "Base salary".to_string(),
            format!("Employed for the full period: monthly salary ${}", amount),
        )
    };

    let earning = Earning {
        earning_type: EarningType::Regular,
        description,
        quantity: prorated.then(|| Decimal::from(employed_days)),
        rate: None,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "regular_salary".to_string(),
        rule_name: "Regular Salary".to_string(),
        legal_ref: "Labour Code (Law 4/2012), remuneration".to_string(),
        input: serde_json::json!({
            "monthly_salary": salary.to_string(),
            "period_start": period_start.to_string(),
            "period_end": period_end.to_string(),
            "hire_date": hire_date.to_string(),
            "termination_date": termination_date.map(|d| d.to_string())
        }),
        output: serde_json::json!({
            "employed_days": employed_days,
            "period_days": period_days,
            "amount": amount.to_string()
        }),
        reasoning,
    };

    RegularSalaryResult {
        earning,
        employed_days,
        period_days,
        audit_step,
    }
}

/// The result of an unpaid absence calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpaidAbsenceResult {
    /// Amount withheld.
    pub deduction: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the deduction for unpaid absence: `days × daily_rate`, rounded once.
pub fn compute_unpaid_absence(days: Decimal, daily_rate: Decimal, step_number: u32) -> UnpaidAbsenceResult {
    let deduction = Money::new(days * daily_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "unpaid_absence".to_string(),
        rule_name: "Unpaid Absence".to_string(),
        legal_ref: "Labour Code (Law 4/2012), remuneration".to_string(),
        input: serde_json::json!({
            "days": days.normalize().to_string(),
            "daily_rate": daily_rate.round_dp(4).normalize().to_string()
        }),
        output: serde_json::json!({
            "deduction": deduction.to_string()
        }),
        reasoning: format!(
            "{} unpaid day(s) × ${} = ${}",
            days.normalize(),
            daily_rate.round_dp(4).normalize(),
            deduction
        ),
    };

    UnpaidAbsenceResult {
        deduction,
        audit_step,
    }
}
