//! Sick leave pay bands.
//!
//! Within a leave year the first sick days are paid in full, the next band at
//! a reduced rate, and anything beyond that is unpaid. The salary is paid as
//! normal and the unpaid fraction is withheld as an absence deduction.

use rust_decimal::Decimal;

use crate::config::SickLeaveRules;
use crate::models::AuditStep;
use crate::money::Money;

/// Sick days per year paid in full.
pub const DEFAULT_SICK_FULL_PAY_DAYS: u32 = 6;

/// Sick days per year paid at the reduced rate.
pub const DEFAULT_SICK_HALF_PAY_DAYS: u32 = 6;

/// Pay rate for the reduced band (50%).
pub const DEFAULT_SICK_HALF_PAY_RATE: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Returns the pay rate for a sick day.
///
/// `day_number` is 1-based within the current absence; the ordinal day in the
/// leave year is `days_already_used + day_number`.
///
/// ```
/// use payroll_engine::calculation::compute_sick_pay_rate;
/// use payroll_engine::config::SickLeaveRules;
/// use rust_decimal::Decimal;
///
/// let rules = SickLeaveRules::default();
/// assert_eq!(compute_sick_pay_rate(1, 5, &rules), Decimal::ONE);
/// assert_eq!(compute_sick_pay_rate(2, 5, &rules), Decimal::new(5, 1));
/// assert_eq!(compute_sick_pay_rate(1, 12, &rules), Decimal::ZERO);
/// ```
pub fn compute_sick_pay_rate(day_number: u32, days_already_used: u32, rules: &SickLeaveRules) -> Decimal {
    let ordinal = days_already_used.saturating_add(day_number);
    if ordinal <= rules.full_pay_days {
        Decimal::ONE
    } else if ordinal <= rules.full_pay_days.saturating_add(rules.half_pay_days) {
        rules.half_pay_rate
    } else {
        Decimal::ZERO
    }
}

/// Sick days taken in a period, split by pay band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SickDayBands {
    /// Days paid in full.
    pub full_pay: u32,
    /// Days paid at the reduced rate.
    pub reduced_pay: u32,
    /// Days not paid.
    pub unpaid: u32,
}

impl SickDayBands {
    /// Splits `days_taken` across the bands, counting from the ordinal day
    /// `days_already_used + 1` of the leave year.
    pub fn split(days_taken: u32, days_already_used: u32, rules: &SickLeaveRules) -> Self {
        let first = u64::from(days_already_used);
        let last = first + u64::from(days_taken);
        let full_limit = u64::from(rules.full_pay_days);
        let reduced_limit = full_limit + u64::from(rules.half_pay_days);

        // Days whose ordinal falls in (lo, hi]
        let overlap = |lo: u64, hi: u64| last.min(hi).saturating_sub(first.max(lo));
        let full_pay = overlap(0, full_limit);
        let reduced_pay = overlap(full_limit, reduced_limit);
        let unpaid = u64::from(days_taken) - full_pay - reduced_pay;

        // Each band is at most days_taken, which is a u32
        Self {
            full_pay: full_pay as u32,
            reduced_pay: reduced_pay as u32,
            unpaid: unpaid as u32,
        }
    }

    /// Unpaid day-equivalents: the reduced band's unpaid share plus the
    /// unpaid band.
    pub fn unpaid_day_equivalents(&self, rules: &SickLeaveRules) -> Decimal {
        Decimal::from(self.reduced_pay) * (Decimal::ONE - rules.half_pay_rate)
            + Decimal::from(self.unpaid)
    }
}

/// The result of a sick leave calculation for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SickLeaveResult {
    /// Days taken this period.
    pub days_taken: u32,
    /// How the days fall across the pay bands.
    pub bands: SickDayBands,
    /// Unpaid day-equivalents.
    pub unpaid_days: Decimal,
    /// Amount withheld for the unpaid portion.
    pub deduction: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the unpaid portion of the sick days taken in a period.
///
/// # Arguments
///
/// * `days_taken` - Sick days taken this period
/// * `days_already_used` - Sick days used earlier in the leave year
/// * `daily_rate` - The employee's daily rate at full precision
/// * `rules` - The sick pay bands
/// * `step_number` - The step number for audit trail sequencing
pub fn compute_sick_leave(
    days_taken: u32,
    days_already_used: u32,
    daily_rate: Decimal,
    rules: &SickLeaveRules,
    step_number: u32,
) -> SickLeaveResult {
    let bands = SickDayBands::split(days_taken, days_already_used, rules);
    let unpaid_days = bands.unpaid_day_equivalents(rules);
    let deduction = Money::new(daily_rate * unpaid_days);

    let audit_step = AuditStep {
        step_number,
        rule_id: "sick_leave".to_string(),
        rule_name: "Sick Leave Pay".to_string(),
        legal_ref: rules.reference.clone(),
        input: serde_json::json!({
            "days_taken": days_taken,
            "days_already_used": days_already_used,
            "daily_rate": daily_rate.round_dp(4).normalize().to_string()
        }),
        output: serde_json::json!({
            "full_pay_days": bands.full_pay,
            "reduced_pay_days": bands.reduced_pay,
            "reduced_pay_rate": rules.half_pay_rate.normalize().to_string(),
            "unpaid_band_days": bands.unpaid,
            "unpaid_days": unpaid_days.normalize().to_string(),
            "deduction": deduction.to_string()
        }),
        reasoning: format!(
            "{} sick day(s) after {} already used ({} full, {} reduced, {} unpaid): \
             {} unpaid day-equivalent(s) × ${} = ${}",
            days_taken,
            days_already_used,
            bands.full_pay,
            bands.reduced_pay,
            bands.unpaid,
            unpaid_days.normalize(),
            daily_rate.round_dp(4).normalize(),
            deduction
        ),
    };

    SickLeaveResult {
        days_taken,
        bands,
        unpaid_days,
        deduction,
        audit_step,
    }
}
