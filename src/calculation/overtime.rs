//! Overtime, night-shift and rest-day pay.
//!
//! Each [`OvertimeEntry`] is paid at the hourly rate times the multiplier for
//! its shift type. Hours over the daily or weekly cap are flagged with a
//! warning and still paid in full.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};
use rust_decimal::Decimal;

use crate::config::OvertimeRules;
use crate::models::{AuditStep, Earning, OvertimeCapScope, OvertimeEntry, ShiftType, Warning};
use crate::money::Money;

/// Multiplier for ordinary overtime (150%).
pub const DEFAULT_STANDARD_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Multiplier for night-shift hours (125%).
pub const DEFAULT_NIGHT_SHIFT_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Multiplier for rest-day and public-holiday work (200%).
pub const DEFAULT_REST_DAY_MULTIPLIER: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Multiplier for overtime worked at night (175%).
pub const DEFAULT_NIGHT_OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(175, 0, 0, false, 2);

/// Maximum overtime hours per day.
pub const DEFAULT_DAILY_OVERTIME_CAP: Decimal = Decimal::from_parts(4, 0, 0, false, 0);

/// Maximum overtime hours per ISO week.
pub const DEFAULT_WEEKLY_OVERTIME_CAP: Decimal = Decimal::from_parts(16, 0, 0, false, 0);

/// Returns the multiplier for a shift type.
pub fn overtime_multiplier(shift_type: ShiftType, rules: &OvertimeRules) -> Decimal {
    match shift_type {
        ShiftType::Standard => rules.standard_multiplier,
        ShiftType::NightShift => rules.night_shift_multiplier,
        ShiftType::RestDayOrHoliday => rules.rest_day_multiplier,
        ShiftType::NightOvertime => rules.night_overtime_multiplier,
    }
}

/// The result of an overtime pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OvertimePayResult {
    /// The earning line for the entry.
    pub earning: Earning,
    /// The multiplier applied.
    pub multiplier: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes pay for one overtime entry.
///
/// `amount = hours × hourly_rate × multiplier`, rounded once.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_overtime_pay;
/// use payroll_engine::config::OvertimeRules;
/// use payroll_engine::models::{OvertimeEntry, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entry = OvertimeEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     hours: Decimal::new(2, 0),
///     shift_type: ShiftType::Standard,
/// };
///
/// // 2 hours × $3.00 × 1.5 = $9.00
/// let result = compute_overtime_pay(&entry, Decimal::new(3, 0), &OvertimeRules::default(), 1);
/// assert_eq!(result.earning.amount.to_string(), "9.00");
/// ```
pub fn compute_overtime_pay(
    entry: &OvertimeEntry,
    hourly_rate: Decimal,
    rules: &OvertimeRules,
    step_number: u32,
) -> OvertimePayResult {
    let multiplier = overtime_multiplier(entry.shift_type, rules);
    let effective_rate = hourly_rate * multiplier;
    let amount = Money::new(entry.hours * effective_rate);

    let earning = Earning {
        earning_type: entry.shift_type.earning_type(),
        description: format!("Overtime {} ({})", entry.date, entry.shift_type.as_str()),
        quantity: Some(entry.hours),
        rate: Some(effective_rate.round_dp(4)),
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        legal_ref: rules.reference.clone(),
        input: serde_json::json!({
            "date": entry.date.to_string(),
            "hours": entry.hours.normalize().to_string(),
            "hourly_rate": hourly_rate.round_dp(4).normalize().to_string(),
            "shift_type": entry.shift_type.as_str()
        }),
        output: serde_json::json!({
            "multiplier": multiplier.normalize().to_string(),
            "amount": amount.to_string(),
            "earning_type": earning.earning_type.as_str()
        }),
        reasoning: format!(
            "{} hours × ${} × {} ({}) = ${}",
            entry.hours.normalize(),
            hourly_rate.round_dp(4).normalize(),
            multiplier.normalize(),
            entry.shift_type.as_str(),
            amount
        ),
    };

    OvertimePayResult {
        earning,
        multiplier,
        audit_step,
    }
}

fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Checks overtime entries against the daily and weekly caps.
///
/// Only shift types that count as overtime are summed. Weeks are ISO weeks,
/// identified by their Monday. Returns one warning per day and per week over
/// the cap, daily warnings first, each in date order.
///
/// ```
/// use payroll_engine::calculation::check_overtime_caps;
/// use payroll_engine::config::OvertimeRules;
/// use payroll_engine::models::{OvertimeEntry, ShiftType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let entries = vec![OvertimeEntry {
///     date: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
///     hours: Decimal::new(5, 0),
///     shift_type: ShiftType::Standard,
/// }];
///
/// let warnings = check_overtime_caps("emp_001", &entries, &OvertimeRules::default());
/// assert_eq!(warnings.len(), 1);
/// ```
pub fn check_overtime_caps(
    employee_id: &str,
    entries: &[OvertimeEntry],
    rules: &OvertimeRules,
) -> Vec<Warning> {
    let mut daily: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    let mut weekly: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

    for entry in entries
        .iter()
        .filter(|e| e.shift_type.counts_toward_overtime_cap())
    {
        *daily.entry(entry.date).or_default() += entry.hours;
        *weekly.entry(week_start(entry.date)).or_default() += entry.hours;
    }

    let over_cap = |scope: OvertimeCapScope, totals: BTreeMap<NaiveDate, Decimal>, cap: Decimal| {
        totals
            .into_iter()
            .filter(move |(_, hours)| *hours > cap)
            .map(move |(period_start, hours)| Warning::OvertimeCapExceeded {
                employee_id: employee_id.to_string(),
                scope,
                period_start,
                hours,
                cap,
            })
    };

    over_cap(OvertimeCapScope::Daily, daily, rules.daily_cap_hours)
        .chain(over_cap(OvertimeCapScope::Weekly, weekly, rules.weekly_cap_hours))
        .collect()
}
