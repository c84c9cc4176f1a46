//! Severance pay on termination.

use rust_decimal::Decimal;

use crate::config::{SalaryRules, SeveranceRules};
use crate::models::AuditStep;
use crate::money::Money;

use super::daily_rate;

/// Days of pay per full year of service.
pub const DEFAULT_SEVERANCE_DAYS_PER_YEAR: Decimal = Decimal::from_parts(30, 0, 0, false, 0);

/// Service below this many months earns no severance.
pub const MINIMUM_SEVERANCE_SERVICE_MONTHS: u32 = 3;

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// The result of a severance calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeveranceResult {
    /// Whether the minimum service requirement is met.
    pub eligible: bool,
    /// Completed years of service counted.
    pub full_years: Decimal,
    /// Severance payable.
    pub amount: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes severance: `days_per_year` days' pay per full year of service.
///
/// Service shorter than the minimum pays nothing. Partial years are not
/// counted.
///
/// # Arguments
///
/// * `years_of_service` - Length of service in (fractional) years
/// * `monthly_salary` - The monthly salary at termination
/// * `rules` - Severance days and minimum service
/// * `salary_rules` - Used to derive the daily rate
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_severance;
/// use payroll_engine::config::{SalaryRules, SeveranceRules};
/// use rust_decimal::Decimal;
///
/// // 4.5 years at $900/month: 4 × 30 × $30 = $3,600
/// let result = compute_severance(
///     Decimal::new(45, 1),
///     Decimal::new(900, 0),
///     &SeveranceRules::default(),
///     &SalaryRules::default(),
///     1,
/// );
/// assert_eq!(result.amount.to_string(), "3600.00");
/// ```
pub fn compute_severance(
    years_of_service: Decimal,
    monthly_salary: Decimal,
    rules: &SeveranceRules,
    salary_rules: &SalaryRules,
    step_number: u32,
) -> SeveranceResult {
    let months = years_of_service * MONTHS_PER_YEAR;
    let eligible = months >= Decimal::from(rules.minimum_service_months);
    let daily = daily_rate(monthly_salary, salary_rules);

    let (full_years, amount) = if eligible {
        let full_years = years_of_service.floor();
        (full_years, Money::new(full_years * rules.days_per_year * daily))
    } else {
        (Decimal::ZERO, Money::ZERO)
    };

    let reasoning = if eligible {
        format!(
            "{} full year(s) × {} days × ${} daily rate = ${}",
            full_years.normalize(),
            rules.days_per_year.normalize(),
            daily.round_dp(4).normalize(),
            amount
        )
    } else {
        format!(
            "Service of {} year(s) is below the {}-month minimum, no severance",
            years_of_service.round_dp(2).normalize(),
            rules.minimum_service_months
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "severance".to_string(),
        rule_name: "Severance Pay".to_string(),
        legal_ref: rules.reference.clone(),
        input: serde_json::json!({
            "years_of_service": years_of_service.normalize().to_string(),
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "eligible": eligible,
            "full_years": full_years.normalize().to_string(),
            "amount": amount.to_string()
        }),
        reasoning,
    };

    SeveranceResult {
        eligible,
        full_years,
        amount,
        audit_step,
    }
}
