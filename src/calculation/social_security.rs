//! Social security (INSS) contribution calculation.
//!
//! Contributions are levied on the contributive base: gross pay minus the
//! earning types the social-security law excludes. The employee and employer
//! shares are each rounded to cents independently.

use rust_decimal::Decimal;

use crate::config::SocialSecurityRules;
use crate::models::{AuditStep, Earning, EarningType};
use crate::money::Money;

/// Statutory employee contribution rate (4%).
pub const DEFAULT_EMPLOYEE_SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(4, 0, 0, false, 2);

/// Statutory employer contribution rate (6%).
pub const DEFAULT_EMPLOYER_SOCIAL_SECURITY_RATE: Decimal = Decimal::from_parts(6, 0, 0, false, 2);

/// Earning types that do not count toward the contributive base.
pub const CONTRIBUTIVE_BASE_EXCLUSIONS: [EarningType; 11] = [
    EarningType::Overtime,
    EarningType::Bonus,
    EarningType::Commission,
    EarningType::PerDiem,
    EarningType::FoodAllowance,
    EarningType::TransportAllowance,
    EarningType::HousingAllowance,
    EarningType::Gratuity,
    EarningType::ProfitSharing,
    EarningType::Reimbursement,
    EarningType::RepresentationExpenses,
];

/// Returns true if earnings of this type are excluded from the contributive base.
pub fn is_excluded_from_contributive_base(earning_type: EarningType) -> bool {
    CONTRIBUTIVE_BASE_EXCLUSIONS.contains(&earning_type)
}

/// Sums the earnings that count toward the contributive base.
///
/// ```
/// use payroll_engine::calculation::contributive_base;
/// use payroll_engine::models::{Earning, EarningType};
/// use payroll_engine::money::Money;
///
/// let line = |earning_type, cents| Earning {
///     earning_type,
///     description: String::new(),
///     quantity: None,
///     rate: None,
///     amount: Money::from_cents(cents),
/// };
///
/// let earnings = vec![
///     line(EarningType::Regular, 80000),
///     line(EarningType::FoodAllowance, 5000),
/// ];
/// assert_eq!(contributive_base(&earnings), Money::from_cents(80000));
/// ```
pub fn contributive_base(earnings: &[Earning]) -> Money {
    earnings
        .iter()
        .filter(|e| !is_excluded_from_contributive_base(e.earning_type))
        .map(|e| e.amount)
        .sum()
}

/// The result of a social security calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialSecurityResult {
    /// Base the rates were applied to.
    pub contributive_base: Money,
    /// Employee share, withheld from pay.
    pub employee_contribution: Money,
    /// Employer share, paid on top of gross pay.
    pub employer_contribution: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the employee and employer INSS contributions on a contributive base.
///
/// A negative base contributes nothing.
///
/// # Arguments
///
/// * `contributive_base` - The base from [`contributive_base`]
/// * `rules` - Employee and employer rates
/// * `step_number` - The step number for audit trail sequencing
pub fn compute_social_security(
    contributive_base: Money,
    rules: &SocialSecurityRules,
    step_number: u32,
) -> SocialSecurityResult {
    let base = contributive_base.non_negative();
    let employee_contribution = base.multiply(rules.employee_rate);
    let employer_contribution = base.multiply(rules.employer_rate);

    let audit_step = AuditStep {
        step_number,
        rule_id: "social_security".to_string(),
        rule_name: "Social Security Contributions".to_string(),
        legal_ref: rules.reference.clone(),
        input: serde_json::json!({
            "contributive_base": base.to_string(),
            "employee_rate": rules.employee_rate.normalize().to_string(),
            "employer_rate": rules.employer_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "employee_contribution": employee_contribution.to_string(),
            "employer_contribution": employer_contribution.to_string()
        }),
        reasoning: format!(
            "Contributive base ${}: employee {}% = ${}, employer {}% = ${}",
            base,
            (rules.employee_rate * Decimal::ONE_HUNDRED).normalize(),
            employee_contribution,
            (rules.employer_rate * Decimal::ONE_HUNDRED).normalize(),
            employer_contribution
        ),
    };

    SocialSecurityResult {
        contributive_base: base,
        employee_contribution,
        employer_contribution,
        audit_step,
    }
}
