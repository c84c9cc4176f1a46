//! Withholding income tax (WIT) calculation.
//!
//! WIT is a flat rate on monthly wage income. Residents are taxed only on the
//! portion of income above the resident threshold; non-residents are taxed from
//! the first unit.

use rust_decimal::Decimal;

use crate::config::WithholdingTaxRules;
use crate::models::{AuditStep, Residency};
use crate::money::Money;

/// Statutory WIT rate (10%).
pub const DEFAULT_WITHHOLDING_TAX_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Statutory monthly resident threshold (500.00).
pub const DEFAULT_RESIDENT_THRESHOLD: Decimal = Decimal::from_parts(500, 0, 0, false, 0);

/// The result of a withholding tax calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithholdingTaxResult {
    /// Threshold applied for the employee's residency.
    pub threshold: Money,
    /// Income above the threshold.
    pub taxable_excess: Money,
    /// Tax withheld.
    pub tax: Money,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes withholding income tax on a month's gross income.
///
/// # Arguments
///
/// * `gross_income` - Monthly gross income subject to WIT
/// * `residency` - The employee's tax residency
/// * `rules` - The WIT rate and thresholds
/// * `step_number` - The step number for audit trail sequencing
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::compute_withholding_tax;
/// use payroll_engine::config::WithholdingTaxRules;
/// use payroll_engine::models::Residency;
/// use payroll_engine::money::Money;
///
/// let rules = WithholdingTaxRules::default();
///
/// let resident = compute_withholding_tax(Money::from_cents(60000), Residency::Resident, &rules, 1);
/// assert_eq!(resident.tax, Money::from_cents(1000));
///
/// let non_resident = compute_withholding_tax(Money::from_cents(20000), Residency::NonResident, &rules, 1);
/// assert_eq!(non_resident.tax, Money::from_cents(2000));
/// ```
pub fn compute_withholding_tax(
    gross_income: Money,
    residency: Residency,
    rules: &WithholdingTaxRules,
    step_number: u32,
) -> WithholdingTaxResult {
    let threshold = Money::new(match residency {
        Residency::Resident => rules.resident_threshold,
        Residency::NonResident => rules.non_resident_threshold,
    });

    let taxable_excess = (gross_income - threshold).non_negative();
    let tax = taxable_excess.multiply(rules.rate);

    let reasoning = if taxable_excess.is_zero() {
        format!(
            "Gross income ${} is at or below the {} threshold of ${}, no tax withheld",
            gross_income,
            residency.as_str(),
            threshold
        )
    } else {
        format!(
            "{}% of ${} above the {} threshold of ${} = ${}",
            (rules.rate * Decimal::ONE_HUNDRED).normalize(),
            taxable_excess,
            residency.as_str(),
            threshold,
            tax
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Withholding Income Tax".to_string(),
        legal_ref: rules.reference.clone(),
        input: serde_json::json!({
            "gross_income": gross_income.to_string(),
            "residency": residency.as_str(),
            "rate": rules.rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "threshold": threshold.to_string(),
            "taxable_excess": taxable_excess.to_string(),
            "tax": tax.to_string()
        }),
        reasoning,
    };

    WithholdingTaxResult {
        threshold,
        taxable_excess,
        tax,
        audit_step,
    }
}
