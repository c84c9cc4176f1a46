//! 13th-month payment (Subsídio Anual).

use rust_decimal::Decimal;

use crate::models::{AuditStep, Earning, EarningType};
use crate::money::Money;

const MONTHS_PER_YEAR: u32 = 12;

/// The result of a 13th-month calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThirteenthMonthResult {
    /// Months counted after clamping to `0..=12`.
    pub months: u32,
    /// The earning line.
    pub earning: Earning,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Computes the 13th-month payment: `monthly_salary × months_worked ÷ 12`.
///
/// Months above 12 are treated as 12.
///
/// ```
/// use payroll_engine::calculation::compute_thirteenth_month;
/// use rust_decimal::Decimal;
///
/// let result = compute_thirteenth_month(7, Decimal::new(1000, 0), 1);
/// assert_eq!(result.earning.amount.to_string(), "583.33");
/// ```
pub fn compute_thirteenth_month(
    months_worked: u32,
    monthly_salary: Decimal,
    step_number: u32,
) -> ThirteenthMonthResult {
    let months = months_worked.min(MONTHS_PER_YEAR);
    let amount = Money::new(monthly_salary).pro_rata(Decimal::from(months), Decimal::from(MONTHS_PER_YEAR));

    let earning = Earning {
        earning_type: EarningType::ThirteenthMonth,
        description: format!("13th month ({}/12 months)", months),
        quantity: Some(Decimal::from(months)),
        rate: None,
        amount,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "thirteenth_month".to_string(),
        rule_name: "13th Month Payment".to_string(),
        legal_ref: "Labour Code (Law 4/2012), annual subsidy".to_string(),
        input: serde_json::json!({
            "months_worked": months_worked,
            "monthly_salary": monthly_salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "months": months,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "${} × {} ÷ 12 = ${}",
            monthly_salary.normalize(),
            months,
            amount
        ),
    };

    ThirteenthMonthResult {
        months,
        earning,
        audit_step,
    }
}
