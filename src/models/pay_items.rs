//! Earnings, deductions and employer costs that make up a payroll record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// The kind of an earning line.
///
/// The set mirrors the earning categories of the Timor-Leste payroll; which of
/// them count toward the social-security contributive base is decided by
/// [`is_excluded_from_contributive_base`](crate::calculation::is_excluded_from_contributive_base).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarningType {
    /// Base salary for the period.
    Regular,
    /// Overtime hours.
    Overtime,
    /// Night-shift hours.
    NightShift,
    /// Hours worked on a rest day or public holiday.
    Holiday,
    /// Discretionary bonus.
    Bonus,
    /// Sales commission.
    Commission,
    /// Per-diem travel payment.
    PerDiem,
    /// Food/meal allowance.
    FoodAllowance,
    /// Transport allowance.
    TransportAllowance,
    /// Housing allowance.
    HousingAllowance,
    /// Any other regular allowance.
    OtherAllowance,
    /// Gratuity or tip.
    Gratuity,
    /// Profit-sharing payment.
    ProfitSharing,
    /// 13th-month annual payment (Subsídio Anual).
    ThirteenthMonth,
    /// Reimbursement of expenses.
    Reimbursement,
    /// Representation expenses.
    RepresentationExpenses,
}

impl EarningType {
    /// Returns the snake_case name used in audit payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            EarningType::Regular => "regular",
            EarningType::Overtime => "overtime",
            EarningType::NightShift => "night_shift",
            EarningType::Holiday => "holiday",
            EarningType::Bonus => "bonus",
            EarningType::Commission => "commission",
            EarningType::PerDiem => "per_diem",
            EarningType::FoodAllowance => "food_allowance",
            EarningType::TransportAllowance => "transport_allowance",
            EarningType::HousingAllowance => "housing_allowance",
            EarningType::OtherAllowance => "other_allowance",
            EarningType::Gratuity => "gratuity",
            EarningType::ProfitSharing => "profit_sharing",
            EarningType::ThirteenthMonth => "thirteenth_month",
            EarningType::Reimbursement => "reimbursement",
            EarningType::RepresentationExpenses => "representation_expenses",
        }
    }
}

/// The kind of a deduction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionType {
    /// Withholding income tax (WIT).
    IncomeTax,
    /// Employee share of social security (INSS).
    SocialSecurity,
    /// Insurance premium.
    Insurance,
    /// Loan or salary advance repayment.
    LoanRepayment,
    /// Court-ordered garnishment.
    CourtOrder,
    /// Unpaid absence or unpaid sick leave.
    Absence,
    /// Anything else.
    Other,
}

impl DeductionType {
    /// Returns the snake_case name used in audit payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            DeductionType::IncomeTax => "income_tax",
            DeductionType::SocialSecurity => "social_security",
            DeductionType::Insurance => "insurance",
            DeductionType::LoanRepayment => "loan_repayment",
            DeductionType::CourtOrder => "court_order",
            DeductionType::Absence => "absence",
            DeductionType::Other => "other",
        }
    }
}

/// The kind of an employer-side cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerCostType {
    /// Employer share of social security (INSS).
    SocialSecurity,
}

/// A single earning line on a payroll record.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{Earning, EarningType};
/// use payroll_engine::money::Money;
/// use rust_decimal::Decimal;
///
/// let earning = Earning {
///     earning_type: EarningType::Overtime,
///     description: "Overtime 2026-01-14 (standard)".to_string(),
///     quantity: Some(Decimal::new(2, 0)),
///     rate: Some(Decimal::new(4725, 3)),
///     amount: Money::new(Decimal::new(945, 2)),
/// };
/// assert_eq!(earning.amount.to_string(), "9.45");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Earning {
    /// The kind of earning.
    pub earning_type: EarningType,
    /// Human-readable description.
    pub description: String,
    /// Units paid (days, hours), when the line is unit-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<Decimal>,
    /// Rate per unit, when the line is unit-based.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Amount paid.
    pub amount: Money,
}

/// A single deduction line on a payroll record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deduction {
    /// The kind of deduction.
    pub deduction_type: DeductionType,
    /// Human-readable description.
    pub description: String,
    /// Amount withheld.
    pub amount: Money,
}

/// A cost borne by the employer on top of gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployerCost {
    /// The kind of cost.
    pub cost_type: EmployerCostType,
    /// Human-readable description.
    pub description: String,
    /// Amount payable by the employer.
    pub amount: Money,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_earning_type_serialization() {
        assert_eq!(
            serde_json::to_string(&EarningType::ThirteenthMonth).unwrap(),
            "\"thirteenth_month\""
        );
        let parsed: EarningType = serde_json::from_str("\"food_allowance\"").unwrap();
        assert_eq!(parsed, EarningType::FoodAllowance);
    }

    #[test]
    fn test_as_str_matches_serde_names() {
        for earning_type in [
            EarningType::Regular,
            EarningType::PerDiem,
            EarningType::RepresentationExpenses,
        ] {
            let json = serde_json::to_string(&earning_type).unwrap();
            assert_eq!(json, format!("\"{}\"", earning_type.as_str()));
        }
        for deduction_type in [DeductionType::IncomeTax, DeductionType::CourtOrder] {
            let json = serde_json::to_string(&deduction_type).unwrap();
            assert_eq!(json, format!("\"{}\"", deduction_type.as_str()));
        }
    }

    #[test]
    fn test_unit_fields_skipped_when_absent() {
        let earning = Earning {
            earning_type: EarningType::Bonus,
            description: "Performance bonus".to_string(),
            quantity: None,
            rate: None,
            amount: Money::from_cents(5000),
        };
        let json = serde_json::to_string(&earning).unwrap();
        assert!(!json.contains("quantity"));
        assert!(json.contains("\"amount\":\"50.00\""));
    }
}
