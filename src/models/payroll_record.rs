//! Payroll record model.
//!
//! A [`PayrollRecord`] is the complete result of paying one employee for one
//! run: earnings, deductions, employer costs, derived totals, any warnings,
//! and the audit trace that explains each figure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    AllocationTag, AuditStep, Deduction, DeductionType, Earning, EarningType, EmployerCost,
    Residency, Warning,
};
use crate::money::Money;

/// One employee's pay for one run.
///
/// Totals always satisfy:
/// - `net_pay == total_gross_pay - total_deductions`
/// - `total_deductions == Σ deductions`
/// - `total_employer_cost == total_gross_pay + total_employer_taxes`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Deterministic identifier derived from the run and employee ids.
    pub id: Uuid,
    /// The run this record belongs to.
    pub run_id: Uuid,
    /// The employee paid.
    pub employee_id: String,
    /// The employee number, if any.
    pub employee_number: Option<String>,
    /// The employee's name at the time of the run.
    pub employee_name: String,
    /// Tax residency applied.
    pub residency: Residency,
    /// Allocation tag copied from the employee, for grouped reporting.
    pub allocation: Option<AllocationTag>,
    /// Pay period start (inclusive).
    pub period_start: NaiveDate,
    /// Pay period end (inclusive).
    pub period_end: NaiveDate,
    /// Pay date.
    pub pay_date: NaiveDate,
    /// Earning lines in computation order.
    pub earnings: Vec<Earning>,
    /// Deduction lines in computation order.
    pub deductions: Vec<Deduction>,
    /// Employer-side costs.
    pub employer_costs: Vec<EmployerCost>,
    /// Gross pay subject to social security.
    pub contributive_base: Money,
    /// Income subject to withholding tax.
    pub taxable_income: Money,
    /// Sum of all earnings.
    pub total_gross_pay: Money,
    /// Sum of all deductions.
    pub total_deductions: Money,
    /// Sum of all employer costs.
    pub total_employer_taxes: Money,
    /// Gross pay less deductions.
    pub net_pay: Money,
    /// Gross pay plus employer costs.
    pub total_employer_cost: Money,
    /// Non-fatal conditions found while building the record.
    pub warnings: Vec<Warning>,
    /// Rule-by-rule explanation of the figures.
    pub audit_trace: Vec<AuditStep>,
}

impl PayrollRecord {
    /// Returns the identifier printed on transfer references.
    pub fn reference_id(&self) -> &str {
        match self.employee_number.as_deref() {
            Some(number) if !number.trim().is_empty() => number.trim(),
            _ => &self.employee_id,
        }
    }

    /// Sums earnings of the given type.
    pub fn earnings_of(&self, earning_type: EarningType) -> Money {
        self.earnings
            .iter()
            .filter(|e| e.earning_type == earning_type)
            .map(|e| e.amount)
            .sum()
    }

    /// Sums deductions of the given type.
    pub fn deductions_of(&self, deduction_type: DeductionType) -> Money {
        self.deductions
            .iter()
            .filter(|d| d.deduction_type == deduction_type)
            .map(|d| d.amount)
            .sum()
    }
}
