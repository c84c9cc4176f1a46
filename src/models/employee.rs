//! Employee model and related types.
//!
//! Employees are inbound, read-only data owned by the surrounding HR
//! application. Optional fields are typed as `Option` so that missing
//! compensation or bank details are checkable states rather than surprises.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tax residency status of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Residency {
    /// Resident for tax purposes (taxed above the resident threshold).
    Resident,
    /// Non-resident (taxed from the first unit of income).
    NonResident,
}

impl Residency {
    /// Returns the snake_case name used in audit payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            Residency::Resident => "resident",
            Residency::NonResident => "non_resident",
        }
    }
}

/// How an employee's salary is expressed.
///
/// Serialized as `{"basis": "monthly", "amount": "600.00"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "basis", content = "amount", rename_all = "snake_case")]
pub enum Compensation {
    /// A fixed monthly salary.
    Monthly(Decimal),
    /// An annual salary, paid in twelve monthly instalments.
    Annual(Decimal),
}

impl Compensation {
    /// Returns the monthly salary at full precision.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Compensation;
    /// use rust_decimal::Decimal;
    ///
    /// let annual = Compensation::Annual(Decimal::new(12000, 0));
    /// assert_eq!(annual.monthly_salary(), Decimal::new(1000, 0));
    /// ```
    pub fn monthly_salary(&self) -> Decimal {
        match self {
            Compensation::Monthly(amount) => *amount,
            Compensation::Annual(amount) => *amount / Decimal::from(12),
        }
    }
}

/// Where an employee's net pay is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDestination {
    /// Free-text bank name or alias as captured by HR (e.g. "Banco Nacional Ultramarino").
    pub bank_name: String,
    /// The destination account number, if known.
    #[serde(default)]
    pub account_number: Option<String>,
    /// Account holder name, when it differs from the employee's name.
    #[serde(default)]
    pub account_name: Option<String>,
}

/// Allocation tag used only for grouped (donor/NGO-style) reporting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationTag {
    /// Project code the employee's cost is charged to.
    #[serde(default)]
    pub project_code: Option<String>,
    /// Funding source the employee's cost is charged to.
    #[serde(default)]
    pub funding_source: Option<String>,
}

/// Represents an employee whose pay is computed by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// Human-facing employee number, used in transfer references when present.
    #[serde(default)]
    pub employee_number: Option<String>,
    /// Full legal name.
    pub full_name: String,
    /// Tax residency status.
    pub residency: Residency,
    /// Salary basis and amount. Required to build a payroll record.
    #[serde(default)]
    pub compensation: Option<Compensation>,
    /// The date the employee started employment.
    pub hire_date: NaiveDate,
    /// The last day of employment, if the employee has left.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// Bank destination for net pay.
    #[serde(default)]
    pub bank: Option<BankDestination>,
    /// Project/funding allocation for grouped reporting.
    #[serde(default)]
    pub allocation: Option<AllocationTag>,
}

impl Employee {
    /// Returns the identifier printed on transfer references: the employee
    /// number when present and non-blank, otherwise the id.
    pub fn reference_id(&self) -> &str {
        match self.employee_number.as_deref() {
            Some(number) if !number.trim().is_empty() => number.trim(),
            _ => &self.id,
        }
    }

    /// Returns the monthly salary, if compensation is known.
    pub fn monthly_salary(&self) -> Option<Decimal> {
        self.compensation.map(|c| c.monthly_salary())
    }

    /// Returns true if the employee is employed on the given date.
    pub fn is_employed_on(&self, date: NaiveDate) -> bool {
        date >= self.hire_date && self.termination_date.is_none_or(|end| date <= end)
    }

    /// Days between `start` and `end` (inclusive) on which the employee is
    /// employed; zero when the ranges do not overlap.
    pub fn employed_days_between(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let from = self.hire_date.max(start);
        let to = self.termination_date.map_or(end, |t| t.min(end));
        ((to - from).num_days() + 1).max(0)
    }

    /// Returns the name to print on a bank transfer.
    pub fn account_name(&self) -> &str {
        self.bank
            .as_ref()
            .and_then(|b| b.account_name.as_deref())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.full_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee() -> Employee {
        Employee {
            id: "emp_001".to_string(),
            employee_number: Some("TL-0042".to_string()),
            full_name: "Ana da Costa".to_string(),
            residency: Residency::Resident,
            compensation: Some(Compensation::Monthly(Decimal::new(600, 0))),
            hire_date: NaiveDate::from_ymd_opt(2020, 3, 1).unwrap(),
            termination_date: None,
            bank: Some(BankDestination {
                bank_name: "BNU".to_string(),
                account_number: Some("0012345678".to_string()),
                account_name: None,
            }),
            allocation: None,
        }
    }

    #[test]
    fn test_deserialize_resident_employee() {
        let json = r#"{
            "id": "emp_001",
            "employee_number": "TL-0042",
            "full_name": "Ana da Costa",
            "residency": "resident",
            "compensation": {"basis": "monthly", "amount": "600.00"},
            "hire_date": "2020-03-01",
            "bank": {"bank_name": "Banco Nacional Ultramarino", "account_number": "0012345678"},
            "allocation": {"project_code": "P-01", "funding_source": "USAID"}
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.residency, Residency::Resident);
        assert_eq!(employee.monthly_salary(), Some(Decimal::new(60000, 2)));
        assert_eq!(
            employee.allocation.unwrap().project_code.as_deref(),
            Some("P-01")
        );
        assert!(employee.termination_date.is_none());
    }

    #[test]
    fn test_deserialize_employee_without_optional_fields() {
        let json = r#"{
            "id": "emp_002",
            "full_name": "John Smith",
            "residency": "non_resident",
            "hire_date": "2024-01-15"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.residency, Residency::NonResident);
        assert!(employee.compensation.is_none());
        assert!(employee.bank.is_none());
        assert_eq!(employee.reference_id(), "emp_002");
    }

    #[test]
    fn test_annual_compensation_serialization() {
        let json = serde_json::to_string(&Compensation::Annual(Decimal::new(24000, 0))).unwrap();
        assert_eq!(json, r#"{"basis":"annual","amount":"24000"}"#);
    }

    #[test]
    fn test_reference_id_prefers_employee_number() {
        let employee = create_test_employee();
        assert_eq!(employee.reference_id(), "TL-0042");
    }

    #[test]
    fn test_reference_id_ignores_blank_employee_number() {
        let mut employee = create_test_employee();
        employee.employee_number = Some("  ".to_string());
        assert_eq!(employee.reference_id(), "emp_001");
    }

    #[test]
    fn test_is_employed_on() {
        let mut employee = create_test_employee();
        employee.termination_date = NaiveDate::from_ymd_opt(2026, 1, 15);

        assert!(!employee.is_employed_on(NaiveDate::from_ymd_opt(2020, 2, 29).unwrap()));
        assert!(employee.is_employed_on(NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()));
        assert!(employee.is_employed_on(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()));
        assert!(!employee.is_employed_on(NaiveDate::from_ymd_opt(2026, 1, 16).unwrap()));
    }

    #[test]
    fn test_employed_days_between() {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let mut employee = create_test_employee();
        assert_eq!(employee.employed_days_between(date(2026, 1, 1), date(2026, 1, 31)), 31);

        employee.termination_date = Some(date(2026, 1, 10));
        assert_eq!(employee.employed_days_between(date(2026, 1, 1), date(2026, 1, 31)), 10);
        assert_eq!(employee.employed_days_between(date(2026, 2, 1), date(2026, 2, 28)), 0);

        employee.hire_date = date(2026, 1, 25);
        employee.termination_date = None;
        assert_eq!(employee.employed_days_between(date(2026, 1, 1), date(2026, 1, 31)), 7);
    }

    #[test]
    fn test_account_name_falls_back_to_full_name() {
        let mut employee = create_test_employee();
        assert_eq!(employee.account_name(), "Ana da Costa");

        if let Some(bank) = employee.bank.as_mut() {
            bank.account_name = Some("A. da Costa".to_string());
        }
        assert_eq!(employee.account_name(), "A. da Costa");
    }
}
