//! Cross-checks between stored figures and their recomputed values.
//!
//! Records and summaries may be edited or reloaded after they are built. These
//! checks recompute each derived figure from its parts and report every field
//! that drifted by more than half a cent as a [`Warning::Consistency`].

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::{BankTransferSummary, DeductionType, PayrollRecord, Warning};
use crate::money::Money;

use super::RunTotals;

/// Largest difference tolerated between a stored and a recomputed figure.
pub const CONSISTENCY_TOLERANCE: Decimal = Decimal::from_parts(5, 0, 0, false, 3);

fn compare(subject: String, expected: Decimal, actual: Decimal, warnings: &mut Vec<Warning>) {
    if (actual - expected).abs() > CONSISTENCY_TOLERANCE {
        warn!(%subject, %expected, %actual, "Stored figure disagrees with recomputed value");
        warnings.push(Warning::Consistency {
            subject,
            expected,
            actual,
        });
    }
}

fn compare_money(subject: String, expected: Money, actual: Money, warnings: &mut Vec<Warning>) {
    compare(subject, expected.amount(), actual.amount(), warnings);
}

/// Recomputes a record's totals from its lines.
///
/// ```
/// use payroll_engine::config::StatutoryRules;
/// use payroll_engine::models::{Compensation, Employee, PayrollRun, PeriodInputs, Residency};
/// use payroll_engine::money::Money;
/// use payroll_engine::payroll::{PayrollRecordBuilder, verify_record};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let rules = StatutoryRules::default();
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     employee_number: None,
///     full_name: "Ana da Costa".to_string(),
///     residency: Residency::Resident,
///     compensation: Some(Compensation::Monthly(Decimal::new(600, 0))),
///     hire_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
///     termination_date: None,
///     bank: None,
///     allocation: None,
/// };
/// let run = PayrollRun::new(
///     Uuid::nil(),
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// );
/// let mut record = PayrollRecordBuilder::new(&rules)
///     .build(&employee, &PeriodInputs::default(), &run)
///     .unwrap();
/// assert!(verify_record(&record).is_empty());
///
/// record.net_pay += Money::from_cents(1);
/// assert_eq!(verify_record(&record).len(), 1);
/// ```
pub fn verify_record(record: &PayrollRecord) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let subject = |field: &str| format!("record {} {}", record.employee_id, field);

    let gross: Money = record.earnings.iter().map(|e| e.amount).sum();
    let deductions: Money = record.deductions.iter().map(|d| d.amount).sum();
    let employer: Money = record.employer_costs.iter().map(|c| c.amount).sum();

    compare_money(subject("total_gross_pay"), gross, record.total_gross_pay, &mut warnings);
    compare_money(subject("total_deductions"), deductions, record.total_deductions, &mut warnings);
    compare_money(
        subject("total_employer_taxes"),
        employer,
        record.total_employer_taxes,
        &mut warnings,
    );
    compare_money(subject("net_pay"), gross - deductions, record.net_pay, &mut warnings);
    compare_money(
        subject("total_employer_cost"),
        gross + employer,
        record.total_employer_cost,
        &mut warnings,
    );

    warnings
}

/// Recomputes run totals from the records and compares them with stored totals.
pub fn verify_run_totals<'a, I>(stored: &RunTotals, records: I) -> Vec<Warning>
where
    I: IntoIterator<Item = &'a PayrollRecord>,
{
    let expected = RunTotals::from_records(records);
    let mut warnings = Vec::new();
    let subject = |field: &str| format!("run {}", field);

    compare(
        subject("employee_count"),
        Decimal::from(expected.employee_count),
        Decimal::from(stored.employee_count),
        &mut warnings,
    );
    compare_money(
        subject("total_gross_pay"),
        expected.total_gross_pay,
        stored.total_gross_pay,
        &mut warnings,
    );
    let deduction_types: BTreeSet<DeductionType> = expected
        .deductions_by_type
        .keys()
        .chain(stored.deductions_by_type.keys())
        .copied()
        .collect();
    for deduction_type in deduction_types {
        compare_money(
            subject(&format!("deductions_by_type.{}", deduction_type.as_str())),
            expected.deductions_of(deduction_type),
            stored.deductions_of(deduction_type),
            &mut warnings,
        );
    }
    compare_money(
        subject("total_deductions"),
        expected.total_deductions,
        stored.total_deductions,
        &mut warnings,
    );
    compare_money(
        subject("total_net_pay"),
        expected.total_net_pay,
        stored.total_net_pay,
        &mut warnings,
    );
    compare_money(
        subject("total_employer_taxes"),
        expected.total_employer_taxes,
        stored.total_employer_taxes,
        &mut warnings,
    );
    compare_money(
        subject("total_employer_cost"),
        expected.total_employer_cost,
        stored.total_employer_cost,
        &mut warnings,
    );

    warnings
}

/// Recomputes a bank summary's total and count from its lines.
pub fn verify_summary(summary: &BankTransferSummary) -> Vec<Warning> {
    let mut warnings = Vec::new();
    let code = summary.bank_code.code();

    compare_money(
        format!("summary {} total_amount", code),
        summary.computed_total(),
        summary.total_amount,
        &mut warnings,
    );
    compare(
        format!("summary {} transaction_count", code),
        Decimal::from(summary.lines.len()),
        Decimal::from(summary.transaction_count),
        &mut warnings,
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BankCode, BankTransferLine, Deduction, DeductionType, Earning, EarningType, EmployerCost,
        EmployerCostType, Residency,
    };
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn create_record() -> PayrollRecord {
        let date = NaiveDate::from_ymd_opt(2026, 1, 31).unwrap();
        PayrollRecord {
            id: Uuid::nil(),
            run_id: Uuid::nil(),
            employee_id: "emp_001".to_string(),
            employee_number: None,
            employee_name: "Ana".to_string(),
            residency: Residency::Resident,
            allocation: None,
            period_start: date,
            period_end: date,
            pay_date: date,
            earnings: vec![Earning {
                earning_type: EarningType::Regular,
                description: "Base salary".to_string(),
                quantity: None,
                rate: None,
                amount: Money::from_cents(60000),
            }],
            deductions: vec![
                Deduction {
                    deduction_type: DeductionType::IncomeTax,
                    description: "WIT".to_string(),
                    amount: Money::from_cents(1000),
                },
                Deduction {
                    deduction_type: DeductionType::SocialSecurity,
                    description: "INSS".to_string(),
                    amount: Money::from_cents(2400),
                },
            ],
            employer_costs: vec![EmployerCost {
                cost_type: EmployerCostType::SocialSecurity,
                description: "INSS".to_string(),
                amount: Money::from_cents(3600),
            }],
            contributive_base: Money::from_cents(60000),
            taxable_income: Money::from_cents(60000),
            total_gross_pay: Money::from_cents(60000),
            total_deductions: Money::from_cents(3400),
            total_employer_taxes: Money::from_cents(3600),
            net_pay: Money::from_cents(56600),
            total_employer_cost: Money::from_cents(63600),
            warnings: vec![],
            audit_trace: vec![],
        }
    }

    #[test]
    fn test_consistent_record_has_no_warnings() {
        assert!(verify_record(&create_record()).is_empty());
    }

    #[test]
    fn test_net_pay_drift_is_reported() {
        let mut record = create_record();
        record.net_pay = Money::from_cents(56599);

        let warnings = verify_record(&record);
        assert_eq!(warnings.len(), 1);
        match &warnings[0] {
            Warning::Consistency {
                subject,
                expected,
                actual,
            } => {
                assert_eq!(subject, "record emp_001 net_pay");
                assert_eq!(*expected, Decimal::new(56600, 2));
                assert_eq!(*actual, Decimal::new(56599, 2));
            }
            other => panic!("unexpected warning {:?}", other),
        }
    }

    #[test]
    fn test_tolerance_boundary() {
        let mut warnings = Vec::new();
        compare("x".to_string(), Decimal::new(1000, 3), Decimal::new(1005, 3), &mut warnings);
        assert!(warnings.is_empty());
        compare("x".to_string(), Decimal::new(1000, 3), Decimal::new(1006, 3), &mut warnings);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_edited_line_flags_every_dependent_total() {
        let mut record = create_record();
        record.earnings[0].amount = Money::from_cents(61000);

        let subjects: Vec<String> = verify_record(&record)
            .into_iter()
            .filter_map(|w| match w {
                Warning::Consistency { subject, .. } => Some(subject),
                _ => None,
            })
            .collect();
        assert_eq!(
            subjects,
            vec![
                "record emp_001 total_gross_pay",
                "record emp_001 net_pay",
                "record emp_001 total_employer_cost",
            ]
        );
    }

    #[test]
    fn test_run_totals_check() {
        let records = vec![create_record(), create_record()];
        let mut stored = RunTotals::from_records(&records);
        assert!(verify_run_totals(&stored, &records).is_empty());

        stored.total_net_pay += Money::from_cents(5);
        stored.employee_count = 3;
        let warnings = verify_run_totals(&stored, &records);
        assert_eq!(warnings.len(), 2);
        assert!(warnings.iter().all(|w| w.code() == "CONSISTENCY_MISMATCH"));
    }

    #[test]
    fn test_deduction_split_drift_is_reported() {
        let records = vec![create_record(), create_record()];
        let mut stored = RunTotals::from_records(&records);

        // Move a cent from income tax to social security; the total is unchanged
        let cent = Money::from_cents(1);
        *stored
            .deductions_by_type
            .entry(DeductionType::IncomeTax)
            .or_default() -= cent;
        *stored
            .deductions_by_type
            .entry(DeductionType::SocialSecurity)
            .or_default() += cent;

        let subjects: Vec<String> = verify_run_totals(&stored, &records)
            .into_iter()
            .map(|w| match w {
                Warning::Consistency { subject, .. } => subject,
                other => panic!("unexpected warning {:?}", other),
            })
            .collect();
        assert_eq!(
            subjects,
            vec![
                "run deductions_by_type.income_tax".to_string(),
                "run deductions_by_type.social_security".to_string(),
            ]
        );
    }

    #[test]
    fn test_deduction_type_missing_from_stored_totals() {
        let records = vec![create_record()];
        let mut stored = RunTotals::from_records(&records);
        let removed = stored.deductions_by_type.remove(&DeductionType::IncomeTax);
        assert!(removed.is_some_and(|amount| amount.is_positive()));

        let warnings = verify_run_totals(&stored, &records);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_summary_check() {
        let line = BankTransferLine {
            account_number: "001".to_string(),
            account_name: "Ana".to_string(),
            amount: Money::from_cents(12000),
            reference: "SALARY-2026-01-emp_001".to_string(),
            employee_id: "emp_001".to_string(),
        };
        let mut summary = BankTransferSummary::new(
            BankCode::Bnu,
            NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
            "2026-01".to_string(),
            vec![line],
        );
        assert!(verify_summary(&summary).is_empty());

        summary.total_amount = Money::from_cents(12001);
        summary.transaction_count = 2;
        assert_eq!(verify_summary(&summary).len(), 2);
    }
}
