//! Routes net pay to per-bank transfer summaries.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{
    BankCode, BankTransferLine, BankTransferSummary, Employee, PayrollRecord, PayrollRun,
    RoutingGapReason, Warning,
};
use crate::money::Money;

/// Bank-name aliases, checked in order. The first alias found anywhere in the
/// upper-cased bank name wins.
pub const BANK_ALIASES: [(BankCode, &[&str]); 5] = [
    (BankCode::Bnu, &["BNU", "ULTRAMARINO", "CAIXA GERAL"]),
    (BankCode::Bnctl, &["BNCTL", "COMÉRCIO", "COMERCIO"]),
    (BankCode::Mandiri, &["MANDIRI"]),
    (BankCode::Anz, &["ANZ", "AUSTRALIA AND NEW ZEALAND"]),
    (BankCode::Bri, &["BRI", "RAKYAT"]),
];

/// Classifies a free-text bank name.
///
/// Returns `None` when no alias matches.
///
/// ```
/// use payroll_engine::disbursement::classify_bank;
/// use payroll_engine::models::BankCode;
///
/// assert_eq!(classify_bank("Banco Nacional Ultramarino"), Some(BankCode::Bnu));
/// assert_eq!(classify_bank("banco nacional de comércio"), Some(BankCode::Bnctl));
/// assert_eq!(classify_bank("Westpac"), None);
/// ```
pub fn classify_bank(bank_name: &str) -> Option<BankCode> {
    let name = bank_name.to_uppercase();
    BANK_ALIASES
        .iter()
        .find(|(_, aliases)| aliases.iter().any(|alias| name.contains(*alias)))
        .map(|(code, _)| *code)
}

/// Where an employee's pay goes, or why it cannot be sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "detail", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// The employee can be paid through this bank.
    Routed {
        /// Destination bank.
        bank_code: BankCode,
        /// Destination account, trimmed.
        account_number: String,
    },
    /// The employee needs manual handling.
    Unrouted(RoutingGapReason),
}

/// Routes one employee from their bank details.
pub fn route_employee(employee: &Employee) -> RouteOutcome {
    let Some(bank) = employee.bank.as_ref() else {
        return RouteOutcome::Unrouted(RoutingGapReason::NoBankDetails);
    };

    let Some(bank_code) = classify_bank(&bank.bank_name) else {
        return RouteOutcome::Unrouted(RoutingGapReason::UnknownBank);
    };

    match bank.account_number.as_deref().map(str::trim) {
        Some(account) if !account.is_empty() => RouteOutcome::Routed {
            bank_code,
            account_number: account.to_string(),
        },
        _ => RouteOutcome::Unrouted(RoutingGapReason::MissingAccountNumber),
    }
}

/// Builds a transfer reference: `SALARY-{period}-{employee}`.
pub fn salary_reference(period_label: &str, reference_id: &str) -> String {
    format!("SALARY-{}-{}", period_label, reference_id)
}

/// The routed transfers for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisbursementPlan {
    /// One summary per bank that has at least one line.
    pub summaries: BTreeMap<BankCode, BankTransferSummary>,
    /// Employees that were not routed.
    pub warnings: Vec<Warning>,
}

impl DisbursementPlan {
    /// Returns the summary for a bank, if any employee was routed to it.
    pub fn summary(&self, bank_code: BankCode) -> Option<&BankTransferSummary> {
        self.summaries.get(&bank_code)
    }

    /// Sum of all routed amounts.
    pub fn total_amount(&self) -> Money {
        self.summaries.values().map(|s| s.total_amount).sum()
    }

    /// Number of routed lines across all banks.
    pub fn routed_count(&self) -> usize {
        self.summaries.values().map(|s| s.transaction_count).sum()
    }
}

/// Groups a run's net pay into one transfer summary per bank.
///
/// Only approved or paid runs can be disbursed. Each record is matched to its
/// employee by id; records whose employee is missing, whose net pay is not
/// positive, or whose bank details cannot be routed produce a
/// [`Warning::RoutingGap`] and appear in no summary. Lines within a summary
/// are sorted by reference.
pub fn route_disbursements(
    run: &PayrollRun,
    records: &[PayrollRecord],
    employees: &[Employee],
    value_date: NaiveDate,
) -> EngineResult<DisbursementPlan> {
    run.ensure_disbursable()?;

    let period_label = run.period_label();
    let by_id: BTreeMap<&str, &Employee> = employees.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut groups: BTreeMap<BankCode, Vec<BankTransferLine>> = BTreeMap::new();
    let mut warnings = Vec::new();

    for record in records {
        let employee = by_id.get(record.employee_id.as_str()).copied();
        let bank_name = employee.and_then(|e| e.bank.as_ref()).map(|b| b.bank_name.clone());

        let routed = match employee {
            None => Err(RoutingGapReason::EmployeeNotFound),
            Some(_) if !record.net_pay.is_positive() => Err(RoutingGapReason::NonPositiveNetPay),
            Some(employee) => match route_employee(employee) {
                RouteOutcome::Routed {
                    bank_code,
                    account_number,
                } => Ok((employee, bank_code, account_number)),
                RouteOutcome::Unrouted(reason) => Err(reason),
            },
        };

        match routed {
            Ok((employee, bank_code, account_number)) => {
                groups.entry(bank_code).or_default().push(BankTransferLine {
                    account_number,
                    account_name: employee.account_name().to_string(),
                    amount: record.net_pay,
                    reference: salary_reference(&period_label, record.reference_id()),
                    employee_id: record.employee_id.clone(),
                });
            }
            Err(reason) => {
                warn!(
                    run_id = %run.id,
                    employee_id = %record.employee_id,
                    reason = ?reason,
                    "Employee not routed to any bank"
                );
                warnings.push(Warning::RoutingGap {
                    employee_id: record.employee_id.clone(),
                    bank_name,
                    reason,
                });
            }
        }
    }

    let summaries: BTreeMap<BankCode, BankTransferSummary> = groups
        .into_iter()
        .map(|(bank_code, mut lines)| {
            lines.sort_by(|a, b| {
                a.reference
                    .cmp(&b.reference)
                    .then_with(|| a.employee_id.cmp(&b.employee_id))
            });
            let summary = BankTransferSummary::new(bank_code, value_date, period_label.clone(), lines);
            (bank_code, summary)
        })
        .collect();

    let plan = DisbursementPlan {
        summaries,
        warnings,
    };

    info!(
        run_id = %run.id,
        period = %period_label,
        banks = plan.summaries.len(),
        routed = plan.routed_count(),
        unrouted = plan.warnings.len(),
        total = %plan.total_amount(),
        "Routed disbursements"
    );

    Ok(plan)
}
