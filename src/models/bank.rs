//! Bank disbursement models.
//!
//! [`BankCode`] is the closed set of banks the engine can route to. Routing
//! produces one [`BankTransferSummary`] per bank; a codec turns a summary into
//! a [`BankFileResult`].

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::money::Money;

/// Banks salaries can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BankCode {
    /// Banco Nacional Ultramarino (Caixa Geral de Depósitos group).
    Bnu,
    /// Banco Nacional de Comércio de Timor-Leste.
    Bnctl,
    /// Bank Mandiri.
    Mandiri,
    /// ANZ (Australia and New Zealand Banking Group).
    Anz,
    /// Bank Rakyat Indonesia.
    Bri,
}

impl BankCode {
    /// All bank codes, in routing order.
    pub const ALL: [BankCode; 5] = [
        BankCode::Bnu,
        BankCode::Bnctl,
        BankCode::Mandiri,
        BankCode::Anz,
        BankCode::Bri,
    ];

    /// The code printed in files and file names.
    pub fn code(&self) -> &'static str {
        match self {
            BankCode::Bnu => "BNU",
            BankCode::Bnctl => "BNCTL",
            BankCode::Mandiri => "MANDIRI",
            BankCode::Anz => "ANZ",
            BankCode::Bri => "BRI",
        }
    }

    /// The bank's display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            BankCode::Bnu => "Banco Nacional Ultramarino",
            BankCode::Bnctl => "Banco Nacional de Comércio de Timor-Leste",
            BankCode::Mandiri => "Bank Mandiri",
            BankCode::Anz => "ANZ Timor-Leste",
            BankCode::Bri => "Bank Rakyat Indonesia",
        }
    }
}

impl fmt::Display for BankCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for BankCode {
    type Err = EngineError;

    /// Parses an exact bank code (case-insensitive). Aliases are not accepted
    /// here; use [`classify_bank`](crate::disbursement::classify_bank) for
    /// free-text bank names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BankCode::ALL
            .into_iter()
            .find(|bank| bank.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EngineError::UnsupportedBankCode {
                code: s.to_string(),
            })
    }
}

/// One credit transfer to one employee account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransferLine {
    /// Destination account number.
    pub account_number: String,
    /// Destination account holder name.
    pub account_name: String,
    /// Amount to transfer (the employee's net pay).
    pub amount: Money,
    /// Payment reference, `SALARY-{period}-{employee}`.
    pub reference: String,
    /// The employee the line pays.
    pub employee_id: String,
}

/// All transfers to one bank for one run.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{BankCode, BankTransferLine, BankTransferSummary};
/// use payroll_engine::money::Money;
/// use chrono::NaiveDate;
///
/// let line = |cents: i64, id: &str| BankTransferLine {
///     account_number: "001".to_string(),
///     account_name: id.to_string(),
///     amount: Money::from_cents(cents),
///     reference: format!("SALARY-2026-01-{}", id),
///     employee_id: id.to_string(),
/// };
/// let summary = BankTransferSummary::new(
///     BankCode::Bnu,
///     NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
///     "2026-01".to_string(),
///     vec![line(12000, "a"), line(8050, "b"), line(4525, "c")],
/// );
/// assert_eq!(summary.total_amount.to_string(), "245.75");
/// assert_eq!(summary.transaction_count, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankTransferSummary {
    /// Destination bank.
    pub bank_code: BankCode,
    /// Destination bank display name.
    pub bank_name: String,
    /// Transfer lines in file order.
    pub lines: Vec<BankTransferLine>,
    /// Sum of line amounts.
    pub total_amount: Money,
    /// Number of lines.
    pub transaction_count: usize,
    /// Date the funds should be credited.
    pub value_date: NaiveDate,
    /// Payroll period label (`YYYY-MM`).
    pub period_label: String,
}

impl BankTransferSummary {
    /// Builds a summary, deriving `total_amount` and `transaction_count` from the lines.
    pub fn new(
        bank_code: BankCode,
        value_date: NaiveDate,
        period_label: String,
        lines: Vec<BankTransferLine>,
    ) -> Self {
        let total_amount = lines.iter().map(|l| l.amount).sum();
        let transaction_count = lines.len();
        Self {
            bank_code,
            bank_name: bank_code.display_name().to_string(),
            lines,
            total_amount,
            transaction_count,
            value_date,
            period_label,
        }
    }

    /// Recomputes the total from the lines.
    pub fn computed_total(&self) -> Money {
        self.lines.iter().map(|l| l.amount).sum()
    }
}

/// Who is paying: printed in file headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Originator {
    /// Company (originator) name.
    pub name: String,
    /// Account debited for the batch.
    pub debit_account: String,
    /// ISO currency code of the batch.
    pub currency: String,
}

/// A generated bank file, ready to hand to a delivery mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankFileResult {
    /// File content.
    pub content: String,
    /// Suggested file name.
    pub file_name: String,
    /// MIME type (`text/csv` or `text/plain`).
    pub mime_type: String,
    /// The summary the file was generated from.
    pub summary: BankTransferSummary,
}
