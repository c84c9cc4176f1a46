//! Bank file codecs.
//!
//! Each destination bank has one codec that turns a [`BankTransferSummary`]
//! into the file its banking portal accepts. Generation is pure: the same
//! summary and originator always give byte-identical content.
//!
//! | Bank    | Format       | Extension | MIME         |
//! |---------|--------------|-----------|--------------|
//! | BNU     | CSV          | `csv`     | `text/csv`   |
//! | BNCTL   | CSV          | `csv`     | `text/csv`   |
//! | MANDIRI | CSV          | `csv`     | `text/csv`   |
//! | ANZ     | Fixed-width  | `txt`     | `text/plain` |
//!
//! BRI is routable but has no file format; asking for its file fails with
//! [`EngineError::UnsupportedBankCode`].

mod anz;
mod bnctl;
mod bnu;
mod csv_layout;
mod fixed_width;
mod mandiri;

pub use anz::{ANZ_MAX_DETAIL_RECORDS, ANZ_RECORD_LENGTH, AnzCodec};
pub use bnctl::BnctlCodec;
pub use bnu::BnuCodec;
pub use mandiri::MandiriCodec;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BankCode, BankFileResult, BankTransferSummary, Originator};

/// MIME type of CSV bank files.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// MIME type of fixed-width bank files.
pub const TEXT_MIME_TYPE: &str = "text/plain";

/// A serializer for one bank's salary file format.
pub trait BankFileCodec {
    /// The bank this codec writes files for.
    fn bank_code(&self) -> BankCode;

    /// File extension, without the dot.
    fn extension(&self) -> &'static str;

    /// MIME type of the generated content.
    fn mime_type(&self) -> &'static str;

    /// Renders the file content.
    ///
    /// Callers should go through [`generate_bank_file`], which checks the
    /// summary before encoding.
    fn encode(&self, summary: &BankTransferSummary, originator: &Originator) -> EngineResult<String>;
}

/// Batch reference printed in file headers: `{CODE}-SAL-{YYYYMMDD}`.
pub fn batch_reference(bank_code: BankCode, value_date: NaiveDate) -> String {
    format!("{}-SAL-{}", bank_code.code(), value_date.format("%Y%m%d"))
}

/// File name: `{CODE}_Salaries_{period}_{YYYYMMDD}.{ext}`.
pub fn file_name(summary: &BankTransferSummary, extension: &str) -> String {
    format!(
        "{}_Salaries_{}_{}.{}",
        summary.bank_code.code(),
        summary.period_label,
        summary.value_date.format("%Y%m%d"),
        extension
    )
}

fn check_summary(codec: &dyn BankFileCodec, summary: &BankTransferSummary) -> EngineResult<()> {
    if summary.bank_code != codec.bank_code() {
        return Err(EngineError::UnsupportedBankCode {
            code: summary.bank_code.code().to_string(),
        });
    }

    if let Some(line) = summary.lines.iter().find(|line| line.amount.is_negative()) {
        return Err(EngineError::BankFile {
            bank_code: summary.bank_code.code().to_string(),
            message: format!(
                "negative amount {} for employee {}",
                line.amount, line.employee_id
            ),
        });
    }

    Ok(())
}

/// Encodes a summary with a specific codec.
///
/// Fails with [`EngineError::UnsupportedBankCode`] when the summary is for a
/// different bank, and with [`EngineError::BankFile`] when a line amount is
/// negative.
pub fn encode_with(
    codec: &dyn BankFileCodec,
    summary: &BankTransferSummary,
    originator: &Originator,
) -> EngineResult<BankFileResult> {
    check_summary(codec, summary)?;
    let content = codec.encode(summary, originator)?;
    let file_name = file_name(summary, codec.extension());

    debug!(
        bank_code = %summary.bank_code,
        %file_name,
        transaction_count = summary.transaction_count,
        total_amount = %summary.total_amount,
        "Generated bank file"
    );

    Ok(BankFileResult {
        content,
        file_name,
        mime_type: codec.mime_type().to_string(),
        summary: summary.clone(),
    })
}

/// Generates the bank file for a summary, choosing the codec by bank code.
///
/// # Example
///
/// ```
/// use payroll_engine::codec::generate_bank_file;
/// use payroll_engine::models::{BankCode, BankTransferLine, BankTransferSummary, Originator};
/// use payroll_engine::money::Money;
/// use chrono::NaiveDate;
///
/// let summary = BankTransferSummary::new(
///     BankCode::Bnu,
///     NaiveDate::from_ymd_opt(2026, 1, 30).unwrap(),
///     "2026-01".to_string(),
///     vec![BankTransferLine {
///         account_number: "0011223344".to_string(),
///         account_name: "Ana da Costa".to_string(),
///         amount: Money::from_cents(56600),
///         reference: "SALARY-2026-01-emp_001".to_string(),
///         employee_id: "emp_001".to_string(),
///     }],
/// );
/// let originator = Originator {
///     name: "Example Org".to_string(),
///     debit_account: "0100200300".to_string(),
///     currency: "USD".to_string(),
/// };
///
/// let file = generate_bank_file(&summary, &originator).unwrap();
/// assert_eq!(file.file_name, "BNU_Salaries_2026-01_20260130.csv");
/// assert_eq!(file.mime_type, "text/csv");
/// assert!(file.content.contains("Total Amount,566.00"));
/// ```
pub fn generate_bank_file(
    summary: &BankTransferSummary,
    originator: &Originator,
) -> EngineResult<BankFileResult> {
    match summary.bank_code {
        BankCode::Bnu => encode_with(&BnuCodec, summary, originator),
        BankCode::Bnctl => encode_with(&BnctlCodec, summary, originator),
        BankCode::Mandiri => encode_with(&MandiriCodec, summary, originator),
        BankCode::Anz => encode_with(&AnzCodec, summary, originator),
        BankCode::Bri => Err(EngineError::UnsupportedBankCode {
            code: BankCode::Bri.code().to_string(),
        }),
    }
}

/// Generates a bank file for an explicitly requested bank code.
///
/// The code is parsed strictly (see [`BankCode`]'s `FromStr`), and the summary
/// must be for that bank. Neither case falls back to another format.
pub fn generate_bank_file_for_code(
    code: &str,
    summary: &BankTransferSummary,
    originator: &Originator,
) -> EngineResult<BankFileResult> {
    let requested: BankCode = code.parse()?;
    if requested != summary.bank_code {
        return Err(EngineError::UnsupportedBankCode {
            code: summary.bank_code.code().to_string(),
        });
    }
    generate_bank_file(summary, originator)
}
