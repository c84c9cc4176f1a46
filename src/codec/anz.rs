//! ANZ fixed-width salary file.
//!
//! Three record types, each exactly [`ANZ_RECORD_LENGTH`] bytes followed by
//! CRLF. `N` fields are zero-padded numbers, the rest are space-padded text.
//!
//! | Record  | Fields (width)                                                                   |
//! |---------|----------------------------------------------------------------------------------|
//! | Header  | `H`, batch ref (16), originator (35), debit account (20N), date YYYYMMDD (8), currency (3), filler (37) |
//! | Detail  | `D`, sequence (6N), account (20N), name (35), amount in cents (15N), reference (30), filler (13) |
//! | Trailer | `T`, record count (6N), total cents (18N), batch ref (16), filler (79)           |

use crate::error::{EngineError, EngineResult};
use crate::models::{BankCode, BankTransferLine, BankTransferSummary, Originator};

use super::fixed_width::{alpha, filler, numeric};
use super::{BankFileCodec, TEXT_MIME_TYPE, batch_reference};

/// Length of every ANZ record, excluding the line terminator.
pub const ANZ_RECORD_LENGTH: usize = 120;

/// Most detail records a file can hold; the sequence and count fields are six digits.
pub const ANZ_MAX_DETAIL_RECORDS: usize = 999_999;

const RECORD_TERMINATOR: &str = "\r\n";

fn check_line_count(count: usize) -> EngineResult<()> {
    if count > ANZ_MAX_DETAIL_RECORDS {
        return Err(EngineError::BankFile {
            bank_code: BankCode::Anz.code().to_string(),
            message: format!(
                "{} lines exceed the {} detail records a file can hold",
                count, ANZ_MAX_DETAIL_RECORDS
            ),
        });
    }
    Ok(())
}

fn header_record(summary: &BankTransferSummary, originator: &Originator) -> String {
    let mut record = String::with_capacity(ANZ_RECORD_LENGTH);
    record.push('H');
    record.push_str(&alpha(&batch_reference(summary.bank_code, summary.value_date), 16));
    record.push_str(&alpha(&originator.name, 35));
    record.push_str(&numeric(&originator.debit_account, 20));
    record.push_str(&summary.value_date.format("%Y%m%d").to_string());
    record.push_str(&alpha(&originator.currency, 3));
    record.push_str(&filler(37));
    record
}

fn detail_record(seq: usize, line: &BankTransferLine) -> String {
    let mut record = String::with_capacity(ANZ_RECORD_LENGTH);
    record.push('D');
    record.push_str(&numeric(&seq.to_string(), 6));
    record.push_str(&numeric(&line.account_number, 20));
    record.push_str(&alpha(&line.account_name, 35));
    record.push_str(&numeric(&line.amount.to_cents().to_string(), 15));
    record.push_str(&alpha(&line.reference, 30));
    record.push_str(&filler(13));
    record
}

fn trailer_record(summary: &BankTransferSummary) -> String {
    let total_cents = summary.computed_total().to_cents();
    let mut record = String::with_capacity(ANZ_RECORD_LENGTH);
    record.push('T');
    record.push_str(&numeric(&summary.lines.len().to_string(), 6));
    record.push_str(&numeric(&total_cents.to_string(), 18));
    record.push_str(&alpha(&batch_reference(summary.bank_code, summary.value_date), 16));
    record.push_str(&filler(79));
    record
}

/// Codec for ANZ.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnzCodec;

impl BankFileCodec for AnzCodec {
    fn bank_code(&self) -> BankCode {
        BankCode::Anz
    }

    fn extension(&self) -> &'static str {
        "txt"
    }

    fn mime_type(&self) -> &'static str {
        TEXT_MIME_TYPE
    }

    fn encode(&self, summary: &BankTransferSummary, originator: &Originator) -> EngineResult<String> {
        check_line_count(summary.lines.len())?;
        let mut content =
            String::with_capacity((summary.lines.len() + 2) * (ANZ_RECORD_LENGTH + 2));

        content.push_str(&header_record(summary, originator));
        content.push_str(RECORD_TERMINATOR);
        for (index, line) in summary.lines.iter().enumerate() {
            content.push_str(&detail_record(index + 1, line));
            content.push_str(RECORD_TERMINATOR);
        }
        content.push_str(&trailer_record(summary));
        content.push_str(RECORD_TERMINATOR);

        Ok(content)
    }
}
