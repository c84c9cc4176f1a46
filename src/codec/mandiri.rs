//! Bank Mandiri salary CSV.

use crate::error::EngineResult;
use crate::models::{BankCode, BankTransferLine, BankTransferSummary, Originator};

use super::csv_layout::CsvLayout;
use super::{BankFileCodec, CSV_MIME_TYPE};

const LAYOUT: CsvLayout = CsvLayout {
    metadata_labels: [
        "BATCH_REF",
        "COMPANY",
        "SOURCE_ACCOUNT",
        "EFFECTIVE_DATE",
        "TRX_COUNT",
        "TRX_TOTAL",
    ],
    date_format: "%Y%m%d",
    header: &[
        "BENEFICIARY_ACCOUNT",
        "BENEFICIARY_NAME",
        "AMOUNT",
        "CURRENCY",
        "REMARK",
        "EMPLOYEE_ID",
    ],
    footer_labels: ["CONTROL_COUNT", "CONTROL_TOTAL"],
    row: detail_row,
};

// Mandiri has no sequence column; the employee id goes last.
fn detail_row(_seq: usize, line: &BankTransferLine, originator: &Originator) -> Vec<String> {
    vec![
        line.account_number.clone(),
        line.account_name.clone(),
        line.amount.to_string(),
        originator.currency.clone(),
        line.reference.clone(),
        line.employee_id.clone(),
    ]
}

/// Codec for Bank Mandiri.
#[derive(Debug, Clone, Copy, Default)]
pub struct MandiriCodec;

impl BankFileCodec for MandiriCodec {
    fn bank_code(&self) -> BankCode {
        BankCode::Mandiri
    }

    fn extension(&self) -> &'static str {
        "csv"
    }

    fn mime_type(&self) -> &'static str {
        CSV_MIME_TYPE
    }

    fn encode(&self, summary: &BankTransferSummary, originator: &Originator) -> EngineResult<String> {
        LAYOUT.write(summary, originator)
    }
}
