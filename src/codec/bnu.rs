//! BNU (Banco Nacional Ultramarino) salary CSV.
//!
//! ```text
//! Batch Reference,BNU-SAL-20260130
//! Originator,Example Organisation
//! Debit Account,0100200300
//! Value Date,30/01/2026
//! Record Count,1
//! Total Amount,566.00
//! Seq,Account Number,Beneficiary Name,Amount,Currency,Reference
//! 1,0011223344,Ana da Costa,566.00,USD,SALARY-2026-01-emp_001
//! Total Records,1
//! Total Amount,566.00
//! ```

use crate::error::EngineResult;
use crate::models::{BankCode, BankTransferLine, BankTransferSummary, Originator};

use super::csv_layout::CsvLayout;
use super::{BankFileCodec, CSV_MIME_TYPE};

const LAYOUT: CsvLayout = CsvLayout {
    metadata_labels: [
        "Batch Reference",
        "Originator",
        "Debit Account",
        "Value Date",
        "Record Count",
        "Total Amount",
    ],
    date_format: "%d/%m/%Y",
    header: &[
        "Seq",
        "Account Number",
        "Beneficiary Name",
        "Amount",
        "Currency",
        "Reference",
    ],
    footer_labels: ["Total Records", "Total Amount"],
    row: detail_row,
};

fn detail_row(seq: usize, line: &BankTransferLine, originator: &Originator) -> Vec<String> {
    vec![
        seq.to_string(),
        line.account_number.clone(),
        line.account_name.clone(),
        line.amount.to_string(),
        originator.currency.clone(),
        line.reference.clone(),
    ]
}

/// Codec for BNU.
#[derive(Debug, Clone, Copy, Default)]
pub struct BnuCodec;

impl BankFileCodec for BnuCodec {
    fn bank_code(&self) -> BankCode {
        BankCode::Bnu
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
