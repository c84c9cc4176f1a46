//! BNCTL (Banco Nacional de Comércio de Timor-Leste) salary CSV.
//!
//! Labels are in Portuguese, the value date is ISO (`yyyy-mm-dd`) and there is
//! no currency column.

use crate::error::EngineResult;
use crate::models::{BankCode, BankTransferLine, BankTransferSummary, Originator};

use super::csv_layout::CsvLayout;
use super::{BankFileCodec, CSV_MIME_TYPE};

const LAYOUT: CsvLayout = CsvLayout {
    metadata_labels: [
        "Referência do Lote",
        "Ordenante",
        "Conta a Debitar",
        "Data Valor",
        "Número de Transações",
        "Montante Total",
    ],
    date_format: "%Y-%m-%d",
    header: &[
        "No",
        "Número de Conta",
        "Nome do Beneficiário",
        "Montante",
        "Descrição",
    ],
    footer_labels: ["TOTAL DE TRANSAÇÕES", "MONTANTE TOTAL"],
    row: detail_row,
};

fn detail_row(seq: usize, line: &BankTransferLine, _originator: &Originator) -> Vec<String> {
    vec![
        seq.to_string(),
        line.account_number.clone(),
        line.account_name.clone(),
        line.amount.to_string(),
        line.reference.clone(),
    ]
}

/// Codec for BNCTL.
#[derive(Debug, Clone, Copy, Default)]
pub struct BnctlCodec;

impl BankFileCodec for BnctlCodec {
    fn bank_code(&self) -> BankCode {
        BankCode::Bnctl
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
