//! Shared writer for the CSV bank formats.
//!
//! Every CSV bank file has the same shape: six metadata key/value rows, a
//! column header row, one row per transfer line, then a two-row footer that
//! repeats the count and total. Only the labels, the date format and the
//! detail columns differ between banks.

use std::fmt::Display;

use csv::{Terminator, WriterBuilder};

use crate::error::{EngineError, EngineResult};
use crate::models::{BankTransferLine, BankTransferSummary, Originator};

use super::batch_reference;

/// Labels and columns of one CSV variant.
pub(crate) struct CsvLayout {
    /// Batch reference, originator, debit account, value date, count, total.
    pub metadata_labels: [&'static str; 6],
    /// `chrono` format string for the value date.
    pub date_format: &'static str,
    pub header: &'static [&'static str],
    /// Count and total.
    pub footer_labels: [&'static str; 2],
    /// Builds the detail columns for the line at 1-based position `seq`.
    pub row: fn(usize, &BankTransferLine, &Originator) -> Vec<String>,
}

fn csv_error(summary: &BankTransferSummary, err: impl Display) -> EngineError {
    EngineError::BankFile {
        bank_code: summary.bank_code.code().to_string(),
        message: err.to_string(),
    }
}

impl CsvLayout {
    /// Writes the file. Count and total are recomputed from the lines.
    pub fn write(&self, summary: &BankTransferSummary, originator: &Originator) -> EngineResult<String> {
        let mut writer = WriterBuilder::new()
            .flexible(true)
            .terminator(Terminator::CRLF)
            .from_writer(Vec::new());

        let count = summary.lines.len().to_string();
        let total = summary.computed_total().to_string();
        let [batch_label, originator_label, debit_label, date_label, count_label, total_label] =
            self.metadata_labels;

        let metadata = [
            (batch_label, batch_reference(summary.bank_code, summary.value_date)),
            (originator_label, originator.name.clone()),
            (debit_label, originator.debit_account.clone()),
            (date_label, summary.value_date.format(self.date_format).to_string()),
            (count_label, count.clone()),
            (total_label, total.clone()),
        ];
        for (label, value) in &metadata {
            writer
                .write_record([*label, value.as_str()])
                .map_err(|e| csv_error(summary, e))?;
        }

        writer
            .write_record(self.header)
            .map_err(|e| csv_error(summary, e))?;

        for (index, line) in summary.lines.iter().enumerate() {
            writer
                .write_record((self.row)(index + 1, line, originator))
                .map_err(|e| csv_error(summary, e))?;
        }

        let [footer_count, footer_total] = self.footer_labels;
        writer
            .write_record([footer_count, count.as_str()])
            .map_err(|e| csv_error(summary, e))?;
        writer
            .write_record([footer_total, total.as_str()])
            .map_err(|e| csv_error(summary, e))?;

        let bytes = writer.into_inner().map_err(|e| csv_error(summary, e))?;
        String::from_utf8(bytes).map_err(|e| csv_error(summary, e))
    }
}
