//! Error types for the payroll engine.
//!
//! Hard failures (validation, unsupported bank formats, configuration) are
//! returned as [`EngineError`]; non-fatal conditions are reported as
//! [`Warning`](crate::models::Warning) values alongside successful output.

use thiserror::Error;
use uuid::Uuid;

use crate::models::RunStatus;

/// The main error type for the payroll engine.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::UnsupportedBankCode {
///     code: "XYZ".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unsupported bank code: XYZ");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A required file is missing from the jurisdiction directory.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The missing path.
        path: String,
    },

    /// A jurisdiction file exists but is not valid YAML for its schema.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The file being read.
        path: String,
        /// The YAML deserializer's message.
        message: String,
    },

    /// Required employee or compensation data is missing or invalid.
    ///
    /// Halts record construction for that employee.
    #[error("Validation failed for employee '{employee_id}', field '{field}': {message}")]
    Validation {
        /// The employee whose input failed validation.
        employee_id: String,
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A payroll run lifecycle transition that is not allowed.
    #[error("Invalid payroll run transition from {from} to {to}")]
    InvalidRunTransition {
        /// The current status.
        from: RunStatus,
        /// The requested status.
        to: RunStatus,
    },

    /// Disbursement was requested for a run that is not approved or paid.
    #[error("Payroll run {run_id} is {status}; only approved or paid runs can be disbursed")]
    RunNotDisbursable {
        /// The run identifier.
        run_id: Uuid,
        /// The run's current status.
        status: RunStatus,
    },

    /// A bank file codec was requested for a bank code it does not handle.
    #[error("Unsupported bank code: {code}")]
    UnsupportedBankCode {
        /// The unrecognised bank code.
        code: String,
    },

    /// A bank file could not be produced from a summary.
    #[error("Failed to generate bank file for {bank_code}: {message}")]
    BankFile {
        /// The bank code of the summary.
        bank_code: String,
        /// A description of the failure.
        message: String,
    },

    /// The statutory rules cannot produce a rate, e.g. a zero divisor.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// Which rule was unusable.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::Validation`].
    pub fn validation(
        employee_id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        EngineError::Validation {
            employee_id: employee_id.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type EngineResult<T> = Result<T, EngineError>;
