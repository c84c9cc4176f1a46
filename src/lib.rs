//! Payroll Computation and Bank Disbursement Engine
//!
//! This crate computes monthly payroll records under Timor-Leste statutory
//! rules (withholding tax, INSS social security, overtime, leave, severance,
//! 13th month), aggregates them into run totals, routes net pay to employee
//! banks and renders the bank-specific salary files.
//!
//! Data flows one way:
//!
//! ```text
//! Employee + PeriodInputs ─► calculation ─► payroll::PayrollRecordBuilder
//!     ─► payroll::RunTotals ─► disbursement::route_disbursements
//!     ─► codec::generate_bank_file ─► BankFileResult
//! ```
//!
//! Every function is pure and synchronous. Hard failures are returned as
//! [`error::EngineError`]; recoverable conditions come back as
//! [`models::Warning`]s next to the successful output.

#![warn(missing_docs)]

pub mod calculation;
pub mod codec;
pub mod config;
pub mod disbursement;
pub mod error;
pub mod models;
pub mod money;
pub mod payroll;
