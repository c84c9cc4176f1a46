//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod bank;
mod employee;
mod pay_items;
mod payroll_record;
mod payroll_run;
mod period_inputs;
mod warning;

pub use audit::AuditStep;
pub use bank::{BankCode, BankFileResult, BankTransferLine, BankTransferSummary, Originator};
pub use employee::{AllocationTag, BankDestination, Compensation, Employee, Residency};
pub use pay_items::{Deduction, DeductionType, Earning, EarningType, EmployerCost, EmployerCostType};
pub use payroll_record::PayrollRecord;
pub use payroll_run::{PayrollRun, RunStatus};
pub use period_inputs::{DeductionInput, EarningInput, OvertimeEntry, PeriodInputs, ShiftType};
pub use warning::{OvertimeCapScope, RoutingGapReason, Warning, WarningSeverity};
