//! Payroll record construction and run aggregation.
//!
//! - [`PayrollRecordBuilder`] turns an employee and their period inputs into a
//!   [`PayrollRecord`](crate::models::PayrollRecord).
//! - [`RunTotals`] and [`group_by_allocation`] roll records up for a run.
//! - [`verify_record`], [`verify_run_totals`] and [`verify_summary`] cross-check
//!   stored figures against recomputed ones.

mod aggregator;
mod builder;
mod consistency;

pub use aggregator::{AllocationKey, RunTotals, UNASSIGNED_GROUP, group_by_allocation};
pub use builder::{BatchOutcome, PayrollRecordBuilder, record_id};
pub use consistency::{CONSISTENCY_TOLERANCE, verify_record, verify_run_totals, verify_summary};
