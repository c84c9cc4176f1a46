//! Bank routing for net pay.
//!
//! Free-text bank names are classified against a fixed alias table into a
//! [`BankCode`](crate::models::BankCode). Employees that cannot be routed are
//! reported as warnings, never dropped.

mod router;

pub use router::{
    BANK_ALIASES, DisbursementPlan, RouteOutcome, classify_bank, route_disbursements,
    route_employee, salary_reference,
};
