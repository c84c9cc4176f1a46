//! Audit trail models.
//!
//! Every statutory rule application records an [`AuditStep`] so that a payroll
//! record can be explained line by line to an employee or an auditor.

use serde::{Deserialize, Serialize};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "withholding_tax".to_string(),
///     rule_name: "Withholding Income Tax".to_string(),
///     legal_ref: "Taxes and Duties Act 2008, Wage Income Tax".to_string(),
///     input: serde_json::json!({"gross_income": "600.00", "residency": "resident"}),
///     output: serde_json::json!({"tax": "10.00"}),
///     reasoning: "10% of $100.00 above the $500.00 resident threshold = $10.00".to_string(),
/// };
/// assert_eq!(step.rule_id, "withholding_tax");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the legal instrument behind this rule.
    pub legal_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
