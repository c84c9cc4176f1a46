//! Non-fatal conditions reported alongside successful output.
//!
//! Warnings never stop a computation. They are collected and returned to the
//! caller, who is responsible for surfacing them (manual bank routing, audit
//! follow-up, overtime review).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Why an employee could not be placed in any bank group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingGapReason {
    /// The employee has no bank destination at all.
    NoBankDetails,
    /// The bank name matches no known alias.
    UnknownBank,
    /// The bank is known but the account number is missing or blank.
    MissingAccountNumber,
    /// A payroll record refers to an employee that was not supplied.
    EmployeeNotFound,
    /// Net pay is zero or negative, so there is nothing to transfer.
    NonPositiveNetPay,
}

/// Whether an overtime cap applies per day or per week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeCapScope {
    /// Daily cap.
    Daily,
    /// Weekly cap (ISO week, Monday start).
    Weekly,
}

/// How urgently a warning needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningSeverity {
    /// Informational.
    Low,
    /// Needs review before payment.
    Medium,
    /// Money will not move or figures disagree.
    High,
}

/// A non-fatal condition found while computing payroll or routing payments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// An employee was left out of every bank group.
    RoutingGap {
        /// The employee affected.
        employee_id: String,
        /// The bank name as captured, if any.
        bank_name: Option<String>,
        /// Why routing failed.
        reason: RoutingGapReason,
    },
    /// A stored figure disagrees with its recomputed value by more than half a cent.
    Consistency {
        /// What was checked (e.g. `record emp_001 net_pay`).
        subject: String,
        /// The recomputed value.
        expected: Decimal,
        /// The stored value.
        actual: Decimal,
    },
    /// Overtime hours exceed the statutory daily or weekly cap.
    OvertimeCapExceeded {
        /// The employee affected.
        employee_id: String,
        /// Daily or weekly cap.
        scope: OvertimeCapScope,
        /// The day (daily) or the Monday of the ISO week (weekly).
        period_start: NaiveDate,
        /// Hours worked in the period.
        hours: Decimal,
        /// The statutory cap.
        cap: Decimal,
    },
    /// Deductions exceed gross pay.
    NegativeNetPay {
        /// The employee affected.
        employee_id: String,
        /// The resulting net pay.
        net_pay: Money,
    },
}

impl Warning {
    /// A stable code identifying the type of warning.
    pub fn code(&self) -> &'static str {
        match self {
            Warning::RoutingGap { .. } => "ROUTING_GAP",
            Warning::Consistency { .. } => "CONSISTENCY_MISMATCH",
            Warning::OvertimeCapExceeded { .. } => "OVERTIME_CAP_EXCEEDED",
            Warning::NegativeNetPay { .. } => "NEGATIVE_NET_PAY",
        }
    }

    /// The severity level.
    pub fn severity(&self) -> WarningSeverity {
        match self {
            Warning::RoutingGap { .. } => WarningSeverity::High,
            Warning::Consistency { .. } => WarningSeverity::High,
            Warning::OvertimeCapExceeded { .. } => WarningSeverity::Medium,
            Warning::NegativeNetPay { .. } => WarningSeverity::High,
        }
    }

    /// A human-readable description of the warning.
    pub fn message(&self) -> String {
        match self {
            Warning::RoutingGap {
                employee_id,
                bank_name,
                reason,
            } => format!(
                "Employee {} was not routed to any bank ({:?}, bank name: {})",
                employee_id,
                reason,
                bank_name.as_deref().unwrap_or("<none>")
            ),
            Warning::Consistency {
                subject,
                expected,
                actual,
            } => format!(
                "{}: stored {} but recomputed {} (difference {})",
                subject,
                actual,
                expected,
                (*actual - *expected).abs()
            ),
            Warning::OvertimeCapExceeded {
                employee_id,
                scope,
                period_start,
                hours,
                cap,
            } => format!(
                "Employee {} worked {} overtime hours in the {:?} period starting {} (cap {})",
                employee_id,
                hours.normalize(),
                scope,
                period_start,
                cap.normalize()
            ),
            Warning::NegativeNetPay {
                employee_id,
                net_pay,
            } => format!("Employee {} has negative net pay of {}", employee_id, net_pay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routing_gap_serialization() {
        let warning = Warning::RoutingGap {
            employee_id: "emp_009".to_string(),
            bank_name: Some("Caixa Rural".to_string()),
            reason: RoutingGapReason::UnknownBank,
        };
        let json = serde_json::to_string(&warning).unwrap();
        assert!(json.contains("\"kind\":\"routing_gap\""));
        assert!(json.contains("\"reason\":\"unknown_bank\""));
        assert_eq!(warning.code(), "ROUTING_GAP");
        assert_eq!(warning.severity(), WarningSeverity::High);
    }

    #[test]
    fn test_consistency_message_shows_difference() {
        let warning = Warning::Consistency {
            subject: "summary BNU total_amount".to_string(),
            expected: Decimal::new(24575, 2),
            actual: Decimal::new(24580, 2),
        };
        let message = warning.message();
        assert!(message.contains("245.80"));
        assert!(message.contains("245.75"));
        assert!(message.contains("0.05"));
    }

    #[test]
    fn test_overtime_cap_is_medium_severity() {
        let warning = Warning::OvertimeCapExceeded {
            employee_id: "emp_001".to_string(),
            scope: OvertimeCapScope::Daily,
            period_start: NaiveDate::from_ymd_opt(2026, 1, 14).unwrap(),
            hours: Decimal::new(5, 0),
            cap: Decimal::new(4, 0),
        };
        assert_eq!(warning.severity(), WarningSeverity::Medium);
        assert!(warning.message().contains("5 overtime hours"));
    }
}
