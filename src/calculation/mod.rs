//! Statutory calculation rules for the payroll engine.
//!
//! Each rule is a pure function that takes its rule table explicitly (from
//! [`StatutoryRules`](crate::config::StatutoryRules)) and returns a result
//! carrying the computed value and an [`AuditStep`](crate::models::AuditStep).
//! Covered here: withholding income tax, social security and the contributive
//! base, overtime multipliers and caps, rate derivation and regular salary,
//! sick pay bands, annual leave, severance and the 13th-month payment.

mod annual_leave;
mod overtime;
mod salary;
mod severance;
mod sick_pay;
mod social_security;
mod thirteenth_month;
mod withholding_tax;

pub use annual_leave::{
    DEFAULT_ANNUAL_LEAVE_TIERS, annual_leave_on, compute_annual_leave_entitlement,
    years_of_service,
};
pub use overtime::{
    DEFAULT_DAILY_OVERTIME_CAP, DEFAULT_NIGHT_OVERTIME_MULTIPLIER, DEFAULT_NIGHT_SHIFT_MULTIPLIER,
    DEFAULT_REST_DAY_MULTIPLIER, DEFAULT_STANDARD_OVERTIME_MULTIPLIER,
    DEFAULT_WEEKLY_OVERTIME_CAP, OvertimePayResult, check_overtime_caps, compute_overtime_pay,
    overtime_multiplier,
};
pub use salary::{
    DEFAULT_DAYS_PER_MONTH, DEFAULT_STANDARD_WEEKLY_HOURS, DEFAULT_WEEKS_PER_YEAR,
    RegularSalaryResult, UnpaidAbsenceResult, compute_regular_salary, compute_unpaid_absence,
    daily_rate, hourly_rate,
};
pub use severance::{
    DEFAULT_SEVERANCE_DAYS_PER_YEAR, MINIMUM_SEVERANCE_SERVICE_MONTHS, SeveranceResult,
    compute_severance,
};
pub use sick_pay::{
    DEFAULT_SICK_FULL_PAY_DAYS, DEFAULT_SICK_HALF_PAY_DAYS, DEFAULT_SICK_HALF_PAY_RATE,
    SickDayBands, SickLeaveResult, compute_sick_leave, compute_sick_pay_rate,
};
pub use social_security::{
    CONTRIBUTIVE_BASE_EXCLUSIONS, DEFAULT_EMPLOYEE_SOCIAL_SECURITY_RATE,
    DEFAULT_EMPLOYER_SOCIAL_SECURITY_RATE, SocialSecurityResult, compute_social_security,
    contributive_base, is_excluded_from_contributive_base,
};
pub use thirteenth_month::{ThirteenthMonthResult, compute_thirteenth_month};
pub use withholding_tax::{
    DEFAULT_RESIDENT_THRESHOLD, DEFAULT_WITHHOLDING_TAX_RATE, WithholdingTaxResult,
    compute_withholding_tax,
};
