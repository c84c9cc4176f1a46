//! Annual leave entitlement by length of service.

use chrono::{Datelike, NaiveDate};

use crate::config::{AnnualLeaveRules, LeaveTier};

/// Statutory annual leave table.
pub const DEFAULT_ANNUAL_LEAVE_TIERS: [LeaveTier; 4] = [
    LeaveTier { min_years: 0, days: 12 },
    LeaveTier { min_years: 3, days: 15 },
    LeaveTier { min_years: 6, days: 18 },
    LeaveTier { min_years: 9, days: 22 },
];

/// Counts the full years of service between `hire_date` and `as_of`.
///
/// Returns 0 when `as_of` is before the hire date. An employee hired on
/// 29 February completes a year on 1 March in non-leap years.
///
/// ```
/// use payroll_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2020, 3, 15).unwrap();
/// assert_eq!(years_of_service(hired, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()), 5);
/// assert_eq!(years_of_service(hired, NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()), 6);
/// ```
pub fn years_of_service(hire_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - hire_date.year();
    if (as_of.month(), as_of.day()) < (hire_date.month(), hire_date.day()) {
        years -= 1;
    }
    u32::try_from(years).unwrap_or(0)
}

/// Returns the annual leave days for the given full years of service.
///
/// The highest tier whose `min_years` is at or below `years_of_service`
/// applies; tiers may be listed in any order.
pub fn compute_annual_leave_entitlement(years_of_service: u32, rules: &AnnualLeaveRules) -> u32 {
    rules
        .tiers
        .iter()
        .filter(|tier| tier.min_years <= years_of_service)
        .max_by_key(|tier| tier.min_years)
        .map_or(0, |tier| tier.days)
}

/// Returns the annual leave days an employee is entitled to on a date.
///
/// Zero before the hire date.
pub fn annual_leave_on(hire_date: NaiveDate, as_of: NaiveDate, rules: &AnnualLeaveRules) -> u32 {
    if as_of < hire_date {
        return 0;
    }
    compute_annual_leave_entitlement(years_of_service(hire_date, as_of), rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_entitlement_tiers() {
        let rules = AnnualLeaveRules::default();
        assert_eq!(compute_annual_leave_entitlement(0, &rules), 12);
        assert_eq!(compute_annual_leave_entitlement(2, &rules), 12);
        assert_eq!(compute_annual_leave_entitlement(3, &rules), 15);
        assert_eq!(compute_annual_leave_entitlement(5, &rules), 15);
        assert_eq!(compute_annual_leave_entitlement(6, &rules), 18);
        assert_eq!(compute_annual_leave_entitlement(8, &rules), 18);
        assert_eq!(compute_annual_leave_entitlement(9, &rules), 22);
        assert_eq!(compute_annual_leave_entitlement(30, &rules), 22);
    }

    #[test]
    fn test_unordered_tiers() {
        let rules = AnnualLeaveRules {
            tiers: vec![
                LeaveTier { min_years: 5, days: 20 },
                LeaveTier { min_years: 0, days: 10 },
            ],
            ..AnnualLeaveRules::default()
        };
        assert_eq!(compute_annual_leave_entitlement(4, &rules), 10);
        assert_eq!(compute_annual_leave_entitlement(7, &rules), 20);
    }

    #[test]
    fn test_empty_table_is_zero() {
        let rules = AnnualLeaveRules {
            tiers: vec![],
            ..AnnualLeaveRules::default()
        };
        assert_eq!(compute_annual_leave_entitlement(10, &rules), 0);
    }

    #[test]
    fn test_years_of_service_counts_full_years() {
        let hired = date(2017, 7, 1);
        assert_eq!(years_of_service(hired, date(2017, 7, 1)), 0);
        assert_eq!(years_of_service(hired, date(2020, 6, 30)), 2);
        assert_eq!(years_of_service(hired, date(2020, 7, 1)), 3);
        assert_eq!(years_of_service(hired, date(2016, 1, 1)), 0);
    }

    #[test]
    fn test_leap_day_hire() {
        let hired = date(2024, 2, 29);
        assert_eq!(years_of_service(hired, date(2025, 2, 28)), 0);
        assert_eq!(years_of_service(hired, date(2025, 3, 1)), 1);
        assert_eq!(years_of_service(hired, date(2028, 2, 29)), 4);
    }

    #[test]
    fn test_annual_leave_on_date() {
        let rules = AnnualLeaveRules::default();
        assert_eq!(annual_leave_on(date(2017, 7, 1), date(2026, 7, 1), &rules), 22);
        assert_eq!(annual_leave_on(date(2017, 7, 1), date(2026, 6, 30), &rules), 18);
        assert_eq!(annual_leave_on(date(2027, 1, 1), date(2026, 6, 30), &rules), 0);
    }
}
