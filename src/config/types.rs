//! Configuration types for payroll computation.
//!
//! This module contains the strongly-typed rule tables deserialized from YAML
//! configuration files. Every rule table implements `Default` with the
//! statutory values, and every table is `#[serde(default)]`, so a YAML file
//! only needs to list the values that differ (e.g. a new year's rates).

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{
    DEFAULT_ANNUAL_LEAVE_TIERS, DEFAULT_DAILY_OVERTIME_CAP, DEFAULT_DAYS_PER_MONTH,
    DEFAULT_EMPLOYEE_SOCIAL_SECURITY_RATE, DEFAULT_EMPLOYER_SOCIAL_SECURITY_RATE,
    DEFAULT_NIGHT_OVERTIME_MULTIPLIER, DEFAULT_NIGHT_SHIFT_MULTIPLIER,
    DEFAULT_RESIDENT_THRESHOLD, DEFAULT_REST_DAY_MULTIPLIER, DEFAULT_SEVERANCE_DAYS_PER_YEAR,
    DEFAULT_SICK_FULL_PAY_DAYS, DEFAULT_SICK_HALF_PAY_DAYS, DEFAULT_SICK_HALF_PAY_RATE,
    DEFAULT_STANDARD_OVERTIME_MULTIPLIER, DEFAULT_STANDARD_WEEKLY_HOURS,
    DEFAULT_WEEKLY_OVERTIME_CAP, DEFAULT_WEEKS_PER_YEAR, DEFAULT_WITHHOLDING_TAX_RATE,
    MINIMUM_SEVERANCE_SERVICE_MONTHS,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{BankCode, Originator};

/// Metadata about the jurisdiction whose rules are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code (e.g. "TL").
    pub code: String,
    /// Human-readable name.
    pub name: String,
    /// ISO currency code used for all amounts.
    pub currency: String,
    /// Version or effective date of the rule set.
    pub version: String,
}

/// Withholding income tax (WIT) rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WithholdingTaxRules {
    /// Legal reference printed in audit steps.
    pub reference: String,
    /// Flat rate as a fraction (0.10 = 10%).
    pub rate: Decimal,
    /// Monthly income below which residents pay no tax.
    pub resident_threshold: Decimal,
    /// Monthly threshold for non-residents (zero: taxed from the first unit).
    pub non_resident_threshold: Decimal,
}

impl Default for WithholdingTaxRules {
    fn default() -> Self {
        Self {
            reference: "Taxes and Duties Act 2008, Wage Income Tax".to_string(),
            rate: DEFAULT_WITHHOLDING_TAX_RATE,
            resident_threshold: DEFAULT_RESIDENT_THRESHOLD,
            non_resident_threshold: Decimal::ZERO,
        }
    }
}

/// Social security (INSS) contribution rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialSecurityRules {
    /// Legal reference printed in audit steps.
    pub reference: String,
    /// Employee share as a fraction of the contributive base.
    pub employee_rate: Decimal,
    /// Employer share as a fraction of the contributive base.
    pub employer_rate: Decimal,
}

impl Default for SocialSecurityRules {
    fn default() -> Self {
        Self {
            reference: "Social Security Law 12/2016".to_string(),
            employee_rate: DEFAULT_EMPLOYEE_SOCIAL_SECURITY_RATE,
            employer_rate: DEFAULT_EMPLOYER_SOCIAL_SECURITY_RATE,
        }
    }
}

/// Overtime multipliers and caps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OvertimeRules {
    /// Legal reference printed in audit steps.
    pub reference: String,
    /// Multiplier for ordinary overtime.
    pub standard_multiplier: Decimal,
    /// Multiplier for night-shift hours.
    pub night_shift_multiplier: Decimal,
    /// Multiplier for rest-day and public-holiday work.
    pub rest_day_multiplier: Decimal,
    /// Multiplier for overtime worked at night.
    pub night_overtime_multiplier: Decimal,
    /// Maximum overtime hours per day.
    pub daily_cap_hours: Decimal,
    /// Maximum overtime hours per week.
    pub weekly_cap_hours: Decimal,
}

impl Default for OvertimeRules {
    fn default() -> Self {
        Self {
            reference: "Labour Code (Law 4/2012), overtime".to_string(),
            standard_multiplier: DEFAULT_STANDARD_OVERTIME_MULTIPLIER,
            night_shift_multiplier: DEFAULT_NIGHT_SHIFT_MULTIPLIER,
            rest_day_multiplier: DEFAULT_REST_DAY_MULTIPLIER,
            night_overtime_multiplier: DEFAULT_NIGHT_OVERTIME_MULTIPLIER,
            daily_cap_hours: DEFAULT_DAILY_OVERTIME_CAP,
            weekly_cap_hours: DEFAULT_WEEKLY_OVERTIME_CAP,
        }
    }
}

/// Constants used to derive daily and hourly rates from a monthly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SalaryRules {
    /// Days per month used for the daily rate.
    pub days_per_month: Decimal,
    /// Normal working hours per week.
    pub standard_weekly_hours: Decimal,
    /// Weeks per year.
    pub weeks_per_year: Decimal,
}

impl Default for SalaryRules {
    fn default() -> Self {
        Self {
            days_per_month: DEFAULT_DAYS_PER_MONTH,
            standard_weekly_hours: DEFAULT_STANDARD_WEEKLY_HOURS,
            weeks_per_year: DEFAULT_WEEKS_PER_YEAR,
        }
    }
}

/// Sick-leave pay bands within the annual entitlement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SickLeaveRules {
    /// Legal reference printed in audit steps.
    pub reference: String,
    /// Days paid in full.
    pub full_pay_days: u32,
    /// Days paid at `half_pay_rate` after the full-pay days.
    pub half_pay_days: u32,
    /// Pay rate for the reduced band.
    pub half_pay_rate: Decimal,
}

impl Default for SickLeaveRules {
    fn default() -> Self {
        Self {
            reference: "Labour Code (Law 4/2012), sick leave".to_string(),
            full_pay_days: DEFAULT_SICK_FULL_PAY_DAYS,
            half_pay_days: DEFAULT_SICK_HALF_PAY_DAYS,
            half_pay_rate: DEFAULT_SICK_HALF_PAY_RATE,
        }
    }
}

/// One step of the annual-leave table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveTier {
    /// Full years of service from which the tier applies.
    pub min_years: u32,
    /// Days of annual leave.
    pub days: u32,
}

/// Annual-leave entitlement table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnualLeaveRules {
    /// Legal reference.
    pub reference: String,
    /// Tiers, in any order.
    pub tiers: Vec<LeaveTier>,
}

impl Default for AnnualLeaveRules {
    fn default() -> Self {
        Self {
            reference: "Labour Code (Law 4/2012), annual leave".to_string(),
            tiers: DEFAULT_ANNUAL_LEAVE_TIERS.to_vec(),
        }
    }
}

/// Severance rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeveranceRules {
    /// Legal reference printed in audit steps.
    pub reference: String,
    /// Days of pay per full year of service.
    pub days_per_year: Decimal,
    /// Minimum months of service before severance applies.
    pub minimum_service_months: u32,
}

impl Default for SeveranceRules {
    fn default() -> Self {
        Self {
            reference: "Labour Code (Law 4/2012), severance".to_string(),
            days_per_year: DEFAULT_SEVERANCE_DAYS_PER_YEAR,
            minimum_service_months: MINIMUM_SEVERANCE_SERVICE_MONTHS,
        }
    }
}

/// The complete statutory rule set passed explicitly to every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryRules {
    /// Withholding income tax.
    pub withholding_tax: WithholdingTaxRules,
    /// Social security.
    pub social_security: SocialSecurityRules,
    /// Overtime.
    pub overtime: OvertimeRules,
    /// Daily/hourly rate derivation.
    pub salary: SalaryRules,
    /// Sick leave.
    pub sick_leave: SickLeaveRules,
    /// Annual leave.
    pub annual_leave: AnnualLeaveRules,
    /// Severance.
    pub severance: SeveranceRules,
}

/// Originator details printed in bank files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankingConfig {
    /// Currency of all transfers.
    pub currency: String,
    /// Company name printed as the originator.
    pub originator_name: String,
    /// Account debited at each bank.
    #[serde(default)]
    pub debit_accounts: BTreeMap<BankCode, String>,
}

impl BankingConfig {
    /// Returns the originator block for a bank file.
    ///
    /// Fails with [`EngineError::BankFile`] when no debit account is configured
    /// for the bank.
    pub fn originator_for(&self, bank_code: BankCode) -> EngineResult<Originator> {
        let debit_account = self
            .debit_accounts
            .get(&bank_code)
            .filter(|account| !account.trim().is_empty())
            .ok_or_else(|| EngineError::BankFile {
                bank_code: bank_code.code().to_string(),
                message: "no debit account configured".to_string(),
            })?;

        Ok(Originator {
            name: self.originator_name.clone(),
            debit_account: debit_account.clone(),
            currency: self.currency.clone(),
        })
    }
}

/// The complete configuration loaded from a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollConfig {
    metadata: JurisdictionMetadata,
    statutory: StatutoryRules,
    banking: BankingConfig,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    pub fn new(
        metadata: JurisdictionMetadata,
        statutory: StatutoryRules,
        banking: BankingConfig,
    ) -> Self {
        Self {
            metadata,
            statutory,
            banking,
        }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory rule tables.
    pub fn statutory(&self) -> &StatutoryRules {
        &self.statutory
    }

    /// Returns the banking configuration.
    pub fn banking(&self) -> &BankingConfig {
        &self.banking
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_default_rules_match_statute() {
        let rules = StatutoryRules::default();
        assert_eq!(rules.withholding_tax.rate, dec("0.10"));
        assert_eq!(rules.withholding_tax.resident_threshold, dec("500"));
        assert_eq!(rules.social_security.employee_rate, dec("0.04"));
        assert_eq!(rules.social_security.employer_rate, dec("0.06"));
        assert_eq!(rules.overtime.daily_cap_hours, dec("4"));
        assert_eq!(rules.overtime.weekly_cap_hours, dec("16"));
        assert_eq!(rules.sick_leave.full_pay_days, 6);
        assert_eq!(rules.severance.minimum_service_months, 3);
        assert_eq!(rules.annual_leave.tiers.len(), 4);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
withholding_tax:
  rate: "0.12"
"#;
        let rules: StatutoryRules = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rules.withholding_tax.rate, dec("0.12"));
        assert_eq!(rules.withholding_tax.resident_threshold, dec("500"));
        assert_eq!(rules.social_security, SocialSecurityRules::default());
    }

    #[test]
    fn test_originator_for_configured_bank() {
        let banking = BankingConfig {
            currency: "USD".to_string(),
            originator_name: "Fundasaun Example".to_string(),
            debit_accounts: BTreeMap::from([(BankCode::Bnu, "0001112223".to_string())]),
        };

        let originator = banking.originator_for(BankCode::Bnu).unwrap();
        assert_eq!(originator.debit_account, "0001112223");
        assert_eq!(originator.currency, "USD");

        let err = banking.originator_for(BankCode::Anz).unwrap_err();
        assert!(matches!(err, EngineError::BankFile { bank_code, .. } if bank_code == "ANZ"));
    }
}
