//! Configuration loading and management for the payroll engine.
//!
//! This module provides the statutory rule tables (withholding tax, social
//! security, overtime, leave, severance) and the banking configuration, loaded
//! from YAML files or built from statutory defaults.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/timor-leste").unwrap();
//! println!("Loaded rules for: {}", config.jurisdiction().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AnnualLeaveRules, BankingConfig, JurisdictionMetadata, LeaveTier, OvertimeRules,
    PayrollConfig, SalaryRules, SeveranceRules, SickLeaveRules, SocialSecurityRules,
    StatutoryRules, WithholdingTaxRules,
};
