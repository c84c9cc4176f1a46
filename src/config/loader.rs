//! Reads a jurisdiction directory (`jurisdiction.yaml`, `statutory.yaml`,
//! `banking.yaml`) into a [`ConfigLoader`].

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{BankCode, Originator};

use super::types::{BankingConfig, JurisdictionMetadata, PayrollConfig, StatutoryRules};

/// Loads and provides access to payroll configuration.
///
/// # Directory Structure
///
/// ```text
/// config/timor-leste/
/// ├── jurisdiction.yaml  # Jurisdiction metadata and currency
/// ├── statutory.yaml     # Tax, social security, overtime, leave, severance tables
/// └── banking.yaml       # Originator name and debit accounts per bank
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/timor-leste").unwrap();
/// println!("Loaded rules: {}", loader.jurisdiction().name);
/// println!("WIT rate: {}", loader.statutory().withholding_tax.rate);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Reads every jurisdiction file under `path`.
    ///
    /// Returns an error if any required file is missing or contains invalid YAML.
    ///
    /// ```no_run
    /// use payroll_engine::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/timor-leste")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<JurisdictionMetadata>(&path.join("jurisdiction.yaml"))?;
        let statutory = Self::load_yaml::<StatutoryRules>(&path.join("statutory.yaml"))?;
        let banking = Self::load_yaml::<BankingConfig>(&path.join("banking.yaml"))?;

        debug!(
            path = %path.display(),
            jurisdiction = %metadata.code,
            version = %metadata.version,
            "Loaded payroll configuration"
        );

        Ok(Self {
            config: PayrollConfig::new(metadata, statutory, banking),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Reads one file and deserializes it.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        self.config.jurisdiction()
    }

    /// Returns the statutory rule tables.
    pub fn statutory(&self) -> &StatutoryRules {
        self.config.statutory()
    }

    /// Returns the banking configuration.
    pub fn banking(&self) -> &BankingConfig {
        self.config.banking()
    }

    /// Returns the originator block for a bank file.
    pub fn originator_for(&self, bank_code: BankCode) -> EngineResult<Originator> {
        self.config.banking().originator_for(bank_code)
    }
}
