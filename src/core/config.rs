//! Configuration for the manifest validator
//!
//! The enumerated value sets the validator checks against (severities,
//! matcher types, country codes) are plain data, not hard-wired globals,
//! so tests and deployments can substitute their own sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;

use crate::core::error::ManifestError;

/// ISO 3166-1 alpha-2 country codes accepted by the default configuration
///
/// A fixed subset; membership is configuration, not derived data.
const DEFAULT_COUNTRIES: &[&str] = &[
    "US", "GB", "DE", "FR", "IT", "ES", "NL", "BE", "AT", "CH", //
    "PL", "CZ", "SK", "HU", "RO", "BG", "HR", "SI", "SE", "NO", //
    "DK", "FI", "IE", "PT", "GR", "LU", "EE", "LV", "LT", "CY", //
    "MT", "IS",
];

/// Severity levels a matcher may carry
const DEFAULT_SEVERITIES: &[&str] = &["green", "yellow", "red"];

/// Matcher types a rollout rule may use
const DEFAULT_MATCHER_TYPES: &[&str] = &["default", "country", "location_hash"];

/// Value sets the validator checks manifest fields against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Allowed `severity` values
    #[serde(default = "default_severities")]
    pub severity_values: BTreeSet<String>,

    /// Allowed `matcher_type` values
    #[serde(default = "default_matcher_types")]
    pub matcher_types: BTreeSet<String>,

    /// Allowed `matcher_value` codes for `country` matchers
    #[serde(default = "default_countries")]
    pub valid_countries: BTreeSet<String>,
}

fn to_set(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn default_severities() -> BTreeSet<String> {
    to_set(DEFAULT_SEVERITIES)
}

fn default_matcher_types() -> BTreeSet<String> {
    to_set(DEFAULT_MATCHER_TYPES)
}

fn default_countries() -> BTreeSet<String> {
    to_set(DEFAULT_COUNTRIES)
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            severity_values: default_severities(),
            matcher_types: default_matcher_types(),
            valid_countries: default_countries(),
        }
    }
}

impl ValidatorConfig {
    /// Load a configuration from a YAML file
    ///
    /// Any field left out of the file keeps its default set, so a config
    /// that only overrides `valid_countries` stays valid.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use manifest_validator::core::config::ValidatorConfig;
    /// use std::path::Path;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let config = ValidatorConfig::from_yaml(Path::new("validator.yml")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn from_yaml(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| ManifestError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| ManifestError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Check a `severity` value against the configured set
    pub fn is_valid_severity(&self, severity: &str) -> bool {
        self.severity_values.contains(severity)
    }

    /// Check a `matcher_type` value against the configured set
    pub fn is_valid_matcher_type(&self, matcher_type: &str) -> bool {
        self.matcher_types.contains(matcher_type)
    }

    /// Check a country code against the configured set
    pub fn is_valid_country(&self, country: &str) -> bool {
        self.valid_countries.contains(country)
    }
}
