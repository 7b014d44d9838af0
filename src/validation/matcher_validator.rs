//! Matcher Validator - Checks individual rollout rule matchers
//!
//! Each matcher in a version entry maps a client attribute (a country
//! code, a location hash, or the `default` catch-all) to a severity.
//! This module checks one matcher at a time and reports every violation
//! as a message string, so the caller can keep accumulating across the
//! whole manifest.

use lazy_static::lazy_static;
use regex::Regex;
use serde_yaml::Value;

use crate::core::config::ValidatorConfig;
use crate::validation::scalar_to_string;

lazy_static! {
    /// 64 lowercase hex characters, nothing else
    static ref LOCATION_HASH_PATTERN: Regex = Regex::new(r"^[a-f0-9]{64}$").unwrap();
}

/// Outcome of checking a single matcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherReport {
    /// Violations found in this matcher
    pub errors: Vec<String>,
    /// Whether this matcher is the `default` catch-all
    pub is_default: bool,
}

/// Validator for individual matchers
pub struct MatcherValidator {
    config: ValidatorConfig,
}

impl MatcherValidator {
    /// Create a new MatcherValidator over the given value sets
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Validate one matcher belonging to `version`
    ///
    /// An unknown `matcher_type` short-circuits the remaining checks for
    /// this matcher, so its severity is left unchecked. Observed behavior
    /// of the format, preserved as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use manifest_validator::core::config::ValidatorConfig;
    /// use manifest_validator::validation::matcher_validator::MatcherValidator;
    ///
    /// let validator = MatcherValidator::new(ValidatorConfig::default());
    /// let matcher = serde_yaml::from_str("{matcher_type: default, severity: green}").unwrap();
    ///
    /// let report = validator.validate("1.0.0", &matcher);
    /// assert!(report.errors.is_empty());
    /// assert!(report.is_default);
    /// ```
    pub fn validate(&self, version: &str, matcher: &Value) -> MatcherReport {
        let mut errors = Vec::new();
        let matcher_type = string_field(matcher, "matcher_type");

        if !self.config.is_valid_matcher_type(&matcher_type) {
            errors.push(format!(
                "Version {version}: invalid matcher_type '{matcher_type}'"
            ));
            return MatcherReport {
                errors,
                is_default: false,
            };
        }

        let is_default = matcher_type == "default";

        if matcher_type == "country" {
            let country = string_field(matcher, "matcher_value");
            if country.is_empty() || !self.config.is_valid_country(&country) {
                errors.push(format!("Version {version}: invalid country code '{country}'"));
            }
        }

        if matcher_type == "location_hash" {
            let hash = string_field(matcher, "matcher_value");
            if !LOCATION_HASH_PATTERN.is_match(&hash) {
                errors.push(format!("Version {version}: invalid location hash format"));
            }
        }

        let severity = string_field(matcher, "severity");
        if !self.config.is_valid_severity(&severity) {
            errors.push(format!("Version {version}: invalid severity '{severity}'"));
        }

        MatcherReport { errors, is_default }
    }
}

/// Read a field as a string, empty if absent or not a mapping
fn string_field(matcher: &Value, key: &str) -> String {
    matcher.get(key).map(scalar_to_string).unwrap_or_default()
}
