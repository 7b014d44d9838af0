//! Manifest Validator - Validates rollout version manifests
//!
//! A manifest maps semantic-version keys to release entries, each carrying
//! a `released_at` timestamp and a list of rollout matchers. This module
//! checks a parsed manifest document and reports every violation found as
//! a human-readable string; an empty result means the manifest is valid.
//!
//! The validator never fails on manifest content. Only two shapes return
//! early: a document without a `versions` mapping, and an empty `versions`
//! mapping. Everything else accumulates.
//!
//! # Example
//!
//! ```
//! use manifest_validator::validation::manifest_validator::ManifestValidator;
//!
//! let validator = ManifestValidator::new();
//! let manifest = serde_yaml::from_str(r#"
//! versions:
//!   "1.0.0":
//!     released_at: "2024-01-01T00:00:00Z"
//!     matchers:
//!       - matcher_type: default
//!         severity: green
//! "#).unwrap();
//!
//! assert!(validator.validate(&manifest).is_empty());
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_yaml::Value;

use crate::core::config::ValidatorConfig;
use crate::validation::matcher_validator::MatcherValidator;
use crate::validation::scalar_to_string;
use crate::validation::version_validator::VersionValidator;

/// Validator for rollout manifest documents
pub struct ManifestValidator {
    versions: VersionValidator,
    matchers: MatcherValidator,
}

impl Default for ManifestValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestValidator {
    /// Create a validator with the default value sets
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a validator over custom value sets
    ///
    /// # Examples
    ///
    /// ```
    /// use manifest_validator::core::config::ValidatorConfig;
    /// use manifest_validator::validation::manifest_validator::ManifestValidator;
    ///
    /// let validator = ManifestValidator::with_config(ValidatorConfig::default());
    /// ```
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            versions: VersionValidator::new(),
            matchers: MatcherValidator::new(config),
        }
    }

    /// Validate a parsed manifest document
    ///
    /// Returns every violation found, in check order: version-key format
    /// and ordering first, then per-version entry checks. The input shape
    /// is not trusted; anything that is not the expected mapping/sequence
    /// turns into an error message rather than a panic.
    pub fn validate(&self, manifest: &Value) -> Vec<String> {
        let versions = match manifest.get("versions").and_then(Value::as_mapping) {
            Some(m) => m,
            None => return vec!["Missing 'versions' key".to_string()],
        };
        if versions.is_empty() {
            return vec!["No versions defined".to_string()];
        }

        let mut errors = Vec::new();
        let keys: Vec<String> = versions.keys().map(scalar_to_string).collect();

        // Version keys: format, then strictly-ascending string order.
        for (i, version) in keys.iter().enumerate() {
            if !self.versions.is_valid_format(version) {
                errors.push(format!("Invalid semantic version format: {version}"));
            }

            if i > 0 {
                let prev = &keys[i - 1];
                if !self.versions.is_ascending(prev, version) {
                    errors.push(format!("Versions not in ascending order: {prev} -> {version}"));
                }
            }
        }

        for (key, entry) in versions {
            let version = scalar_to_string(key);
            self.validate_entry(&version, entry, &mut errors);
        }

        errors
    }

    /// Check one version entry: timestamp, matcher list, default presence
    fn validate_entry(&self, version: &str, entry: &Value, errors: &mut Vec<String>) {
        match entry.get("released_at") {
            None => errors.push(format!("Version {version}: missing 'released_at'")),
            Some(timestamp) => {
                let valid = timestamp.as_str().is_some_and(is_valid_iso8601);
                if !valid {
                    errors.push(format!("Version {version}: invalid ISO 8601 timestamp"));
                }
            }
        }

        // A missing (or non-list) matcher list ends this version's checks.
        let matchers = match entry.get("matchers").and_then(Value::as_sequence) {
            Some(seq) => seq,
            None => {
                errors.push(format!("Version {version}: missing 'matchers'"));
                return;
            }
        };

        let mut has_default = false;
        for matcher in matchers {
            let report = self.matchers.validate(version, matcher);
            has_default |= report.is_default;
            errors.extend(report.errors);
        }

        if !has_default {
            errors.push(format!("Version {version}: missing default matcher"));
        }
    }
}

/// Check a timestamp the way `datetime.fromisoformat` would
///
/// A trailing `Z` is treated as `+00:00`; datetimes with any offset,
/// naive datetimes, and bare dates all pass.
fn is_valid_iso8601(timestamp: &str) -> bool {
    let normalized = match timestamp.strip_suffix('Z') {
        Some(stripped) => format!("{stripped}+00:00"),
        None => timestamp.to_string(),
    };

    DateTime::parse_from_rfc3339(&normalized).is_ok()
        || normalized.parse::<NaiveDateTime>().is_ok()
        || normalized.parse::<NaiveDate>().is_ok()
}
