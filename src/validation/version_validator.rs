//! Version Validator - Checks manifest version keys
//!
//! Version keys must be plain `MAJOR.MINOR.PATCH` strings (no pre-release
//! or build suffixes) and must appear in strictly ascending *string* order.
//!
//! # Example
//!
//! ```
//! use manifest_validator::validation::version_validator::VersionValidator;
//!
//! let validator = VersionValidator::new();
//!
//! assert!(validator.is_valid_format("1.2.3"));
//! assert!(!validator.is_valid_format("1.2.3-alpha"));
//! ```

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Three dot-separated runs of digits, nothing else
    static ref SEMVER_PATTERN: Regex = Regex::new(r"^\d+\.\d+\.\d+$").unwrap();
}

/// Validator for manifest version keys
pub struct VersionValidator;

impl Default for VersionValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionValidator {
    /// Create a new VersionValidator
    pub fn new() -> Self {
        Self
    }

    /// Check a version string against the required `MAJOR.MINOR.PATCH` form
    ///
    /// Deliberately stricter than Semantic Versioning 2.0.0: pre-release
    /// and build suffixes are rejected, leading zeros are accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use manifest_validator::validation::version_validator::VersionValidator;
    ///
    /// let validator = VersionValidator::new();
    ///
    /// assert!(validator.is_valid_format("0.1.0"));
    /// assert!(!validator.is_valid_format("v1.0.0"));
    /// assert!(!validator.is_valid_format("1.0"));
    /// ```
    pub fn is_valid_format(&self, version: &str) -> bool {
        SEMVER_PATTERN.is_match(version)
    }

    /// Check that `curr` sorts strictly after `prev`
    ///
    /// Comparison is lexicographic on the raw strings, not numeric per
    /// component: "10.0.0" sorts *before* "2.0.0". That matches how the
    /// manifest format has always been checked and is preserved as-is.
    pub fn is_ascending(&self, prev: &str, curr: &str) -> bool {
        curr > prev
    }
}
