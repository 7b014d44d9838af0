//! Error handling for manifest validation
//!
//! This module provides the document- and driver-level error types using
//! the thiserror crate for ergonomic error handling. Content problems
//! inside a manifest are never errors of this type; they are returned as
//! plain strings by the validator so that every violation in a document
//! can be reported in one pass.

use thiserror::Error;

/// Failures that prevent a document (or the whole run) from being validated
#[derive(Error, Debug)]
pub enum ManifestError {
    /// The manifest file could not be read from disk
    #[error("Error reading file: {details}")]
    ReadFailed { details: String },

    /// The manifest file is not well-formed YAML
    #[error("YAML syntax error: {details}")]
    YamlSyntax { details: String },

    /// The manifests directory does not exist
    #[error("manifests directory not found: {path}")]
    DirectoryNotFound { path: String },

    /// A validator configuration file could not be loaded
    #[error("failed to load validator config {path}: {message}")]
    Config { path: String, message: String },
}

impl ManifestError {
    /// Whether this failure is scoped to a single document
    ///
    /// Per-document failures do not abort processing of the remaining
    /// documents; run-level failures do.
    pub fn is_per_document(&self) -> bool {
        matches!(self, Self::ReadFailed { .. } | Self::YamlSyntax { .. })
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReadFailed { .. } => "READ_FAILED",
            Self::YamlSyntax { .. } => "YAML_SYNTAX",
            Self::DirectoryNotFound { .. } => "DIRECTORY_NOT_FOUND",
            Self::Config { .. } => "CONFIG",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_failed_display() {
        let error = ManifestError::ReadFailed {
            details: "No such file or directory".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Error reading file: No such file or directory"
        );
        assert!(error.is_per_document());
        assert_eq!(error.code(), "READ_FAILED");
    }

    #[test]
    fn test_yaml_syntax_display() {
        let error = ManifestError::YamlSyntax {
            details: "mapping values are not allowed in this context".to_string(),
        };

        let display = error.to_string();
        assert!(display.starts_with("YAML syntax error: "));
        assert!(error.is_per_document());
    }

    #[test]
    fn test_directory_not_found_is_run_level() {
        let error = ManifestError::DirectoryNotFound {
            path: "manifests".to_string(),
        };

        assert!(!error.is_per_document());
        assert_eq!(error.code(), "DIRECTORY_NOT_FOUND");
    }

    #[test]
    fn test_config_error_display() {
        let error = ManifestError::Config {
            path: "validator.yml".to_string(),
            message: "missing field `severity_values`".to_string(),
        };

        let display = error.to_string();
        assert!(display.contains("validator.yml"));
        assert!(display.contains("severity_values"));
        assert!(!error.is_per_document());
    }
}
