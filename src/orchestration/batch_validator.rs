//! Batch Validator - Validates every manifest in a directory
//!
//! Features:
//! - Scans a directory for `.yml` / `.yaml` manifest files
//! - Isolates read and parse failures to the file they occurred in
//! - Detailed per-file reporting with an overall success flag

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tokio::fs;
use walkdir::WalkDir;

use crate::core::config::ValidatorConfig;
use crate::core::error::ManifestError;
use crate::validation::manifest_validator::ManifestValidator;

/// Validation outcome for a single manifest file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// File name of the manifest
    pub file: String,

    /// Violations found in this manifest
    pub errors: Vec<String>,
}

/// Aggregated outcome of a directory run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Number of manifest files checked
    pub checked: usize,

    /// Files that produced at least one error
    pub failures: Vec<FileReport>,
}

impl BatchReport {
    /// True iff no file produced any error
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// BatchValidator - Validates every manifest file in a directory
pub struct BatchValidator {
    validator: ManifestValidator,
}

impl Default for BatchValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchValidator {
    /// Create a BatchValidator with the default value sets
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Create a BatchValidator over custom value sets
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self {
            validator: ManifestValidator::with_config(config),
        }
    }

    /// Validate every manifest file directly inside `dir`
    ///
    /// Files are processed in sorted name order so reports are stable.
    /// A missing directory is the only run-level failure; anything wrong
    /// with an individual file lands in that file's report.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use manifest_validator::orchestration::batch_validator::BatchValidator;
    /// use std::path::Path;
    ///
    /// # async fn example() -> anyhow::Result<()> {
    /// let validator = BatchValidator::new();
    /// let report = validator.validate_dir(Path::new("manifests")).await?;
    ///
    /// if report.success() {
    ///     println!("All manifest files are valid");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn validate_dir(&self, dir: &Path) -> Result<BatchReport, ManifestError> {
        if !dir.is_dir() {
            return Err(ManifestError::DirectoryNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut files: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| {
                matches!(
                    path.extension().and_then(OsStr::to_str),
                    Some("yml") | Some("yaml")
                )
            })
            .collect();
        files.sort();

        let mut report = BatchReport {
            checked: 0,
            failures: Vec::new(),
        };

        for path in files {
            report.checked += 1;
            let errors = self.validate_file(&path).await;
            if !errors.is_empty() {
                report.failures.push(FileReport {
                    file: file_name_of(&path),
                    errors,
                });
            }
        }

        Ok(report)
    }

    /// Validate a single manifest file
    ///
    /// Read and parse failures come back as the file's whole error list;
    /// otherwise the content is handed to the manifest validator.
    pub async fn validate_file(&self, path: &Path) -> Vec<String> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) => {
                return vec![
                    ManifestError::ReadFailed {
                        details: e.to_string(),
                    }
                    .to_string(),
                ];
            }
        };

        let manifest: Value = match serde_yaml::from_str(&content) {
            Ok(value) => value,
            Err(e) => {
                return vec![
                    ManifestError::YamlSyntax {
                        details: e.to_string(),
                    }
                    .to_string(),
                ];
            }
        };

        self.validator.validate(&manifest)
    }
}

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    const VALID_MANIFEST: &str = r#"
versions:
  "1.0.0":
    released_at: "2024-01-01T00:00:00Z"
    matchers:
      - matcher_type: default
        severity: green
"#;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        let mut file = std::fs::File::create(dir.path().join(name)).unwrap();
        write!(file, "{}", content).unwrap();
    }

    #[tokio::test]
    async fn test_all_valid() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.yml", VALID_MANIFEST);
        write_file(&dir, "b.yaml", VALID_MANIFEST);

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        assert_eq!(report.checked, 2);
        assert!(report.success());
    }

    #[tokio::test]
    async fn test_failure_is_isolated_to_its_file() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "bad.yml", "versions: {}");
        write_file(&dir, "good.yml", VALID_MANIFEST);

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        assert_eq!(report.checked, 2);
        assert!(!report.success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "bad.yml");
        assert_eq!(report.failures[0].errors, vec!["No versions defined".to_string()]);
    }

    #[tokio::test]
    async fn test_yaml_syntax_error_reported_per_file() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "broken.yml", "versions: [unclosed\n  nested: x");
        write_file(&dir, "good.yml", VALID_MANIFEST);

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].file, "broken.yml");
        assert_eq!(report.failures[0].errors.len(), 1);
        assert!(report.failures[0].errors[0].starts_with("YAML syntax error: "));
    }

    #[tokio::test]
    async fn test_non_manifest_files_ignored() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "notes.txt", "not yaml");
        write_file(&dir, "manifest.yml", VALID_MANIFEST);

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        assert_eq!(report.checked, 1);
        assert!(report.success());
    }

    #[tokio::test]
    async fn test_subdirectories_not_descended() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "top.yml", VALID_MANIFEST);
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        let mut file = std::fs::File::create(dir.path().join("nested/inner.yml")).unwrap();
        write!(file, "versions: {{}}").unwrap();

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        assert_eq!(report.checked, 1);
        assert!(report.success());
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("manifests");

        let err = BatchValidator::new().validate_dir(&missing).await.unwrap_err();

        assert_eq!(err.code(), "DIRECTORY_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_validate_missing_file() {
        let dir = TempDir::new().unwrap();
        let errors = BatchValidator::new()
            .validate_file(&dir.path().join("nope.yml"))
            .await;

        assert_eq!(errors.len(), 1);
        assert!(errors[0].starts_with("Error reading file: "));
    }

    #[tokio::test]
    async fn test_report_serializes_to_json() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "bad.yml", "{}");

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains("\"checked\":1"));
        assert!(json.contains("Missing 'versions' key"));
    }

    #[tokio::test]
    async fn test_reports_are_sorted_by_file_name() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "z.yml", "{}");
        write_file(&dir, "a.yml", "{}");

        let report = BatchValidator::new().validate_dir(dir.path()).await.unwrap();

        let names: Vec<&str> = report.failures.iter().map(|f| f.file.as_str()).collect();
        assert_eq!(names, vec!["a.yml", "z.yml"]);
    }
}
