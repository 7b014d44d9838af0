pub mod manifest_validator;
pub mod matcher_validator;
pub mod version_validator;

pub use manifest_validator::ManifestValidator;
pub use matcher_validator::{MatcherReport, MatcherValidator};
pub use version_validator::VersionValidator;

use serde_yaml::Value;

/// Render a YAML scalar for an error message
///
/// Absent and null values render as the empty string; non-scalar values
/// render through serde_yaml so the message still names what was found.
pub(crate) fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}
