pub mod core;
pub mod orchestration;
pub mod validation;

pub use self::core::{ManifestError, ValidatorConfig};
pub use orchestration::{BatchReport, BatchValidator, FileReport};
pub use validation::{ManifestValidator, MatcherReport, MatcherValidator, VersionValidator};
