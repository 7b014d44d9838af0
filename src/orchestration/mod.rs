//! Orchestration layer for manifest validation
//!
//! Wraps the pure validator with the filesystem-facing driver: directory
//! scanning, per-file parsing, and report aggregation.

pub mod batch_validator;

pub use batch_validator::{BatchReport, BatchValidator, FileReport};
