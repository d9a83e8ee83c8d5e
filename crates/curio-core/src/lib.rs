//! # curio-core
//!
//! Foundation crate for the Curio trivia corpus toolkit.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod question;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{CategorySpec, CategoryTable, LengthLimits, MisconceptionTable, RedFlagTable};
pub use errors::{CurioError, CurioResult};
pub use models::{
    Confidence, EvidenceReport, FileReport, IssueTag, Severity, ValidationIssue, ValidationResult,
};
pub use question::{CategoryDocument, Difficulty, Question};
