//! # curio-factcheck
//!
//! Web-backed evidence gathering for question validation. No language
//! model keys required: key terms (extracted locally by the pipeline) are
//! looked up against Wikipedia, and content-word overlap between the
//! correct explanation and article extracts drives an advisory confidence
//! grade.
//!
//! Low confidence does not mean incorrect; it means coverage was limited
//! and a manual review is recommended.

pub mod sources;
pub mod wikipedia;

pub use sources::SourceTable;
pub use wikipedia::WikipediaEvidence;
