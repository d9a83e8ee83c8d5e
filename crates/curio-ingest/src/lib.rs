//! # curio-ingest
//!
//! Turns authored drafts into accepted corpus questions:
//!
//! 1. load a YAML draft file,
//! 2. allocate collision-free IDs,
//! 3. complete each draft (translation, timestamps) via the builder,
//! 4. append to the category document,
//! 5. run the validation pipeline,
//! 6. reconcile the master list.
//!
//! A failing translator degrades to placeholder text; a failing ledger
//! reconciliation degrades to a warning. Accepted corpus content is never
//! rolled back by a downstream step.

pub mod builder;
pub mod draft;
pub mod workflow;

pub use builder::QuestionBuilder;
pub use draft::{DraftFile, QuestionDraft};
pub use workflow::{IngestOptions, IngestOutcome, IngestWorkflow};
