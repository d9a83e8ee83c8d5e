//! # curio-ledger
//!
//! The cross-category master list: one semi-structured Markdown document
//! tracking every accepted question and an aggregate total.
//!
//! The document is held as an in-memory structured model (ordered sections
//! holding ordered entries, prose lines preserved verbatim in place) with a
//! parser/serializer pair. Insertion and totals recomputation operate on
//! the structure, never on raw text, while the on-disk line contract stays
//! unchanged.
//!
//! Entry schema, used by scan, insert, format, and recount alike:
//!
//! ```text
//! 42. Why do cats purr? [medium]
//! ```
//!
//! Sequence numbers are global and strictly increasing across the whole
//! document, not per-section. `update_totals` is idempotent: a second run
//! with no intervening insert is a byte-level no-op.

pub mod model;
pub mod reconciler;

pub use model::{Ledger, LedgerEntry, LedgerSection, Line};
pub use reconciler::{QuestionSummary, Reconciler};
