//! # curio-corpus
//!
//! The on-disk question corpus: one JSON document per category, plus the
//! identifier allocator that computes collision-free question IDs from
//! existing records.
//!
//! Documents are read-modify-write with a single writer assumed; saves go
//! through a temp-file + rename so a crash never leaves a half-written
//! document.

pub mod allocator;
pub mod store;

pub use allocator::{CategoryInfo, IdAllocator};
pub use store::CorpusStore;
