//! Identifier allocation.
//!
//! IDs are `<prefix>_<NNN>` with the prefix fixed per category and the
//! numeric suffix strictly increasing. The allocator is a pure function of
//! on-disk state: it computes the next free IDs but reserves nothing.
//!
//! Caller contract: persist newly created records before allocating again.
//! Two overlapping ingestion runs against the same directory will receive
//! colliding IDs; single-writer use needs no coordination. If concurrent
//! ingestion ever becomes a requirement, this is the seam to replace with
//! a paired `reserve`/`commit` API.

use curio_core::constants::ID_PAD_WIDTH;
use curio_core::errors::CorpusError;
use serde_json::Value;

use crate::store::CorpusStore;

/// Summary of a category's allocation state.
#[derive(Debug, Clone)]
pub struct CategoryInfo {
    pub name: String,
    pub prefix: String,
    pub filename: String,
    pub exists: bool,
    pub question_count: usize,
    pub next_id: String,
}

/// Computes the next collision-free question IDs for a category.
pub struct IdAllocator<'a> {
    store: &'a CorpusStore,
}

impl<'a> IdAllocator<'a> {
    pub fn new(store: &'a CorpusStore) -> Self {
        Self { store }
    }

    /// The next free ID for `category`. A missing document or empty
    /// question list starts the sequence at 1. Existing IDs that do not
    /// match `<prefix>_<number>` are ignored, not fatal.
    pub fn next_id(&self, category: &str) -> Result<String, CorpusError> {
        let spec = self.store.spec(category)?;
        let max = self.max_suffix(category, &spec.prefix)?;
        Ok(format_id(&spec.prefix, max + 1))
    }

    /// The next `count` consecutive free IDs for `category`.
    pub fn next_n_ids(&self, category: &str, count: usize) -> Result<Vec<String>, CorpusError> {
        let spec = self.store.spec(category)?;
        let max = self.max_suffix(category, &spec.prefix)?;
        Ok((1..=count).map(|i| format_id(&spec.prefix, max + i)).collect())
    }

    /// Allocation-relevant facts about a category.
    pub fn category_info(&self, category: &str) -> Result<CategoryInfo, CorpusError> {
        let spec = self.store.spec(category)?.clone();
        let exists = self.store.exists(category)?;
        let question_count = if exists {
            self.questions(category)?.len()
        } else {
            0
        };
        Ok(CategoryInfo {
            next_id: self.next_id(category)?,
            name: spec.name,
            prefix: spec.prefix,
            filename: spec.filename,
            exists,
            question_count,
        })
    }

    fn questions(&self, category: &str) -> Result<Vec<Value>, CorpusError> {
        let raw = self.store.load_raw(category)?;
        Ok(raw
            .get("questions")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default())
    }

    /// Highest numeric suffix among well-formed IDs with this prefix;
    /// 0 when the document is missing or holds none.
    fn max_suffix(&self, category: &str, prefix: &str) -> Result<usize, CorpusError> {
        if !self.store.exists(category)? {
            return Ok(0);
        }
        let marker = format!("{prefix}_");
        let max = self
            .questions(category)?
            .iter()
            .filter_map(|q| q.get("id").and_then(Value::as_str))
            .filter_map(|id| id.strip_prefix(&marker))
            .filter_map(|suffix| suffix.parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        Ok(max)
    }
}

fn format_id(prefix: &str, number: usize) -> String {
    let width = ID_PAD_WIDTH;
    format!("{prefix}_{number:0width$}")
}
