//! ValidationEngine — runs all five checks over a question, aggregates
//! issues into a graded result, and rolls results up per document.

use curio_core::config::{LengthLimits, MisconceptionTable, RedFlagTable};
use curio_core::models::{FileReport, ValidationResult};
use curio_core::question::CategoryDocument;
use serde_json::Value;
use tracing::debug;

use crate::checks::{consistency, convention, length, red_flags, schema};

/// The five-check validation engine.
///
/// Checks run in a fixed order with no short-circuiting: all issues for a
/// question are always collected. Checks that would need a missing field
/// skip silently instead of faulting.
pub struct ValidationEngine {
    limits: LengthLimits,
    red_flags: RedFlagTable,
    misconceptions: MisconceptionTable,
}

impl ValidationEngine {
    pub fn new() -> Self {
        Self {
            limits: LengthLimits::default(),
            red_flags: RedFlagTable::default(),
            misconceptions: MisconceptionTable::default(),
        }
    }

    /// Replace the length-budget policy.
    pub fn with_limits(mut self, limits: LengthLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Replace the red-flag token table.
    pub fn with_red_flags(mut self, table: RedFlagTable) -> Self {
        self.red_flags = table;
        self
    }

    /// Replace the misconception table.
    pub fn with_misconceptions(mut self, table: MisconceptionTable) -> Self {
        self.misconceptions = table;
        self
    }

    pub fn limits(&self) -> &LengthLimits {
        &self.limits
    }

    /// Validate a single raw question record. `category` is the document's
    /// display name, used to scope the misconception scan.
    pub fn validate_question(&self, q: &Value, category: &str) -> ValidationResult {
        let mut issues = schema::check(q);
        issues.extend(length::check(q, &self.limits));
        issues.extend(convention::check(q));
        issues.extend(consistency::check(q));
        issues.extend(red_flags::check(
            q,
            category,
            &self.red_flags,
            &self.misconceptions,
        ));

        let q_id = q
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string();
        let q_text = q
            .get("question_en")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        debug!(question_id = %q_id, issues = issues.len(), "question validated");
        ValidationResult::from_issues(q_id, q_text, issues)
    }

    /// Validate every question in a document and roll up the counts.
    /// The file passes only with zero critical issues.
    pub fn validate_document(&self, doc: &CategoryDocument) -> FileReport {
        let results = doc
            .questions
            .iter()
            .map(|q| self.validate_question(q, &doc.category_en))
            .collect();
        FileReport::from_results(&doc.category_en, results)
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}
