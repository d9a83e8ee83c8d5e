//! Red-flag and misconception scan.
//!
//! Scans the concatenation of all four explanations, case-insensitively,
//! against two data-driven tables: overgeneralization tokens (info) and
//! category-keyed misconception phrases (warning). A match is a lexical
//! signal for review, not proof of inaccuracy.

use curio_core::config::{MisconceptionTable, RedFlagTable};
use curio_core::models::{IssueTag, Severity, ValidationIssue};
use serde_json::Value;

use super::{question_id, string_array};

/// Scan explanation text for red flags. `category` is the document's
/// display name (`category_en`), the key of the misconception table.
pub fn check(
    q: &Value,
    category: &str,
    red_flags: &RedFlagTable,
    misconceptions: &MisconceptionTable,
) -> Vec<ValidationIssue> {
    let q_id = question_id(q);
    let Some(explanations) = string_array(q, "explanations_en") else {
        return Vec::new();
    };
    let all_text = explanations.join(" ").to_lowercase();
    let mut issues = Vec::new();

    for flag in &red_flags.flags {
        if all_text.contains(&flag.token.to_lowercase()) {
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Info,
                    IssueTag::Accuracy,
                    format!("Contains '{}': {}", flag.token, flag.note),
                )
                .with_suggestion("Review for overgeneralization"),
            );
        }
    }

    for m in misconceptions.for_category(category) {
        if all_text.contains(&m.phrase.to_lowercase()) {
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Warning,
                    IssueTag::Accuracy,
                    format!("Potential misconception detected: '{}'", m.phrase),
                )
                .with_suggestion(m.note.clone()),
            );
        }
    }

    issues
}
