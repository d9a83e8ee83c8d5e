//! Required-field and shape checks. Every violation is critical.

use curio_core::constants::{CHOICE_COUNT, REQUIRED_QUESTION_FIELDS};
use curio_core::models::{IssueTag, Severity, ValidationIssue};
use serde_json::Value;

use super::question_id;

/// Check one raw question record against the field/shape contract.
///
/// Missing optional fields (timestamps) are not this check's concern.
pub fn check(q: &Value) -> Vec<ValidationIssue> {
    let q_id = question_id(q);
    let mut issues = Vec::new();

    for field in REQUIRED_QUESTION_FIELDS {
        if q.get(field).is_none() {
            issues.push(ValidationIssue::new(
                &q_id,
                Severity::Critical,
                IssueTag::Format,
                format!("Missing required field: {field}"),
            ));
        }
    }

    for field in ["choices_en", "explanations_en"] {
        if let Some(items) = q.get(field).and_then(Value::as_array) {
            if items.len() != CHOICE_COUNT {
                issues.push(ValidationIssue::new(
                    &q_id,
                    Severity::Critical,
                    IssueTag::Format,
                    format!(
                        "{field} must have exactly {CHOICE_COUNT} items, found {}",
                        items.len()
                    ),
                ));
            }
        }
    }

    if let Some(ca) = q.get("correct_answer") {
        let in_range = ca.as_i64().is_some_and(|i| (0..CHOICE_COUNT as i64).contains(&i));
        if !in_range {
            issues.push(ValidationIssue::new(
                &q_id,
                Severity::Critical,
                IssueTag::Format,
                format!("correct_answer must be 0-{}, found {ca}", CHOICE_COUNT - 1),
            ));
        }
    }

    issues
}
