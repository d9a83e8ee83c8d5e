//! Explanation convention checks.
//!
//! The explanation paired with the correct choice opens with the
//! affirmative marker; every other explanation opens with the negative
//! marker. Marker violations are style warnings. A degenerate explanation
//! (under the minimum trimmed length) is critical regardless of markers.

use curio_core::constants::{CHOICE_COUNT, CORRECT_MARKER, MIN_EXPLANATION_CHARS, WRONG_MARKER};
use curio_core::models::{IssueTag, Severity, ValidationIssue};
use serde_json::Value;

use super::{correct_index, question_id, string_array};

/// Check explanation markers and degeneracy. Emits nothing when the
/// explanations array is absent or wrong-shaped; the schema check already
/// reported that.
pub fn check(q: &Value) -> Vec<ValidationIssue> {
    let q_id = question_id(q);
    let Some(explanations) = string_array(q, "explanations_en") else {
        return Vec::new();
    };
    if explanations.len() != CHOICE_COUNT {
        return Vec::new();
    }

    let correct = correct_index(q);
    let mut issues = Vec::new();

    if let Some(idx) = correct {
        let exp = explanations[idx];
        if !exp.starts_with(CORRECT_MARKER) {
            let head: String = exp.chars().take(50).collect();
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Warning,
                    IssueTag::Clarity,
                    format!("Correct answer explanation should start with '{CORRECT_MARKER}'"),
                )
                .with_suggestion(format!("Current: '{head}...'")),
            );
        }
    }

    for (i, exp) in explanations.iter().enumerate() {
        if Some(i) == correct {
            continue;
        }
        if !exp.starts_with(WRONG_MARKER) {
            let head: String = exp.chars().take(50).collect();
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Warning,
                    IssueTag::Clarity,
                    format!("Wrong answer explanation[{i}] should start with '{WRONG_MARKER}'"),
                )
                .with_suggestion(format!("Current: '{head}...'")),
            );
        }
    }

    for (i, exp) in explanations.iter().enumerate() {
        if exp.trim().chars().count() < MIN_EXPLANATION_CHARS {
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Critical,
                    IssueTag::Clarity,
                    format!("Explanation[{i}] is too short or empty"),
                )
                .with_suggestion("Provide meaningful explanation"),
            );
        }
    }

    issues
}
