//! Character-budget checks. Purely observational; overruns are warnings,
//! the soft total-explanation budget is advisory info.

use curio_core::config::LengthLimits;
use curio_core::models::{IssueTag, Severity, ValidationIssue};
use serde_json::Value;

use super::{question_id, string_array};

/// Check every budgeted field of a raw question against `limits`.
/// Counts are characters, not bytes.
pub fn check(q: &Value, limits: &LengthLimits) -> Vec<ValidationIssue> {
    let q_id = question_id(q);
    let mut issues = Vec::new();

    for (field, max) in [
        ("question_en", limits.question_en_max),
        ("question_zh", limits.question_zh_max),
    ] {
        if let Some(text) = q.get(field).and_then(Value::as_str) {
            let len = text.chars().count();
            if len > max {
                issues.push(
                    ValidationIssue::new(
                        &q_id,
                        Severity::Warning,
                        IssueTag::Format,
                        format!("{field} too long: {len} chars (max {max})"),
                    )
                    .with_suggestion("Shorten for mobile display"),
                );
            }
        }
    }

    for (field, max) in [
        ("choices_en", limits.choice_en_max),
        ("choices_zh", limits.choice_zh_max),
    ] {
        if let Some(choices) = string_array(q, field) {
            for (i, choice) in choices.iter().enumerate() {
                let len = choice.chars().count();
                if len > max {
                    let head: String = choice.chars().take(max.saturating_sub(3)).collect();
                    issues.push(
                        ValidationIssue::new(
                            &q_id,
                            Severity::Warning,
                            IssueTag::Format,
                            format!("{field}[{i}] too long: {len} chars (max {max})"),
                        )
                        .with_suggestion(format!("Shorten: '{head}...'")),
                    );
                }
            }
        }
    }

    if let Some(explanations) = string_array(q, "explanations_en") {
        let total: usize = explanations.iter().map(|e| e.chars().count()).sum();
        if total > limits.explanation_total_soft_max {
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Info,
                    IssueTag::Format,
                    format!(
                        "Total explanations_en: {total} chars (recommend <{} for mobile)",
                        limits.explanation_total_soft_max
                    ),
                )
                .with_suggestion("Consider condensing explanations"),
            );
        }
    }

    issues
}
