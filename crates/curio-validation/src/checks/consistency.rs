//! Choice/explanation contradiction heuristic.
//!
//! Keyword co-occurrence, not semantic parsing: a negation token in the
//! correct choice paired with an affirming token in its explanation is a
//! contradiction signal. Deliberately conservative; matches surface as
//! warnings recommending manual review, never as blocking errors.

use curio_core::models::{IssueTag, Severity, ValidationIssue};
use serde_json::Value;

use super::{correct_index, question_id, string_array};

/// Negation/affirmation token pairs scanned on the correct choice.
const CONTRADICTION_PAIRS: [(&str, &str); 1] = [("doesn't", "does")];

/// Flag the correct choice when its text negates what its explanation
/// affirms. Emits nothing when choices or explanations are absent.
pub fn check(q: &Value) -> Vec<ValidationIssue> {
    let q_id = question_id(q);
    let (Some(choices), Some(explanations)) = (
        string_array(q, "choices_en"),
        string_array(q, "explanations_en"),
    ) else {
        return Vec::new();
    };
    let Some(correct) = correct_index(q) else {
        return Vec::new();
    };
    let (Some(choice), Some(exp)) = (choices.get(correct), explanations.get(correct)) else {
        return Vec::new();
    };

    let choice_lower = choice.to_lowercase();
    let exp_lower = exp.to_lowercase();
    let mut issues = Vec::new();

    for (negation, affirmation) in CONTRADICTION_PAIRS {
        if choice_lower.contains(negation) && exp_lower.contains(affirmation) {
            issues.push(
                ValidationIssue::new(
                    &q_id,
                    Severity::Warning,
                    IssueTag::Accuracy,
                    format!(
                        "Possible contradiction in choice[{correct}]: choice has '{negation}' but may contradict explanation"
                    ),
                )
                .with_suggestion("Manual review recommended"),
            );
        }
    }

    issues
}
