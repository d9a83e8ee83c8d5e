//! Confidence derivation tests.
//!
//! The asymmetry is deliberate and load-bearing for compatibility:
//! `passed` flips only on critical issues; warnings alone lower confidence
//! but never fail a question.

use curio_core::models::{Confidence, IssueTag, Severity, ValidationIssue, ValidationResult};

fn issue(severity: Severity) -> ValidationIssue {
    ValidationIssue::new("anim_001", severity, IssueTag::Format, "synthetic issue")
}

fn derive(criticals: usize, warnings: usize, infos: usize) -> ValidationResult {
    let mut issues = Vec::new();
    issues.extend((0..criticals).map(|_| issue(Severity::Critical)));
    issues.extend((0..warnings).map(|_| issue(Severity::Warning)));
    issues.extend((0..infos).map(|_| issue(Severity::Info)));
    ValidationResult::from_issues("anim_001", "Why do cats purr?", issues)
}

#[test]
fn critical_issues_force_low_confidence_and_failure() {
    let result = derive(1, 5, 0);
    assert_eq!(result.confidence, Confidence::Low);
    assert!(!result.passed);
}

#[test]
fn three_warnings_yield_medium_confidence_but_still_pass() {
    let result = derive(0, 3, 0);
    assert_eq!(result.confidence, Confidence::Medium);
    assert!(result.passed);
}

#[test]
fn one_warning_keeps_high_confidence() {
    let result = derive(0, 1, 0);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.passed);
}

#[test]
fn exactly_two_warnings_is_still_high() {
    let result = derive(0, 2, 0);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.passed);
}

#[test]
fn info_issues_never_lower_confidence() {
    let result = derive(0, 0, 10);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.passed);
}

#[test]
fn clean_question_is_high_confidence() {
    let result = derive(0, 0, 0);
    assert_eq!(result.confidence, Confidence::High);
    assert!(result.passed);
    assert!(result.issues.is_empty());
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any severity mix: failure tracks criticals exactly, and
        /// warnings alone can only lower confidence to medium.
        #[test]
        fn derivation_holds_for_any_mix(
            criticals in 0usize..4,
            warnings in 0usize..10,
            infos in 0usize..10,
        ) {
            let result = derive(criticals, warnings, infos);
            prop_assert_eq!(result.passed, criticals == 0);
            let expected = if criticals > 0 {
                Confidence::Low
            } else if warnings > 2 {
                Confidence::Medium
            } else {
                Confidence::High
            };
            prop_assert_eq!(result.confidence, expected);
        }
    }
}
