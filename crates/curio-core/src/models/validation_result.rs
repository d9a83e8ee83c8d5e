use serde::{Deserialize, Serialize};

use crate::constants::HIGH_CONFIDENCE_MAX_WARNINGS;
use crate::models::issue::{Severity, ValidationIssue};

/// Derived per-question confidence tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Result of validating a single question: all issues plus the derived
/// confidence and pass/fail verdict.
///
/// `passed` is false only when a critical issue is present; a question with
/// many warnings still passes at medium confidence. Warnings gate advisory
/// attention, not release.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub question_id: String,
    pub question_text: String,
    pub issues: Vec<ValidationIssue>,
    pub confidence: Confidence,
    pub passed: bool,
}

impl ValidationResult {
    /// Build a result from collected issues, deriving confidence:
    /// any critical -> Low / failed; more than
    /// [`HIGH_CONFIDENCE_MAX_WARNINGS`] warnings -> Medium / passed;
    /// otherwise High / passed.
    pub fn from_issues(
        question_id: impl Into<String>,
        question_text: impl Into<String>,
        issues: Vec<ValidationIssue>,
    ) -> Self {
        let critical = issues
            .iter()
            .filter(|i| i.severity == Severity::Critical)
            .count();
        let warnings = issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count();

        let (confidence, passed) = if critical > 0 {
            (Confidence::Low, false)
        } else if warnings > HIGH_CONFIDENCE_MAX_WARNINGS {
            (Confidence::Medium, true)
        } else {
            (Confidence::High, true)
        };

        Self {
            question_id: question_id.into(),
            question_text: question_text.into(),
            issues,
            confidence,
            passed,
        }
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

/// Per-file rollup of question results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    pub category: String,
    pub results: Vec<ValidationResult>,
    pub high_confidence: usize,
    pub medium_confidence: usize,
    pub low_confidence: usize,
    pub critical_issues: usize,
    pub warnings: usize,
}

impl FileReport {
    pub fn from_results(category: impl Into<String>, results: Vec<ValidationResult>) -> Self {
        let mut report = Self {
            category: category.into(),
            high_confidence: 0,
            medium_confidence: 0,
            low_confidence: 0,
            critical_issues: 0,
            warnings: 0,
            results: Vec::new(),
        };
        for r in &results {
            match r.confidence {
                Confidence::High => report.high_confidence += 1,
                Confidence::Medium => report.medium_confidence += 1,
                Confidence::Low => report.low_confidence += 1,
            }
            report.critical_issues += r.count(Severity::Critical);
            report.warnings += r.count(Severity::Warning);
        }
        report.results = results;
        report
    }

    /// A file passes only with zero critical issues across all questions.
    pub fn passed(&self) -> bool {
        self.critical_issues == 0
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }
}
