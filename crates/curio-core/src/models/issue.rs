use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity tier of a validation finding. Only `Critical` blocks acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        };
        f.write_str(s)
    }
}

/// What aspect of a question a finding concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    /// Shape, required fields, length budgets.
    Format,
    /// Explanation conventions and readability.
    Clarity,
    /// Heuristic accuracy signals. Advisory, not proof of inaccuracy.
    Accuracy,
}

/// A single validation finding. Immutable; produced by checkers, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub question_id: String,
    pub severity: Severity,
    pub tag: IssueTag,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ValidationIssue {
    pub fn new(
        question_id: impl Into<String>,
        severity: Severity,
        tag: IssueTag,
        message: impl Into<String>,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            severity,
            tag,
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}
