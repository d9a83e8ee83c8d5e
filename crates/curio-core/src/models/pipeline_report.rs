use serde::{Deserialize, Serialize};

use crate::models::evidence::EvidenceReport;
use crate::models::issue::ValidationIssue;
use crate::models::validation_result::FileReport;

/// Outcome of the structure stage: document-level findings gathered before
/// any per-question heuristics run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureOutcome {
    pub passed: bool,
    pub question_count: usize,
    pub issues: Vec<ValidationIssue>,
}

/// Full report for one file run through the validation pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub file: String,
    pub structure: StructureOutcome,
    /// Absent when the structure stage halted the pipeline (strict mode).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heuristics: Option<FileReport>,
    /// One entry per question when the evidence stage ran.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub evidence: Vec<(String, EvidenceReport)>,
}

impl PipelineReport {
    /// Overall verdict: structure passed and zero heuristic criticals.
    pub fn passed(&self) -> bool {
        self.structure.passed
            && self
                .heuristics
                .as_ref()
                .map(|h| h.critical_issues == 0)
                .unwrap_or(false)
    }

    pub fn critical_issues(&self) -> usize {
        self.heuristics
            .as_ref()
            .map(|h| h.critical_issues)
            .unwrap_or(0)
    }

    pub fn warnings(&self) -> usize {
        self.heuristics.as_ref().map(|h| h.warnings).unwrap_or(0)
    }
}
