//! PipelineDriver — runs the staged validation over corpus files.

use std::fs;
use std::path::Path;
use std::time::Duration;

use curio_core::models::{
    EvidenceReport, IssueTag, PipelineReport, Severity, StructureOutcome, ValidationIssue,
};
use curio_core::question::CategoryDocument;
use curio_core::traits::EvidenceProvider;
use curio_validation::ValidationEngine;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::terms::extract_key_terms;

/// How a structural critical affects pipeline flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineMode {
    /// A critical structural finding halts before the heuristic stage.
    Strict,
    /// All stages run regardless; the caller interprets the report.
    Lenient,
}

/// The staged validation driver.
///
/// Synchronous and single-file: callers sequence files themselves. The
/// evidence collaborator is optional; `pacing` spaces its calls to respect
/// upstream rate limits and is policy, not part of the validation
/// contract.
pub struct PipelineDriver<'a> {
    engine: ValidationEngine,
    evidence: Option<&'a dyn EvidenceProvider>,
    mode: PipelineMode,
    pacing: Duration,
}

impl<'a> PipelineDriver<'a> {
    pub fn new(engine: ValidationEngine) -> Self {
        Self {
            engine,
            evidence: None,
            mode: PipelineMode::Strict,
            pacing: Duration::ZERO,
        }
    }

    pub fn with_mode(mut self, mode: PipelineMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_evidence<'b>(self, provider: &'b dyn EvidenceProvider) -> PipelineDriver<'b>
    where
        'a: 'b,
    {
        PipelineDriver {
            engine: self.engine,
            evidence: Some(provider),
            mode: self.mode,
            pacing: self.pacing,
        }
    }

    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn engine(&self) -> &ValidationEngine {
        &self.engine
    }

    /// Run the pipeline over a file on disk.
    pub fn run_file(&self, path: &Path) -> PipelineReport {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match fs::read_to_string(path) {
            Ok(text) => self.run_text(&name, &text),
            Err(e) => {
                let issue = ValidationIssue::new(
                    &name,
                    Severity::Critical,
                    IssueTag::Format,
                    format!("File not readable: {e}"),
                );
                PipelineReport {
                    file: name,
                    structure: StructureOutcome {
                        passed: false,
                        question_count: 0,
                        issues: vec![issue],
                    },
                    heuristics: None,
                    evidence: Vec::new(),
                }
            }
        }
    }

    /// Run the pipeline over already-read document text. `name` labels the
    /// report and structural findings.
    pub fn run_text(&self, name: &str, text: &str) -> PipelineReport {
        // Stage 1: structure.
        let (document, structure) = self.structure_stage(name, text);
        info!(
            file = %name,
            passed = structure.passed,
            questions = structure.question_count,
            "structure stage complete"
        );

        let halt = !structure.passed && self.mode == PipelineMode::Strict;
        let document = match (halt, document) {
            (false, Some(doc)) => doc,
            _ => {
                return PipelineReport {
                    file: name.to_string(),
                    structure,
                    heuristics: None,
                    evidence: Vec::new(),
                }
            }
        };

        // Stage 2: heuristics. Findings are reported, not fatal to
        // pipeline execution.
        let report = self.engine.validate_document(&document);
        info!(
            file = %name,
            criticals = report.critical_issues,
            warnings = report.warnings,
            "heuristic stage complete"
        );

        // Stage 3: optional evidence. Never raises severity; only reports.
        let evidence = match self.evidence {
            Some(provider) => self.evidence_stage(&document, provider),
            None => Vec::new(),
        };

        PipelineReport {
            file: name.to_string(),
            structure,
            heuristics: Some(report),
            evidence,
        }
    }

    fn structure_stage(
        &self,
        name: &str,
        text: &str,
    ) -> (Option<CategoryDocument>, StructureOutcome) {
        let mut issues = Vec::new();
        let critical = |message: String| {
            ValidationIssue::new(name, Severity::Critical, IssueTag::Format, message)
        };

        let raw: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(e) => {
                issues.push(critical(format!("Invalid JSON: {e}")));
                return (
                    None,
                    StructureOutcome {
                        passed: false,
                        question_count: 0,
                        issues,
                    },
                );
            }
        };

        let category_en = raw.get("category_en").and_then(Value::as_str);
        let category_zh = raw.get("category_zh").and_then(Value::as_str);
        if category_en.is_none() || category_zh.is_none() {
            issues.push(critical("Missing category_en or category_zh".to_string()));
        }

        let questions = raw.get("questions").and_then(Value::as_array);
        match questions {
            None => issues.push(critical("Missing or invalid questions array".to_string())),
            Some(list) if list.is_empty() => issues.push(ValidationIssue::new(
                name,
                Severity::Warning,
                IssueTag::Format,
                "No questions in file",
            )),
            Some(_) => {}
        }

        let passed = !issues.iter().any(|i| i.severity == Severity::Critical);
        let question_count = questions.map(|q| q.len()).unwrap_or(0);

        // In lenient mode the heuristic stage still runs over whatever is
        // salvageable, so the document is built with fallbacks.
        let document = CategoryDocument {
            category_en: category_en.unwrap_or("Unknown").to_string(),
            category_zh: category_zh.unwrap_or("").to_string(),
            questions: questions.cloned().unwrap_or_default(),
        };

        (
            Some(document),
            StructureOutcome {
                passed,
                question_count,
                issues,
            },
        )
    }

    /// Gather evidence per question. A failing collaborator skips the rest
    /// of the stage; collected reports are kept.
    fn evidence_stage(
        &self,
        document: &CategoryDocument,
        provider: &dyn EvidenceProvider,
    ) -> Vec<(String, EvidenceReport)> {
        let mut reports = Vec::new();
        for (idx, q) in document.questions.iter().enumerate() {
            let q_id = q
                .get("id")
                .and_then(Value::as_str)
                .unwrap_or("unknown")
                .to_string();
            let question = q.get("question_en").and_then(Value::as_str).unwrap_or("");
            let explanation = correct_explanation(q).unwrap_or("");

            let terms = extract_key_terms(question, explanation);
            debug!(question_id = %q_id, terms = ?terms, "evidence terms extracted");

            match provider.evidence_for(&terms, question, explanation) {
                Ok(report) => reports.push((q_id, report)),
                Err(e) => {
                    warn!(question_id = %q_id, error = %e, "evidence collaborator failed, skipping stage");
                    break;
                }
            }

            if !self.pacing.is_zero() && idx + 1 < document.questions.len() {
                std::thread::sleep(self.pacing);
            }
        }
        reports
    }
}

/// The English explanation paired with the correct choice, if the record
/// carries one.
fn correct_explanation(q: &Value) -> Option<&str> {
    let idx = q.get("correct_answer")?.as_u64()? as usize;
    q.get("explanations_en")?.as_array()?.get(idx)?.as_str()
}
