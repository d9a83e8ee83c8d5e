//! The end-to-end ingestion workflow.

use std::path::{Path, PathBuf};

use curio_core::errors::IngestError;
use curio_core::models::PipelineReport;
use curio_core::question::Question;
use curio_core::traits::Translator;
use curio_corpus::{CorpusStore, IdAllocator};
use curio_ledger::{Ledger, QuestionSummary, Reconciler};
use curio_pipeline::PipelineDriver;
use curio_validation::ValidationEngine;
use tracing::{info, warn};

use crate::builder::QuestionBuilder;
use crate::draft::DraftFile;

/// Workflow knobs.
#[derive(Debug, Clone, Copy, Default)]
pub struct IngestOptions {
    /// Complete and report, but write nothing.
    pub dry_run: bool,
    /// Skip the validation pipeline after the corpus write.
    pub skip_validation: bool,
}

/// What an ingestion run produced.
#[derive(Debug)]
pub struct IngestOutcome {
    pub category: String,
    pub ids: Vec<String>,
    pub questions: Vec<Question>,
    /// Present unless validation was skipped or the run was dry.
    pub report: Option<PipelineReport>,
    /// Ledger reconciliation problems are warnings, never failures.
    pub ledger_warning: Option<String>,
    /// Recomputed ledger total after a successful reconciliation.
    pub ledger_total: Option<usize>,
}

/// Drives draft → corpus → validation → ledger.
pub struct IngestWorkflow<'a> {
    store: &'a CorpusStore,
    translator: Option<&'a dyn Translator>,
    ledger_path: Option<PathBuf>,
}

impl<'a> IngestWorkflow<'a> {
    pub fn new(store: &'a CorpusStore) -> Self {
        Self {
            store,
            translator: None,
            ledger_path: None,
        }
    }

    pub fn with_translator(mut self, translator: &'a dyn Translator) -> Self {
        self.translator = Some(translator);
        self
    }

    /// Reconcile this master list after accepting questions.
    pub fn with_ledger(mut self, path: impl Into<PathBuf>) -> Self {
        self.ledger_path = Some(path.into());
        self
    }

    /// Run the full workflow for one draft file.
    ///
    /// Corpus content accepted before a failure is not rolled back: a
    /// validation failure leaves the written questions in place for
    /// repair, and ledger drift is recoverable by re-running totals.
    pub fn run(&self, draft: &DraftFile, options: IngestOptions) -> Result<IngestOutcome, IngestError> {
        let spec = self.store.spec(&draft.category)?;
        let allocator = IdAllocator::new(self.store);
        let ids = allocator.next_n_ids(&draft.category, draft.questions.len())?;

        let mut builder = QuestionBuilder::new();
        if let Some(t) = self.translator {
            builder = builder.with_translator(t);
        }

        let questions: Vec<Question> = draft
            .questions
            .iter()
            .zip(&ids)
            .map(|(d, id)| builder.complete(d, &draft.category, id))
            .collect::<Result<_, _>>()?;

        info!(
            category = %draft.category,
            count = questions.len(),
            first_id = %ids[0],
            "questions completed"
        );

        if options.dry_run {
            return Ok(IngestOutcome {
                category: draft.category.clone(),
                ids,
                questions,
                report: None,
                ledger_warning: None,
                ledger_total: None,
            });
        }

        self.store.append_questions(&draft.category, &questions)?;

        let report = if options.skip_validation {
            None
        } else {
            let driver = PipelineDriver::new(ValidationEngine::new());
            let report = driver.run_file(&self.store.path_for(spec));
            if !report.passed() {
                return Err(IngestError::ValidationFailed {
                    file: spec.filename.clone(),
                    criticals: report.critical_issues()
                        + report
                            .structure
                            .issues
                            .iter()
                            .filter(|i| {
                                i.severity == curio_core::models::Severity::Critical
                            })
                            .count(),
                });
            }
            Some(report)
        };

        let (ledger_warning, ledger_total) = match &self.ledger_path {
            Some(path) => self.reconcile_ledger(path, &draft.category, &questions),
            None => (None, None),
        };

        Ok(IngestOutcome {
            category: draft.category.clone(),
            ids,
            questions,
            report,
            ledger_warning,
            ledger_total,
        })
    }

    /// Best-effort ledger reconciliation. Every failure path downgrades to
    /// a warning for the caller.
    fn reconcile_ledger(
        &self,
        path: &Path,
        category: &str,
        questions: &[Question],
    ) -> (Option<String>, Option<usize>) {
        let summaries: Vec<QuestionSummary> = questions
            .iter()
            .map(|q| QuestionSummary {
                text: q.question_en.clone(),
                difficulty: q.difficulty,
            })
            .collect();

        let result = (|| {
            let mut ledger = Ledger::load(path)?;
            let reconciler = Reconciler::new(self.store.categories());
            reconciler.add_questions(&mut ledger, category, &summaries)?;
            let total = reconciler.update_totals(&mut ledger);
            ledger.save(path)?;
            Ok::<usize, curio_core::errors::LedgerError>(total)
        })();

        match result {
            Ok(total) => (None, Some(total)),
            Err(e) => {
                warn!(error = %e, "master list not updated, manual reconciliation needed");
                (Some(e.to_string()), None)
            }
        }
    }
}
