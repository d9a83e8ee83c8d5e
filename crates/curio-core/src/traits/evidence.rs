use crate::errors::EvidenceError;
use crate::models::EvidenceReport;

/// Independent evidence gathering for a question's correct answer.
///
/// Implementations may be web-search or language-model backed. An
/// unavailable or erroring provider skips the optional evidence stage
/// entirely; it never fails the pipeline.
pub trait EvidenceProvider: Send + Sync {
    /// Gather evidence for the given key terms. `question` and
    /// `explanation` give the claim being checked.
    fn evidence_for(
        &self,
        terms: &[String],
        question: &str,
        explanation: &str,
    ) -> Result<EvidenceReport, EvidenceError>;
}
