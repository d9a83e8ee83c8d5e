use serde::{Deserialize, Serialize};

use crate::models::validation_result::Confidence;

/// One source consulted while gathering evidence for a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceSource {
    /// The key term that led to this source.
    pub term: String,
    /// Title of the matched article or page.
    pub article: String,
    pub url: String,
    /// Content words shared between the explanation and the source extract.
    pub overlap_words: Vec<String>,
}

/// Unstructured evidence summary returned by an external collaborator.
///
/// Advisory only: evidence never raises the severity of heuristic findings,
/// it augments reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceReport {
    pub verified: bool,
    pub confidence: Confidence,
    pub key_terms: Vec<String>,
    pub sources: Vec<EvidenceSource>,
    pub notes: Vec<String>,
}

impl EvidenceReport {
    /// Report for a question no evidence could be gathered for.
    pub fn unverified(key_terms: Vec<String>, note: impl Into<String>) -> Self {
        Self {
            verified: false,
            confidence: Confidence::Low,
            key_terms,
            sources: Vec::new(),
            notes: vec![note.into()],
        }
    }
}
