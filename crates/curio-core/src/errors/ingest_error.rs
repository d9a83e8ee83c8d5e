use crate::errors::{CorpusError, TranslationError};

/// Ingestion workflow errors.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("malformed draft {path}: {reason}")]
    MalformedDraft { path: String, reason: String },

    #[error("invalid draft question '{question}': {reason}")]
    InvalidDraft { question: String, reason: String },

    #[error("validation failed for {file}: {criticals} critical issue(s)")]
    ValidationFailed { file: String, criticals: usize },

    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
