pub mod collaborator_error;
pub mod corpus_error;
pub mod ingest_error;
pub mod ledger_error;

pub use collaborator_error::{EvidenceError, TranslationError};
pub use corpus_error::CorpusError;
pub use ingest_error::IngestError;
pub use ledger_error::LedgerError;

/// Unified error for the Curio toolkit.
#[derive(Debug, thiserror::Error)]
pub enum CurioError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Evidence(#[from] EvidenceError),

    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Convenience alias used across the workspace.
pub type CurioResult<T> = Result<T, CurioError>;
