/// Master list reconciliation errors.
///
/// These are surfaced to the ingestion caller as warnings: ledger drift is
/// recoverable by re-running the totals recount and must never block
/// accepted content.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("category section not found in ledger: {section}")]
    SectionNotFound { section: String },

    #[error("malformed ledger entry at line {line}: {text}")]
    MalformedEntry { line: usize, text: String },

    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
