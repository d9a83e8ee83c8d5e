/// Translation/generation collaborator errors.
///
/// A raised error degrades to a recoverable placeholder or a hard
/// validation failure depending on caller policy, never to a silently
/// corrupted record.
#[derive(Debug, thiserror::Error)]
pub enum TranslationError {
    #[error("translator unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("translation request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("translation exceeds {max_chars} chars after retry: {text}")]
    TooLong { max_chars: usize, text: String },

    #[error("malformed translator response: {reason}")]
    MalformedResponse { reason: String },
}

/// External evidence collaborator errors. An erroring or unavailable
/// collaborator skips the optional evidence stage without failing the
/// pipeline.
#[derive(Debug, thiserror::Error)]
pub enum EvidenceError {
    #[error("evidence provider unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("evidence request failed: {reason}")]
    RequestFailed { reason: String },

    #[error("malformed evidence response: {reason}")]
    MalformedResponse { reason: String },
}
