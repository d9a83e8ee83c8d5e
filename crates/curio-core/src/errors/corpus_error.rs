/// Category corpus errors.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("unknown category: {name}")]
    UnknownCategory { name: String },

    #[error("category file not found: {path}")]
    FileNotFound { path: String },

    #[error("category file already exists: {path}")]
    FileExists { path: String },

    #[error("malformed category document {path}: {reason}")]
    MalformedDocument { path: String, reason: String },

    #[error("io error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
