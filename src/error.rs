// File: src/error.rs
use thiserror::Error;

/// Failures reported by a lexicon store.
///
/// A lookup miss is never an error; stores return `None` or an empty list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexiconError {
    #[error("lexicon unavailable: {0}")]
    Unavailable(String),

    #[error("invalid lexicon entry: {0}")]
    InvalidEntry(String),
}

#[derive(Error, Debug)]
pub enum PersistenceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not persist temporary file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error(transparent)]
    Lexicon(#[from] LexiconError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: String, message: String },
}

/// Errors surfaced by the humanizer to its callers.
#[derive(Error, Debug)]
pub enum HumanizeError {
    #[error("lexicon unavailable: {0}")]
    LexiconUnavailable(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<LexiconError> for HumanizeError {
    fn from(e: LexiconError) -> Self {
        match e {
            LexiconError::Unavailable(msg) => HumanizeError::LexiconUnavailable(msg),
            LexiconError::InvalidEntry(msg) => HumanizeError::MalformedInput(msg),
        }
    }
}

pub type Result<T> = std::result::Result<T, HumanizeError>;
