//! Error taxonomy for configuration, execution and summarization.

use std::fmt;

/// Which family of configuration key failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    Boolean,
    Check,
    Duration,
    Values,
    String,
}

impl fmt::Display for KeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyKind::Boolean => write!(f, "boolean"),
            KeyKind::Check => write!(f, "check"),
            KeyKind::Duration => write!(f, "duration"),
            KeyKind::Values => write!(f, "values"),
            KeyKind::String => write!(f, "string"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid {kind} key name: {key}")]
    InvalidKey { kind: KeyKind, key: String },

    #[error("--enable and --disable can't be used at the same time")]
    ConflictingSelection,

    #[error("run error: {0} is required")]
    MissingArgument(&'static str),

    #[error("no report set from which to create a summary")]
    NoReport,

    /// Failure reported by the check-execution collaborator, surfaced as-is.
    #[error(transparent)]
    Execution(anyhow::Error),

    #[error("failed to serialize {0}")]
    Serialization(String),

    #[error("failed to parse {0}")]
    Parse(String),

    #[error("unsupported format: {0} (expected json or yaml)")]
    UnsupportedFormat(String),

    #[error("invalid verifier state transition: {from} -> {to}")]
    InvalidState { from: String, to: String },
}

impl Error {
    pub(crate) fn invalid_key(kind: KeyKind, key: impl Into<String>) -> Self {
        Error::InvalidKey {
            kind,
            key: key.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
