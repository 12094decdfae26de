use std::path::PathBuf;

use blockgen_schema::Issue;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by library stores.
#[derive(Debug, Error)]
pub enum Error {
    /// No record matches the id (or code).
    #[error("library item '{key}' not found")]
    NotFound { key: String },

    /// Another record already owns the code.
    #[error("code '{code}' is already used by library item '{owner}'")]
    Conflict { code: String, owner: String },

    /// The stored payload no longer parses or validates.
    #[error("saved config of library item '{id}' is invalid ({} issues)", .issues.len())]
    InvalidSavedConfig { id: String, issues: Vec<Issue> },

    /// The library lock file could not be locked.
    #[error("failed to lock library at '{path}'")]
    Lock {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to access library at '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode or decode library: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether the error means the record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
