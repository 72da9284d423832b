use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while walking a locale document tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WriteError {
    /// The key path had no segments.
    #[error("Key path is empty")]
    EmptyPath,
    /// An intermediate segment held a scalar and the conflict policy forbids replacing it.
    #[error("Cannot descend into '{path}': existing value is {found}, not an object")]
    Conflict { path: String, found: &'static str },
}

/// Errors raised by locale store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize locale document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Malformed locale document {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error(transparent)]
    Write(#[from] WriteError),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
