//! Error types for the introspection pipeline.
//!
//! None of these ever reach the host program as a panic: the inspector
//! degrades to unnamed values whenever one of them occurs.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The calling frame could not be resolved to a file and line.
    #[error("caller frame unavailable: {reason}")]
    StackUnavailable { reason: String },

    /// The caller's source file could not be read or is not valid Rust.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ParseFailure,
    },

    /// The thread running the source lookup could not start or panicked.
    #[error("source lookup worker failed: {reason}")]
    Worker { reason: String },
}

/// Underlying cause of a [`Error::Parse`].
#[derive(Debug, Error)]
pub enum ParseFailure {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Syntax(#[from] syn::Error),
}

impl Error {
    pub fn stack_unavailable(reason: impl Into<String>) -> Self {
        Error::StackUnavailable {
            reason: reason.into(),
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: impl Into<ParseFailure>) -> Self {
        Error::Parse {
            path: path.into(),
            source: source.into(),
        }
    }

    pub fn worker(reason: impl Into<String>) -> Self {
        Error::Worker {
            reason: reason.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }
}
