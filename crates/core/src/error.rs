//! Error types shared by the fontshelf crates.

use std::{fmt, io, result};

/// Native manager operation names, used when reporting delegate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Install,
    Uninstall,
    Remove,
    Cleanup,
}

impl Operation {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Install => "install",
            Operation::Uninstall => "uninstall",
            Operation::Remove => "remove",
            Operation::Cleanup => "cleanup",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur while listing or managing fonts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The native font manager could not be loaded or reached.
    #[error("font manager unavailable: {0}")]
    ManagerUnavailable(String),

    /// Arguments were rejected before any native manager call.
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// The native font manager reported a failure.
    #[error("{operation} failed: {message}")]
    Delegate { operation: Operation, message: String },

    /// A rendered list was read through the wrong view.
    #[error("render type mismatch: expected {expected} output, found {found}")]
    RenderTypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Shorthand for a native manager failure.
    pub fn delegate(operation: Operation, message: impl Into<String>) -> Self {
        Error::Delegate { operation, message: message.into() }
    }

    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Error::InvalidArguments(message.into())
    }
}

pub type Result<T> = result::Result<T, Error>;
