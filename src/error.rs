//! Crate-level error type and `Result` alias.
//! Wraps subprocess failures (`ExecError`), output draining I/O errors, preset
//! parsing errors, and the semantic variants raised by the validating
//! constructor and the timed/cancellable executors.
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::process::ExecError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid command: {0}")]
    Construction(String),

    #[error("pdftotext execution failed: {0}")]
    Execution(#[from] ExecError),

    #[error("pdftotext timed out after {0:?}")]
    Timeout(Duration),

    #[error("pdftotext run was cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preset {path:?}: {source}")]
    Config {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl Error {
    /// Standard error text captured from the child, when the failure was a
    /// non-zero exit.
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Error::Execution(ExecError::Exit { stderr, .. }) => Some(stderr.as_str()),
            _ => None,
        }
    }
}
