// src/error.rs
use std::io;

use thiserror::Error;

/// Every way a run can fail. None of these are retried: the first one
/// ends the run and nothing is written to stdout.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Bad credentials or an unreachable login endpoint.
    #[error("{0}")]
    Authentication(String),

    /// No response, or a non-success HTTP status.
    #[error("{0}")]
    Fetch(String),

    /// The page no longer looks the way we expect (HTML layout drift,
    /// missing or unparseable embedded JSON).
    #[error("{0}")]
    Format(String),

    /// The user aborted an interactive prompt (Ctrl-C, closed input).
    #[error("Interrupted.")]
    Interrupted,

    #[error("Could not write output: {0}")]
    Output(#[from] io::Error),
}

impl ExportError {
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Interrupted => 1,
            _ => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
