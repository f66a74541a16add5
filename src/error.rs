//! @acp:module "Errors"
//! @acp:summary "Error types for candidate listing, selection, and command execution"
//! @acp:domain cli
//! @acp:layer model

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, PickError>;

/// Errors raised while picking a target and running the tool
#[derive(Debug, Error)]
pub enum PickError {
    /// Directory missing, unreadable, or holding no entry of the expected kind
    #[error("no candidates in {path}: {reason}")]
    DirectoryUnavailable { path: PathBuf, reason: String },

    #[error("database name is required to locate seeds and migrations")]
    MissingNamespace,

    #[error("nothing to select from")]
    EmptyCandidates,

    #[error("selection cancelled")]
    SelectionCancelled,

    /// A preset name that is not in the candidate set
    #[error("'{0}' is not one of the available candidates")]
    UnknownCandidate(String),

    /// Terminal failure inside the interactive picker
    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("option '{key}' must be a string or boolean, found {found}")]
    InvalidOptionType { key: String, found: &'static str },

    #[error("failed to start {program}: {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The tool ran and exited unsuccessfully; `output` is its combined output
    #[error("command exited with {}", describe_status(.status))]
    SubprocessFailed { status: Option<i32>, output: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("status {}", code),
        None => "a signal".to_string(),
    }
}

impl PickError {
    /// Output captured from the tool, if this error carries any
    pub fn output(&self) -> Option<&str> {
        match self {
            PickError::SubprocessFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}
