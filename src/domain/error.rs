use std::io;

use thiserror::Error;

use crate::domain::action::Action;

/// Library-wide error type for fvctl operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Malformed user input rejected at the input boundary.
    #[error("{0}")]
    Validation(String),

    /// Action invoked before all of its mandatory fields were filled.
    #[error("You have {missing} field(s) left to fill for {action}")]
    NotReady { action: Action, missing: u32 },

    /// Action already has an execution outstanding.
    #[error("{action} is already running; wait for it to finish")]
    ActionBusy { action: Action },

    /// Child process could not be started.
    #[error("Failed to start '{command}': {details}")]
    SpawnFailed { command: String, details: String },

    /// Child process ran but reported failure.
    #[error("Command failed: {command}")]
    CommandFailed { command: String },

    /// Counter-example directory could not be read.
    #[error("Cannot read counter-example directory '{path}': {details}")]
    CexListing { path: String, details: String },

    /// Configuration value is invalid.
    #[error("{0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Validation(_)
            | AppError::NotReady { .. }
            | AppError::InvalidConfig(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ActionBusy { .. } => io::ErrorKind::WouldBlock,
            AppError::CexListing { .. } => io::ErrorKind::NotFound,
            AppError::SpawnFailed { .. } | AppError::CommandFailed { .. } => io::ErrorKind::Other,
        }
    }
}
