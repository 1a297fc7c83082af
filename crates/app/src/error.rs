//! Command-line error type and exit codes.

use handwriting_application::ClientError;
use handwriting_infrastructure::{ConfigError, SerializationError};
use thiserror::Error;

/// Everything that can stop a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Connection settings are missing or invalid.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The service call failed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Output could not be formatted.
    #[error(transparent)]
    Serialization(#[from] SerializationError),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// 2 for configuration problems, 3 when the service rejected the
    /// credentials, 1 otherwise.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 2,
            Self::Client(e) if e.is_auth_failure() => 3,
            _ => 1,
        }
    }

    /// Per-field messages worth printing below the summary line.
    pub fn details(&self) -> Vec<String> {
        match self {
            Self::Client(e) => e.api_errors().map_or_else(Vec::new, |api| {
                if api.errors.len() < 2 {
                    return Vec::new();
                }
                api.errors
                    .iter()
                    .map(|entry| {
                        if entry.field.is_empty() {
                            entry.error.clone()
                        } else {
                            format!("{}: {}", entry.field, entry.error)
                        }
                    })
                    .collect()
            }),
            _ => Vec::new(),
        }
    }
}
