//! Domain error types

use thiserror::Error;

/// Domain-level errors raised while validating client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No API key was supplied.
    #[error("token key and secret are required")]
    MissingKey,

    /// An API key was supplied without its secret.
    #[error("token secret is required")]
    MissingSecret,

    /// The service base URL is invalid or cannot carry endpoint paths.
    #[error("invalid service URL: {0}")]
    InvalidServiceUrl(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
