//! Client error types

use handwriting_domain::{ApiErrors, DomainError};
use thiserror::Error;

use crate::ports::TransportError;

/// Errors returned by [`crate::HandwritingClient`].
#[derive(Debug, Error)]
pub enum ClientError {
    /// The client configuration is invalid (missing key or secret, bad URL).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The service rejected the request. Covers both validation and
    /// authentication failures; see [`ApiErrors::is_auth_failure`].
    #[error(transparent)]
    Api(#[from] ApiErrors),

    /// A response body was not the JSON the operation expects.
    #[error("failed to decode {context}: {source}")]
    Decode {
        /// What was being decoded
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// No HTTP response was received, or its body could not be read.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Writing rendered output to its destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Creates a decode error.
    #[must_use]
    pub const fn decode(context: &'static str, source: serde_json::Error) -> Self {
        Self::Decode { context, source }
    }

    /// Returns the structured service error, if this is one.
    #[must_use]
    pub const fn api_errors(&self) -> Option<&ApiErrors> {
        match self {
            Self::Api(errors) => Some(errors),
            _ => None,
        }
    }

    /// Returns true if the service rejected the credentials.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::Api(errors) if errors.is_auth_failure())
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;
    use handwriting_domain::ApiError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_api_error_display_is_service_message() {
        let err = ClientError::from(ApiErrors::new(
            401,
            vec![ApiError::new("", "unauthorized")],
        ));
        assert_eq!(err.to_string(), "unauthorized");
        assert!(err.is_auth_failure());
        assert!(err.api_errors().is_some());
    }

    #[test]
    fn test_missing_key_display() {
        let err = ClientError::from(DomainError::MissingKey);
        assert_eq!(err.to_string(), "token key and secret are required");
        assert!(err.api_errors().is_none());
        assert!(!err.is_auth_failure());
    }

    #[test]
    fn test_decode_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ClientError::decode("style", source);
        assert!(err.to_string().starts_with("failed to decode style:"));
    }
}
