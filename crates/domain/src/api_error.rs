//! Structured errors reported by the service.
//!
//! Every non-200 response carries a JSON body of the shape
//! `{"errors": [{"error": "...", "field": "..."}]}`. Validation failures name
//! the offending parameter in `field`; authentication failures leave it empty.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::response::StatusCode;

/// A single error entry from the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human-readable message, e.g. `width invalid unit: "gophers"`
    #[serde(default, deserialize_with = "null_as_default")]
    pub error: String,
    /// Request parameter the message refers to; empty when not field-specific
    #[serde(default, deserialize_with = "null_as_default")]
    pub field: String,
}

impl ApiError {
    /// Creates an error entry.
    #[must_use]
    pub fn new(field: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            field: field.into(),
        }
    }
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default, deserialize_with = "null_as_default")]
    errors: Vec<ApiError>,
}

/// Reads an explicit `null` the same way as an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The decoded error response of a failed request.
///
/// Renders as a single line suitable for logging while keeping every entry
/// available for callers that map errors onto individual fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiErrors {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Entries in the order the service reported them
    pub errors: Vec<ApiError>,
    /// Raw response body
    pub body: Vec<u8>,
}

impl ApiErrors {
    /// Creates an error value from already-decoded entries.
    #[must_use]
    pub fn new(status: impl Into<StatusCode>, errors: Vec<ApiError>) -> Self {
        Self {
            status: status.into(),
            errors,
            body: Vec::new(),
        }
    }

    /// Decodes a response body.
    ///
    /// # Errors
    ///
    /// Returns the JSON error if `body` is not a valid error envelope.
    pub fn from_body(
        status: impl Into<StatusCode>,
        body: Vec<u8>,
    ) -> Result<Self, serde_json::Error> {
        let envelope: ErrorEnvelope = serde_json::from_slice(&body)?;
        Ok(Self {
            status: status.into(),
            errors: envelope.errors,
            body,
        })
    }

    /// Returns the summary message.
    ///
    /// `"unknown error"` when there are no entries, the entry's message when
    /// there is exactly one, and `"multiple errors"` otherwise.
    #[must_use]
    pub fn message(&self) -> &str {
        match self.errors.as_slice() {
            [] => "unknown error",
            [only] => only.error.as_str(),
            _ => "multiple errors",
        }
    }

    /// Returns the field names in reported order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    /// Returns the entries reported for `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ApiError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    /// Returns true if the response was a 401 or 403.
    #[must_use]
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self.status.as_u16(), 401 | 403)
    }

    /// Returns the raw body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

impl fmt::Display for ApiErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ApiErrors {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(status: u16, body: &str) -> ApiErrors {
        ApiErrors::from_body(status, body.as_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_empty_errors_is_unknown() {
        let errors = decode(400, r#"{"errors":[]}"#);
        assert_eq!(errors.to_string(), "unknown error");
        assert!(errors.errors.is_empty());
    }

    #[test]
    fn test_missing_errors_key_is_unknown() {
        let errors = decode(500, "{}");
        assert_eq!(errors.message(), "unknown error");
    }

    #[test]
    fn test_single_error_message_is_verbatim() {
        let errors = decode(401, r#"{"errors":[{"error":"unauthorized","field":""}]}"#);
        assert_eq!(errors.to_string(), "unauthorized");
        assert!(errors.is_auth_failure());
        assert_eq!(errors.errors[0].field, "");
    }

    #[test]
    fn test_single_field_error_keeps_field() {
        let errors = decode(
            400,
            r#"{"errors":[{"error":"width invalid unit: \"gophers\"","field":"width"}]}"#,
        );
        assert_eq!(errors.to_string(), r#"width invalid unit: "gophers""#);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["width"]);
        assert!(!errors.is_auth_failure());
    }

    #[test]
    fn test_multiple_errors() {
        let errors = decode(
            400,
            r#"{"errors":[
                {"error":"width invalid unit: \"gophers\"","field":"width"},
                {"error":"height must be absolute","field":"height"},
                {"error":"handwriting_size must be positive","field":"handwriting_size"}
            ]}"#,
        );
        assert_eq!(errors.to_string(), "multiple errors");

        let mut fields: Vec<_> = errors.fields().collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["handwriting_size", "height", "width"]);
        assert_eq!(errors.for_field("height").count(), 1);
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let errors = decode(403, r#"{"errors":[{"error":"forbidden"}]}"#);
        assert_eq!(errors.errors, vec![ApiError::new("", "forbidden")]);
    }

    #[test]
    fn test_null_errors_is_unknown() {
        let errors = decode(500, r#"{"errors":null}"#);
        assert_eq!(errors.to_string(), "unknown error");
        assert!(errors.errors.is_empty());
    }

    #[test]
    fn test_null_field_defaults_to_empty() {
        let errors = decode(401, r#"{"errors":[{"error":"unauthorized","field":null}]}"#);
        assert_eq!(errors.to_string(), "unauthorized");
        assert_eq!(errors.errors, vec![ApiError::new("", "unauthorized")]);
    }

    #[test]
    fn test_null_or_missing_message_defaults_to_empty() {
        let errors = decode(
            400,
            r#"{"errors":[{"error":null,"field":"width"},{"field":"height"}]}"#,
        );
        assert_eq!(
            errors.errors,
            vec![ApiError::new("width", ""), ApiError::new("height", "")]
        );
        assert_eq!(errors.to_string(), "multiple errors");
    }

    #[test]
    fn test_keeps_raw_body() {
        let errors = decode(400, r#"{"errors":[]}"#);
        assert_eq!(errors.body_text(), r#"{"errors":[]}"#);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(ApiErrors::from_body(502, b"<html>Bad Gateway</html>".to_vec()).is_err());
    }
}
