//! Decoding of non-200 responses into [`ClientError`].

use handwriting_domain::ApiErrors;
use tracing::warn;

use crate::error::ClientError;
use crate::ports::TransportResponse;

/// Consumes a failed response and converts its body into an error.
///
/// A well-formed `{"errors": [...]}` body becomes [`ClientError::Api`]. A body
/// that is not valid JSON becomes [`ClientError::Decode`], and a body that
/// cannot be read becomes [`ClientError::Transport`].
pub async fn decode_error_response(response: TransportResponse) -> ClientError {
    let status = response.status;

    let body = match response.body.read_to_end().await {
        Ok(body) => body,
        Err(e) => return ClientError::Transport(e),
    };

    match ApiErrors::from_body(status, body) {
        Ok(errors) => {
            warn!(
                status = %status,
                error_count = errors.errors.len(),
                summary = errors.message(),
                "service rejected request"
            );
            ClientError::Api(errors)
        }
        Err(e) => {
            warn!(status = %status, error = %e, "unreadable error response");
            ClientError::decode("error response", e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{BodyStream, ChunkFuture, ResponseBody, TransportError};
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: &str) -> TransportResponse {
        TransportResponse::new(
            status,
            [("content-type".to_string(), "application/json".to_string())],
            ResponseBody::from_bytes(body.as_bytes().to_vec()),
        )
    }

    struct BrokenBody;

    impl BodyStream for BrokenBody {
        fn next_chunk(&mut self) -> ChunkFuture<'_> {
            Box::pin(std::future::ready(Err(TransportError::Body(
                "connection reset".to_string(),
            ))))
        }
    }

    #[tokio::test]
    async fn test_empty_errors_decode_to_unknown_error() {
        let err = decode_error_response(response(400, r#"{"errors":[]}"#)).await;
        let api = err.api_errors().unwrap();
        assert_eq!(api.message(), "unknown error");
        assert_eq!(err.to_string(), "unknown error");
    }

    #[tokio::test]
    async fn test_auth_failure() {
        let err = decode_error_response(response(
            401,
            r#"{"errors":[{"error":"unauthorized","field":""}]}"#,
        ))
        .await;
        assert_eq!(err.to_string(), "unauthorized");
        assert!(err.is_auth_failure());
    }

    #[tokio::test]
    async fn test_multiple_errors_keep_every_field() {
        let err = decode_error_response(response(
            400,
            r#"{"errors":[
                {"error":"width invalid unit: \"gophers\"","field":"width"},
                {"error":"height invalid unit: \"%\"","field":"height"},
                {"error":"handwriting_size must be positive","field":"handwriting_size"}
            ]}"#,
        ))
        .await;

        assert_eq!(err.to_string(), "multiple errors");
        let mut fields: Vec<_> = err.api_errors().unwrap().fields().collect();
        fields.sort_unstable();
        assert_eq!(fields, vec!["handwriting_size", "height", "width"]);
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error() {
        let err = decode_error_response(response(502, "<html>Bad Gateway</html>")).await;
        assert!(matches!(
            err,
            ClientError::Decode {
                context: "error response",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unreadable_body_is_transport_error() {
        let response = TransportResponse::new(500, Vec::new(), ResponseBody::new(BrokenBody));
        let err = decode_error_response(response).await;
        assert!(matches!(err, ClientError::Transport(TransportError::Body(_))));
    }
}
