//! HTTP transport implementation using reqwest.
//!
//! This adapter implements the `HttpTransport` port using the reqwest library.
//! It performs no retries; a timeout applies only when one was configured.

use std::time::Duration;

use handwriting_application::ports::{
    BodyStream, ChunkFuture, HttpTransport, ResponseBody, TransportError, TransportFuture,
    TransportRequest, TransportResponse,
};
use reqwest::Client;
use tracing::trace;

/// Default User-Agent sent with every request.
pub const DEFAULT_USER_AGENT: &str = concat!("handwriting-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport backed by `reqwest::Client`.
///
/// Cloning is cheap and clones share one connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
    timeout_ms: Option<u64>,
}

impl ReqwestTransport {
    /// Creates a transport with reqwest's defaults and no request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn new() -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_ms: None,
        })
    }

    /// Creates a transport whose requests fail after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> Result<Self, TransportError> {
        let client = Client::builder()
            .user_agent(DEFAULT_USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| TransportError::Other(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            timeout_ms: u64::try_from(timeout.as_millis()).ok(),
        })
    }

    /// Returns the configured timeout in milliseconds, if any.
    #[must_use]
    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }

    /// Maps reqwest errors to `TransportError`.
    fn map_error(error: &reqwest::Error) -> TransportError {
        if error.is_timeout() {
            return TransportError::Timeout;
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str())
                .unwrap_or("unknown")
                .to_string()
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lowered = message.to_lowercase();
            if lowered.contains("dns") || lowered.contains("resolve") {
                return TransportError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lowered.contains("refused") {
                return TransportError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(reqwest::Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return TransportError::ConnectionFailed(message);
        }

        if error.is_body() || error.is_decode() {
            return TransportError::Body(error_chain(error));
        }

        TransportError::Other(error_chain(error))
    }
}

/// Joins an error with its sources; reqwest keeps the useful detail there.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// A response body read chunk by chunk from the connection.
struct ReqwestBody(reqwest::Response);

impl BodyStream for ReqwestBody {
    fn next_chunk(&mut self) -> ChunkFuture<'_> {
        Box::pin(async move {
            self.0
                .chunk()
                .await
                .map(|chunk| chunk.map(|bytes| bytes.to_vec()))
                .map_err(|e| TransportError::Body(error_chain(&e)))
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        Box::pin(async move {
            trace!(url = %request.url, "dispatching GET");

            let mut builder = self.client.get(request.url.as_str());
            for (name, value) in &request.headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

            let status = response.status().as_u16();
            let headers: Vec<(String, String)> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            Ok(TransportResponse::new(
                status,
                headers,
                ResponseBody::new(ReqwestBody(response)),
            ))
        })
    }
}
