//! HTTP transport port

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use handwriting_domain::StatusCode;
use thiserror::Error;
use url::Url;

/// Errors raised below the HTTP layer, before any status code is seen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The transport's configured timeout elapsed.
    #[error("request timed out")]
    Timeout,

    /// The host name could not be resolved.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that failed to resolve
        host: String,
        /// Underlying error message
        message: String,
    },

    /// The remote end refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host
        host: String,
        /// Target port
        port: u16,
    },

    /// The connection could not be established (including TLS failures).
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read to completion.
    #[error("failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("{0}")]
    Other(String),
}

/// Future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
    Pin<Box<dyn Future<Output = Result<TransportResponse, TransportError>> + Send + 'a>>;

/// Future returned by [`BodyStream::next_chunk`].
pub type ChunkFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Option<Vec<u8>>, TransportError>> + Send + 'a>>;

/// Port for issuing HTTP requests to the service.
///
/// Every operation the service exposes is a `GET`, so the port carries no
/// method. Implementations must not retry and must not impose a timeout of
/// their own beyond what they were explicitly configured with.
pub trait HttpTransport: Send + Sync {
    /// Sends a `GET` request and returns the response head with its body
    /// still unread.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if no HTTP response was received.
    fn send(&self, request: TransportRequest) -> TransportFuture<'_>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for Arc<T> {
    fn send(&self, request: TransportRequest) -> TransportFuture<'_> {
        (**self).send(request)
    }
}

/// A fully-formed request: absolute URL plus headers.
#[derive(Clone, PartialEq, Eq)]
pub struct TransportRequest {
    /// Absolute request URL including the encoded query string
    pub url: Url,
    /// Request headers in insertion order
    pub headers: Vec<(String, String)>,
}

impl TransportRequest {
    /// Creates a request without headers.
    #[must_use]
    pub const fn new(url: Url) -> Self {
        Self {
            url,
            headers: Vec::new(),
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Looks up a header value (case-insensitive).
    #[must_use]
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Debug for TransportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "<redacted>")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();
        f.debug_struct("TransportRequest")
            .field("url", &self.url.as_str())
            .field("headers", &headers)
            .finish()
    }
}

/// A source of response body chunks.
///
/// Dropping the stream releases the underlying connection.
pub trait BodyStream: Send {
    /// Returns the next chunk, or `None` once the body is exhausted.
    fn next_chunk(&mut self) -> ChunkFuture<'_>;
}

/// Body held fully in memory.
struct BufferedBody(Option<Vec<u8>>);

impl BodyStream for BufferedBody {
    fn next_chunk(&mut self) -> ChunkFuture<'_> {
        let chunk = self.0.take().filter(|c| !c.is_empty());
        Box::pin(std::future::ready(Ok(chunk)))
    }
}

/// An unread response body.
pub struct ResponseBody {
    inner: Box<dyn BodyStream>,
}

impl ResponseBody {
    /// Wraps a streaming body.
    #[must_use]
    pub fn new(stream: impl BodyStream + 'static) -> Self {
        Self {
            inner: Box::new(stream),
        }
    }

    /// Creates a body from bytes already in memory.
    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::new(BufferedBody(Some(bytes.into())))
    }

    /// Reads the next chunk.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Body`] if the connection fails mid-body.
    pub async fn chunk(&mut self) -> Result<Option<Vec<u8>>, TransportError> {
        self.inner.next_chunk().await
    }

    /// Reads the remaining body into memory, consuming it.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Body`] if the connection fails mid-body.
    pub async fn read_to_end(mut self) -> Result<Vec<u8>, TransportError> {
        let mut buffer = Vec::new();
        while let Some(chunk) = self.chunk().await? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer)
    }
}

impl fmt::Debug for ResponseBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResponseBody").finish_non_exhaustive()
    }
}

/// Response head plus its unread body.
#[derive(Debug)]
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Response headers, names lower-cased
    pub headers: HashMap<String, String>,
    /// Unread body
    pub body: ResponseBody,
}

impl TransportResponse {
    /// Creates a response; header names are lower-cased.
    #[must_use]
    pub fn new(
        status: impl Into<StatusCode>,
        headers: impl IntoIterator<Item = (String, String)>,
        body: ResponseBody,
    ) -> Self {
        Self {
            status: status.into(),
            headers: headers
                .into_iter()
                .map(|(name, value)| (name.to_ascii_lowercase(), value))
                .collect(),
            body,
        }
    }

    /// Looks up a header value (case-insensitive).
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
