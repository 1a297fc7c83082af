//! Rendered image and document output.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::ClientResult;
use crate::ports::ResponseBody;

/// The body of a successful render call.
///
/// The underlying connection stays open until the output is read to the end
/// or dropped; dropping it early releases the connection without reading the
/// rest.
#[derive(Debug)]
pub struct RenderedOutput {
    content_type: Option<String>,
    body: ResponseBody,
}

impl RenderedOutput {
    /// Wraps a response body.
    #[must_use]
    pub const fn new(content_type: Option<String>, body: ResponseBody) -> Self {
        Self { content_type, body }
    }

    /// Returns the `Content-Type` the service reported, if any.
    #[must_use]
    pub fn content_type(&self) -> Option<&str> {
        self.content_type.as_deref()
    }

    /// Reads the next chunk of output.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the connection fails mid-body.
    pub async fn chunk(&mut self) -> ClientResult<Option<Vec<u8>>> {
        Ok(self.body.chunk().await?)
    }

    /// Reads the whole output into memory.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the connection fails mid-body.
    pub async fn bytes(self) -> ClientResult<Vec<u8>> {
        Ok(self.body.read_to_end().await?)
    }

    /// Streams the output into `writer` and returns the number of bytes written.
    ///
    /// The writer is flushed once the body is exhausted.
    ///
    /// # Errors
    ///
    /// Returns a transport error if reading fails or an I/O error if writing fails.
    pub async fn write_to<W>(mut self, writer: &mut W) -> ClientResult<u64>
    where
        W: AsyncWrite + Unpin + Send,
    {
        let mut written = 0u64;
        while let Some(chunk) = self.body.chunk().await? {
            writer.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }
        writer.flush().await?;
        Ok(written)
    }
}
