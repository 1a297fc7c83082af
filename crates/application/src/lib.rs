//! Handwriting Application - Client core
//!
//! This crate contains the service client and the ports it depends on.
//! It is independent of any specific HTTP library; the infrastructure
//! crate provides the concrete transport.

pub mod client;
pub mod error;
pub mod error_decoder;
pub mod output;
pub mod ports;

pub use client::HandwritingClient;
pub use error::{ClientError, ClientResult};
pub use error_decoder::decode_error_response;
pub use output::RenderedOutput;
pub use ports::{HttpTransport, ResponseBody, TransportError, TransportRequest, TransportResponse};
