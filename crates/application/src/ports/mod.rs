//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and the network.
//! Each port is a trait implemented by adapters in the infrastructure layer.

mod transport;

pub use transport::{
    BodyStream, ChunkFuture, HttpTransport, ResponseBody, TransportError, TransportFuture,
    TransportRequest, TransportResponse,
};
