//! Handwriting Domain - Core types
//!
//! This crate defines the value objects exchanged with the handwriting
//! rendering service: credentials, styles, list and render parameters, and
//! the structured errors the service reports. All types here are pure Rust
//! with no I/O dependencies.

pub mod api_error;
pub mod credentials;
pub mod error;
pub mod query;
pub mod response;
pub mod service_url;
pub mod style;

pub use api_error::{ApiError, ApiErrors};
pub use credentials::Credentials;
pub use error::{DomainError, DomainResult};
pub use query::{
    ListQuery, Pdf, Png, QueryParam, QueryParams, RenderFormat, RenderRequest, SortDirection,
    format_float,
};
pub use response::StatusCode;
pub use service_url::{DEFAULT_SERVICE_URL, ServiceUrl};
pub use style::Style;
