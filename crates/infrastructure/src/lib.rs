//! Handwriting Infrastructure - Adapters and configuration
//!
//! This crate provides the reqwest-backed implementation of the transport
//! port, environment-driven client configuration, and output helpers.

pub mod adapters;
pub mod config;
pub mod serialization;

pub use adapters::{DEFAULT_USER_AGENT, ReqwestTransport};
pub use config::{ClientConfig, ConfigError};
pub use serialization::{SerializationError, to_json_stable};
