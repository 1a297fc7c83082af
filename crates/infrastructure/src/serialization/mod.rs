//! Serialization utilities
//!
//! Provides deterministic JSON output for command-line display.

mod json;

pub use json::{SerializationError, to_json_stable};
