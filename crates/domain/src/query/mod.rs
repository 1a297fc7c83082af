//! Request parameter types and their wire encoding.
//!
//! Every value object here encodes to an ordered list of string pairs.
//! Values are neither escaped nor validated: percent-encoding happens when
//! the request URL is built, and the service is the authority on whether a
//! value such as `"5gophers"` is acceptable.

mod list;
mod params;
mod render;

pub use list::{ListQuery, SortDirection};
pub use params::{QueryParam, QueryParams, format_float};
pub use render::{Pdf, Png, RenderFormat, RenderRequest};
