//! Parameters for rendering text in a handwriting style.

use std::fmt;
use std::marker::PhantomData;

use super::{QueryParams, format_float};

/// An output format the service can render to.
///
/// Implemented by the [`Png`] and [`Pdf`] markers. Each format carries its own
/// endpoint and default units, so a request built for one format cannot be
/// sent to the other.
pub trait RenderFormat: fmt::Debug + Clone + Copy + PartialEq + Send + Sync + 'static {
    /// Final path segment of the render endpoint (`/render/{name}`).
    const NAME: &'static str;
    /// Media type of a successful response.
    const MEDIA_TYPE: &'static str;
    /// Default handwriting size.
    const DEFAULT_SIZE: &'static str;
    /// Default ink color.
    const DEFAULT_COLOR: &'static str;
    /// Default canvas width.
    const DEFAULT_WIDTH: &'static str;
    /// Default canvas height.
    const DEFAULT_HEIGHT: &'static str;
}

/// Raster output, measured in pixels with hex colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Png;

impl RenderFormat for Png {
    const NAME: &'static str = "png";
    const MEDIA_TYPE: &'static str = "image/png";
    const DEFAULT_SIZE: &'static str = "20px";
    const DEFAULT_COLOR: &'static str = "#000000";
    const DEFAULT_WIDTH: &'static str = "504px";
    const DEFAULT_HEIGHT: &'static str = "360px";
}

/// Vector document output, measured in points/inches with CMYK colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pdf;

impl RenderFormat for Pdf {
    const NAME: &'static str = "pdf";
    const MEDIA_TYPE: &'static str = "application/pdf";
    const DEFAULT_SIZE: &'static str = "20pt";
    const DEFAULT_COLOR: &'static str = "(0, 0, 0, 1)";
    const DEFAULT_WIDTH: &'static str = "7in";
    const DEFAULT_HEIGHT: &'static str = "5in";
}

/// Parameters for `GET /render/{format}`.
///
/// Size, color, width and height are strings with embedded units and are
/// passed to the service as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest<F: RenderFormat> {
    /// Style identifier to render with
    pub handwriting_id: String,
    /// Text to render; empty text renders a blank canvas
    pub text: String,
    /// Handwriting size (`"20px"`, `"20pt"`)
    pub handwriting_size: String,
    /// Ink color (`"#000000"` for PNG, `"(0, 0, 0, 1)"` for PDF)
    pub handwriting_color: String,
    /// Canvas width
    pub width: String,
    /// Canvas height
    pub height: String,
    /// Line height as a multiple of the handwriting size
    pub line_spacing: f64,
    /// Random variance applied to line spacing
    pub line_spacing_variance: f64,
    /// Random variance applied to word spacing
    pub word_spacing_variance: f64,
    /// Seed for the service's randomness; `-1` lets the service choose
    pub random_seed: i64,
    format: PhantomData<F>,
}

impl<F: RenderFormat> Default for RenderRequest<F> {
    fn default() -> Self {
        Self {
            handwriting_id: String::new(),
            text: String::new(),
            handwriting_size: F::DEFAULT_SIZE.to_string(),
            handwriting_color: F::DEFAULT_COLOR.to_string(),
            width: F::DEFAULT_WIDTH.to_string(),
            height: F::DEFAULT_HEIGHT.to_string(),
            line_spacing: 1.5,
            line_spacing_variance: 0.0,
            word_spacing_variance: 0.0,
            random_seed: -1,
            format: PhantomData,
        }
    }
}

impl<F: RenderFormat> RenderRequest<F> {
    /// Creates a request with the format's defaults.
    #[must_use]
    pub fn new(handwriting_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            handwriting_id: handwriting_id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Sets the handwriting size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.handwriting_size = size.into();
        self
    }

    /// Sets the ink color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.handwriting_color = color.into();
        self
    }

    /// Sets the canvas dimensions.
    #[must_use]
    pub fn with_dimensions(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }

    /// Sets the random seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: i64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Encodes the request in the order the service documents.
    #[must_use]
    pub fn to_query_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.add("handwriting_id", self.handwriting_id.clone());
        params.add("text", self.text.clone());
        params.add("handwriting_size", self.handwriting_size.clone());
        params.add("handwriting_color", self.handwriting_color.clone());
        params.add("width", self.width.clone());
        params.add("height", self.height.clone());
        params.add("line_spacing", format_float(self.line_spacing));
        params.add(
            "line_spacing_variance",
            format_float(self.line_spacing_variance),
        );
        params.add(
            "word_spacing_variance",
            format_float(self.word_spacing_variance),
        );
        params.add("random_seed", self.random_seed.to_string());
        params
    }
}
