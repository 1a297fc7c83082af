//! Handwriting style metadata returned by the service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named handwriting rendering profile.
///
/// Ratings are relative scores on a service-defined scale (new styles start
/// around 1400). Fields the service adds later are ignored on decode; the
/// documented fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    /// Identifier used in render requests
    pub id: String,
    /// Display title
    pub title: String,
    /// When the style was created
    #[serde(rename = "date_created")]
    pub created: DateTime<Utc>,
    /// When the style was last modified
    #[serde(rename = "date_modified")]
    pub modified: DateTime<Utc>,
    /// How neat the handwriting looks
    pub rating_neatness: i32,
    /// How embellished the letterforms are
    pub rating_embellishment: i32,
    /// How wide the characters are
    pub rating_character_width: i32,
    /// How cursive the handwriting is, when the service reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating_cursivity: Option<i32>,
}

impl Style {
    /// Returns true if every reported rating is non-zero.
    ///
    /// The service never reports a zero rating, so a zero here points at a
    /// payload that did not carry the field it was expected to.
    #[must_use]
    pub const fn has_ratings(&self) -> bool {
        self.rating_neatness != 0
            && self.rating_embellishment != 0
            && self.rating_character_width != 0
            && !matches!(self.rating_cursivity, Some(0))
    }
}
