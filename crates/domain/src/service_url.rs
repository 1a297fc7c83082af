//! Base URL of the remote service and endpoint construction.

use std::fmt;

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Default public endpoint of the handwriting service.
pub const DEFAULT_SERVICE_URL: &str = "https://api.handwriting.io";

/// The base URL every endpoint path is appended to.
///
/// User-info, query and fragment are stripped on construction, so a
/// `ServiceUrl` never carries credentials. A path prefix (`/v1`) is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Normalizes a parsed URL into a service base.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidServiceUrl`] for URLs that are not
    /// `http`/`https` or cannot carry a path (e.g. `mailto:`).
    pub fn new(mut url: Url) -> DomainResult<Self> {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DomainError::InvalidServiceUrl(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        if url.cannot_be_a_base() || url.host_str().is_none() {
            return Err(DomainError::InvalidServiceUrl(url.to_string()));
        }

        url.set_username("")
            .and_then(|()| url.set_password(None))
            .map_err(|()| DomainError::InvalidServiceUrl(url.to_string()))?;
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Parses and normalizes a service base URL.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidServiceUrl`] if the string does not parse
    /// or is rejected by [`ServiceUrl::new`].
    pub fn parse(input: &str) -> DomainResult<Self> {
        let url =
            Url::parse(input).map_err(|e| DomainError::InvalidServiceUrl(format!("{e}: {input}")))?;
        Self::new(url)
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Builds the absolute URL of an endpoint below this base.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a segment
    /// never introduces a new path level.
    #[must_use]
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
