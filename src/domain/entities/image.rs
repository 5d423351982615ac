//! Domain types for image handling.

use std::sync::Arc;

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::Url;

/// Address of an image resource.
///
/// Keeps the text exactly as the caller supplied it next to the parsed
/// [`Url`]. The text feeds the cache key; the parsed form feeds the fetcher.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location {
    raw: String,
    url: Url,
}

impl Location {
    /// Parses `input` as an absolute URL.
    ///
    /// # Errors
    /// Returns the parse error if `input` is not a valid absolute URL.
    pub fn parse(input: &str) -> Result<Self, url::ParseError> {
        let url = Url::parse(input)?;
        Ok(Self {
            raw: input.to_owned(),
            url,
        })
    }

    /// Returns the location as originally written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Location {
    type Err = url::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A decoded image, shared between the cache and every caller that loaded it.
pub type SharedImage = Arc<image::DynamicImage>;

/// Cache key for an image.
///
/// Always the [`Location`] text as the caller wrote it: no case folding, no
/// query stripping, no canonicalization by the URL parser. Two locations that differ by any
/// character map to distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageKey(String);

impl ImageKey {
    /// Creates a new `ImageKey` from any string-like input.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ImageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&Location> for ImageKey {
    fn from(location: &Location) -> Self {
        Self(location.raw.clone())
    }
}

impl From<&str> for ImageKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageKey {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// What the loader does when fetched bytes cannot be decoded into an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecodeFailurePolicy {
    /// Decode failures are swallowed: the completion handler is never invoked
    /// and nothing is cached.
    #[default]
    Drop,
    /// Decode failures are delivered to the completion handler as
    /// [`LoadError::Decode`](crate::domain::errors::LoadError::Decode).
    Surface,
}

impl std::fmt::Display for DecodeFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Drop => write!(f, "drop"),
            Self::Surface => write!(f, "surface"),
        }
    }
}
