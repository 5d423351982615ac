//! Load error types.

use thiserror::Error;

use super::FetchError;
use crate::domain::entities::SharedImage;

/// Outcome delivered to a load completion handler.
pub type LoadResult = std::result::Result<SharedImage, LoadError>;

/// Errors delivered to callers of the image loader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The fetcher could not retrieve the bytes. Carries the fetcher's error verbatim.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Bytes were retrieved but are not a decodable image.
    /// Only produced under [`DecodeFailurePolicy::Surface`](crate::domain::entities::DecodeFailurePolicy::Surface).
    #[error("{byte_len} bytes from {location} could not be decoded as an image")]
    Decode {
        /// Location the bytes were fetched from.
        location: String,
        /// Number of bytes received.
        byte_len: usize,
    },

    /// A cache miss was requested outside a Tokio runtime, so no fetch could start.
    #[error("no async runtime available to fetch {location}")]
    NoRuntime {
        /// Location that was not fetched.
        location: String,
    },
}

impl LoadError {
    /// Creates decode error.
    #[must_use]
    pub fn decode(location: impl Into<String>, byte_len: usize) -> Self {
        Self::Decode {
            location: location.into(),
            byte_len,
        }
    }

    /// Creates no-runtime error.
    #[must_use]
    pub fn no_runtime(location: impl Into<String>) -> Self {
        Self::NoRuntime {
            location: location.into(),
        }
    }

    /// Returns the underlying fetch error, if any.
    #[must_use]
    pub const fn as_fetch(&self) -> Option<&FetchError> {
        match self {
            Self::Fetch(e) => Some(e),
            Self::Decode { .. } | Self::NoRuntime { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_is_forwarded_verbatim() {
        let fetch = FetchError::status(500, "Internal Server Error");
        let error = LoadError::from(fetch.clone());
        assert_eq!(error.as_fetch(), Some(&fetch));
        assert_eq!(error.to_string(), fetch.to_string());
    }

    #[test]
    fn test_decode_error_display() {
        let error = LoadError::decode("http://x/a.png", 12);
        assert!(error.as_fetch().is_none());
        assert_eq!(
            error.to_string(),
            "12 bytes from http://x/a.png could not be decoded as an image"
        );
    }

    #[test]
    fn test_no_runtime_error_display() {
        let error = LoadError::no_runtime("http://x/a.png");
        assert!(error.as_fetch().is_none());
        assert_eq!(
            error.to_string(),
            "no async runtime available to fetch http://x/a.png"
        );
    }
}
