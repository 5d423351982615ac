//! Fetch error types.

use thiserror::Error;

/// Reasons a remote request for image bytes did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum FetchError {
    #[error("network error: {message}")]
    Network { message: String },

    #[error("request timed out: {message}")]
    Timeout { message: String },

    #[error("HTTP {status}: {reason}")]
    Status { status: u16, reason: String },

    #[error("failed to read response body: {message}")]
    Body { message: String },

    #[error("failed to create HTTP client: {message}")]
    Client { message: String },
}

impl FetchError {
    /// Creates network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
        }
    }

    /// Creates error for a non-success HTTP status.
    #[must_use]
    pub fn status(status: u16, reason: impl Into<String>) -> Self {
        Self::Status {
            status,
            reason: reason.into(),
        }
    }

    /// Creates body read error.
    #[must_use]
    pub fn body(message: impl Into<String>) -> Self {
        Self::Body {
            message: message.into(),
        }
    }

    /// Creates client construction error.
    #[must_use]
    pub fn client(message: impl Into<String>) -> Self {
        Self::Client {
            message: message.into(),
        }
    }

    /// Returns whether a later request for the same location could succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::Body { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Client { .. } => false,
        }
    }
}
