//! Lookup pipeline error types.

use thiserror::Error;

/// Failures after a manifest match. These never reach the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum LookupError {
    #[error("composed image URL {url} is invalid: {message}")]
    InvalidUrl { url: String, message: String },
}

impl LookupError {
    /// Creates invalid URL error.
    #[must_use]
    pub fn invalid_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            message: message.into(),
        }
    }
}
