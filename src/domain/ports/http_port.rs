//! HTTP transport port definition.

use async_trait::async_trait;

use crate::domain::cancellation::CancellationSignal;
use crate::domain::errors::ManifestError;

/// Port for plain GET requests returning a text body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Fetches `url` and returns the response body.
    ///
    /// Implementations must stop waiting as soon as `cancel` fires and
    /// report [`ManifestError::Cancelled`]. Non-success statuses are errors.
    async fn get_string(
        &self,
        url: &str,
        cancel: &CancellationSignal,
    ) -> Result<String, ManifestError>;
}
