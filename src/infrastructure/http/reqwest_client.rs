//! reqwest-backed HTTP transport.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::cancellation::CancellationSignal;
use crate::domain::errors::ManifestError;
use crate::domain::ports::HttpPort;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// The HTTP client could not be built (TLS backend or system configuration).
#[derive(Debug, Error)]
#[error("failed to create HTTP client: {0}")]
pub struct ClientBuildError(#[from] reqwest::Error);

/// HTTP client used to download the file tree.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates client with the given request timeout.
    ///
    /// # Errors
    /// Returns [`ClientBuildError`] if HTTP client creation fails.
    pub fn new(timeout: Duration) -> Result<Self, ClientBuildError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self { client })
    }

    async fn request(&self, url: &str) -> Result<String, ManifestError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(url = %url, error = %e, "Failed to connect to file tree host");
            if e.is_timeout() {
                ManifestError::transport(url, "request timed out")
            } else if e.is_connect() {
                ManifestError::transport(url, "failed to connect")
            } else {
                ManifestError::transport(url, e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ManifestError::status(url, status.as_u16()));
        }

        response
            .text()
            .await
            .map_err(|e| ManifestError::transport(url, format!("failed to read body: {e}")))
    }
}

#[async_trait]
impl HttpPort for ReqwestHttpClient {
    async fn get_string(
        &self,
        url: &str,
        cancel: &CancellationSignal,
    ) -> Result<String, ManifestError> {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!(url = %url, "Request cancelled");
                Err(ManifestError::Cancelled)
            }
            result = self.request(url) => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = ReqwestHttpClient::new(Duration::from_secs(5));
        assert!(client.is_ok());
    }

    #[test]
    fn test_build_error_message_has_no_url_placeholder() {
        let source = Client::new().get("not a url").build().unwrap_err();

        let error = ClientBuildError::from(source);

        let message = error.to_string();
        assert!(message.starts_with("failed to create HTTP client: "));
        assert!(!message.contains("failed to reach"));
    }

    #[tokio::test]
    async fn test_cancelled_signal_short_circuits() {
        let client = ReqwestHttpClient::new(Duration::from_secs(5)).unwrap();
        let cancel = CancellationSignal::new();
        cancel.cancel();

        // Port 9 (discard) is never contacted because the signal wins.
        let result = client.get_string("http://127.0.0.1:9/Filetree.json", &cancel).await;

        assert_eq!(result, Err(ManifestError::Cancelled));
    }
}
