//! Manifest retrieval with fail-open semantics.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::cancellation::CancellationSignal;
use crate::domain::entities::Manifest;
use crate::domain::errors::ManifestError;
use crate::domain::manifest_format::parse_manifest;
use crate::domain::ports::HttpPort;

use super::url_composer::trim_base_url;

/// Fetches and parses the remote file tree.
pub struct ManifestFetcher {
    http: Arc<dyn HttpPort>,
}

impl ManifestFetcher {
    /// Creates a fetcher over the given transport.
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>) -> Self {
        Self { http }
    }

    /// Builds the manifest URL from its parts.
    #[must_use]
    pub fn manifest_url(base_url: &str, manifest_path: &str) -> String {
        format!("{}{manifest_path}", trim_base_url(base_url))
    }

    /// Fetches the manifest, reporting failures.
    ///
    /// # Errors
    /// Returns the transport, status, parse or cancellation failure.
    pub async fn try_fetch(
        &self,
        base_url: &str,
        manifest_path: &str,
        cancel: &CancellationSignal,
    ) -> Result<Manifest, ManifestError> {
        let url = Self::manifest_url(base_url, manifest_path);
        if cancel.is_cancelled() {
            return Err(ManifestError::Cancelled);
        }

        debug!(url = %url, "Fetching file tree");
        let body = self.http.get_string(&url, cancel).await?;

        if cancel.is_cancelled() {
            return Err(ManifestError::Cancelled);
        }

        let manifest = parse_manifest(&body)?;
        debug!(
            url = %url,
            categories = manifest.categories().len(),
            entries = manifest.entry_count(),
            "File tree parsed"
        );
        Ok(manifest)
    }

    /// Fetches the manifest. Any failure is logged and yields an empty
    /// manifest.
    pub async fn fetch(
        &self,
        base_url: &str,
        manifest_path: &str,
        cancel: &CancellationSignal,
    ) -> Manifest {
        match self.try_fetch(base_url, manifest_path, cancel).await {
            Ok(manifest) => manifest,
            Err(e) => {
                error!(
                    url = %Self::manifest_url(base_url, manifest_path),
                    error = %e,
                    "Error fetching actor mapping"
                );
                Manifest::empty()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockHttpPort;
    use mockall::predicate::{always, eq};

    const BODY: &str = r#"{"Content":{"actors":{"John Doe.jpg":"johndoe.jpg?t=999"}}}"#;

    fn fetcher(mock: MockHttpPort) -> ManifestFetcher {
        ManifestFetcher::new(Arc::new(mock))
    }

    #[test]
    fn test_manifest_url_trims_one_slash() {
        assert_eq!(
            ManifestFetcher::manifest_url("http://127.0.0.1/", "/Filetree.json"),
            "http://127.0.0.1/Filetree.json"
        );
        assert_eq!(
            ManifestFetcher::manifest_url("http://127.0.0.1", "/Filetree.json"),
            "http://127.0.0.1/Filetree.json"
        );
    }

    #[tokio::test]
    async fn test_fetch_requests_manifest_url() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string()
            .with(eq("http://127.0.0.1/Filetree.json"), always())
            .times(1)
            .returning(|_, _| Ok(BODY.to_string()));

        let manifest = fetcher(mock)
            .fetch("http://127.0.0.1", "/Filetree.json", &CancellationSignal::new())
            .await;

        assert_eq!(manifest.entry_count(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_yields_empty_manifest() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string()
            .times(1)
            .returning(|url, _| Err(ManifestError::transport(url, "connection refused")));

        let manifest = fetcher(mock)
            .fetch("http://127.0.0.1", "/Filetree.json", &CancellationSignal::new())
            .await;

        assert!(manifest.is_empty());
    }

    #[tokio::test]
    async fn test_status_failure_is_reported_by_try_fetch() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string()
            .returning(|url, _| Err(ManifestError::status(url, 404)));

        let result = fetcher(mock)
            .try_fetch("http://127.0.0.1", "/Filetree.json", &CancellationSignal::new())
            .await;

        assert_eq!(
            result,
            Err(ManifestError::status("http://127.0.0.1/Filetree.json", 404))
        );
    }

    #[tokio::test]
    async fn test_malformed_body_yields_empty_manifest() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string()
            .returning(|_, _| Ok("<html>not json</html>".to_string()));
        let fetcher = fetcher(mock);
        let cancel = CancellationSignal::new();

        let result = fetcher.try_fetch("http://h", "/f.json", &cancel).await;
        assert!(matches!(result, Err(ManifestError::Parse { .. })));

        let manifest = fetcher.fetch("http://h", "/f.json", &cancel).await;
        assert!(manifest.is_empty());
    }

    #[tokio::test]
    async fn test_cancelled_before_request_skips_transport() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string().times(0);
        let cancel = CancellationSignal::new();
        cancel.cancel();

        let result = fetcher(mock)
            .try_fetch("http://127.0.0.1", "/Filetree.json", &cancel)
            .await;

        assert_eq!(result, Err(ManifestError::Cancelled));
    }

    #[tokio::test]
    async fn test_cancelled_during_request_discards_body() {
        let mut mock = MockHttpPort::new();
        mock.expect_get_string().times(1).returning(|_, cancel| {
            cancel.cancel();
            Ok(BODY.to_string())
        });

        let manifest = fetcher(mock)
            .fetch("http://127.0.0.1", "/Filetree.json", &CancellationSignal::new())
            .await;

        assert!(manifest.is_empty());
    }
}
