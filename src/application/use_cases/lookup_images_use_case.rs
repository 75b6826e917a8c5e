//! Headshot lookup use case.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use crate::application::dto::ProviderConfig;
use crate::application::services::{ManifestCache, ManifestFetcher, compose, find_match};
use crate::domain::cancellation::CancellationSignal;
use crate::domain::entities::{EntityKind, ImageRecord, ImageType, ItemInfo};
use crate::domain::errors::LookupError;
use crate::domain::ports::{Clock, HttpPort, RemoteImageProvider};

/// Provider name reported on every image record.
pub const PROVIDER_NAME: &str = "Local Actor Headshot Provider";

/// Provider priority; low values are consulted before other providers.
pub const PROVIDER_ORDER: i32 = 1;

/// Resolves person names to headshot URLs through the cached file tree.
///
/// Never fails: every problem is logged and reported as "no images".
pub struct ImageLookupService {
    config: RwLock<Arc<ProviderConfig>>,
    fetcher: ManifestFetcher,
    cache: ManifestCache,
    clock: Arc<dyn Clock>,
}

impl ImageLookupService {
    /// Creates new service.
    #[must_use]
    pub fn new(config: ProviderConfig, http: Arc<dyn HttpPort>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: RwLock::new(Arc::new(config)),
            fetcher: ManifestFetcher::new(http),
            cache: ManifestCache::new(Arc::clone(&clock)),
            clock,
        }
    }

    /// Returns the configuration in effect for new lookups.
    #[must_use]
    pub fn config(&self) -> Arc<ProviderConfig> {
        Arc::clone(&self.config.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces the configuration and drops the cached manifest.
    ///
    /// Lookups already running keep the configuration they started with.
    pub async fn reconfigure(&self, config: ProviderConfig) {
        {
            let mut slot = self
                .config
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            *slot = Arc::new(config);
        }
        self.cache.invalidate().await;
        info!("Provider configuration updated");
    }

    /// Manifest cache used by this service.
    #[must_use]
    pub const fn cache(&self) -> &ManifestCache {
        &self.cache
    }

    /// Looks up images for `person_name`.
    ///
    /// Returns at most one record. An empty name returns nothing without
    /// touching the cache.
    pub async fn lookup(&self, person_name: &str, cancel: &CancellationSignal) -> Vec<ImageRecord> {
        if person_name.is_empty() {
            return Vec::new();
        }

        match self.resolve(person_name, cancel).await {
            Ok(Some(record)) => {
                info!(
                    actor = %person_name,
                    url = %record.url(),
                    "Found image for actor"
                );
                vec![record]
            }
            Ok(None) => {
                warn!(actor = %person_name, "No image found for actor");
                Vec::new()
            }
            Err(e) => {
                error!(actor = %person_name, error = %e, "Error getting image for actor");
                Vec::new()
            }
        }
    }

    async fn resolve(
        &self,
        person_name: &str,
        cancel: &CancellationSignal,
    ) -> Result<Option<ImageRecord>, LookupError> {
        let config = self.config();
        let detailed = config.enable_detailed_logging;
        let base_url = config.effective_base_url();
        let file_tree_path = config.effective_file_tree_path();
        let fetcher = &self.fetcher;
        let fetched = AtomicBool::new(false);
        let fetched_flag = &fetched;

        let manifest = self
            .cache
            .get_or_fetch(config.cache_ttl(), move || {
                fetched_flag.store(true, Ordering::Relaxed);
                if detailed {
                    debug!("Manifest not cached, fetching");
                }
                fetcher.fetch(base_url, file_tree_path, cancel)
            })
            .await;

        if detailed {
            if !fetched.load(Ordering::Relaxed) {
                debug!("Manifest served from cache");
            }
            debug!(
                actor = %person_name,
                categories = manifest.categories().len(),
                entries = manifest.entry_count(),
                "Matching against manifest"
            );
        }

        let Some(found) = find_match(&manifest, person_name) else {
            return Ok(None);
        };

        if detailed {
            debug!(
                actor = %person_name,
                category = %found.category(),
                image = %found.image(),
                "Manifest entry matched"
            );
        }

        let url = compose(
            base_url,
            config.effective_content_path(),
            found.category(),
            found.image(),
        );
        reqwest::Url::parse(&url).map_err(|e| LookupError::invalid_url(&url, e.to_string()))?;

        Ok(Some(ImageRecord::new(
            PROVIDER_NAME,
            url,
            ImageType::Primary,
            self.clock.now(),
        )))
    }
}

#[async_trait]
impl RemoteImageProvider for ImageLookupService {
    fn name(&self) -> &str {
        PROVIDER_NAME
    }

    fn order(&self) -> i32 {
        PROVIDER_ORDER
    }

    fn supports(&self, kind: EntityKind) -> bool {
        kind.is_person()
    }

    fn supported_images(&self, _kind: EntityKind) -> Vec<ImageType> {
        vec![ImageType::Primary]
    }

    async fn get_images(&self, item: &ItemInfo, cancel: &CancellationSignal) -> Vec<ImageRecord> {
        if !self.supports(item.kind()) {
            return Vec::new();
        }
        self.lookup(item.name(), cancel).await
    }
}
