//! Data transfer objects for the application layer.

mod provider_config;

pub use provider_config::{
    DEFAULT_BASE_URL, DEFAULT_CACHE_DURATION_MINUTES, DEFAULT_CONTENT_PATH,
    DEFAULT_FILE_TREE_PATH, DEFAULT_REQUEST_TIMEOUT_SECS, ProviderConfig,
};
