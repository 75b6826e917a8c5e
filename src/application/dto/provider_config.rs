//! Provider settings.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Default host serving the file tree and the images.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1";
/// Default manifest path relative to the base URL.
pub const DEFAULT_FILE_TREE_PATH: &str = "/Filetree.json";
/// Default image content path relative to the base URL.
pub const DEFAULT_CONTENT_PATH: &str = "/Content/";
/// Default manifest cache lifetime.
pub const DEFAULT_CACHE_DURATION_MINUTES: u32 = 30;
/// Default HTTP request timeout.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Settings for the headshot provider.
///
/// Blank strings fall back to the defaults through the `effective_*`
/// accessors, since host admin pages may persist empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL, e.g. `http://127.0.0.1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of `Filetree.json` below the base URL.
    #[serde(default = "default_file_tree_path")]
    pub file_tree_path: String,

    /// Image path below the base URL. Final URLs have the form
    /// `base_url + content_path + category + "/" + filename`.
    #[serde(default = "default_content_path")]
    pub content_path: String,

    /// Manifest cache lifetime in minutes. Zero disables caching.
    #[serde(default = "default_cache_duration_minutes")]
    pub cache_duration_minutes: u32,

    /// Emit debug events for cache and match decisions.
    #[serde(default)]
    pub enable_detailed_logging: bool,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_file_tree_path() -> String {
    DEFAULT_FILE_TREE_PATH.to_string()
}

fn default_content_path() -> String {
    DEFAULT_CONTENT_PATH.to_string()
}

const fn default_cache_duration_minutes() -> u32 {
    DEFAULT_CACHE_DURATION_MINUTES
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.trim().is_empty() { default } else { value }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            file_tree_path: default_file_tree_path(),
            content_path: default_content_path(),
            cache_duration_minutes: DEFAULT_CACHE_DURATION_MINUTES,
            enable_detailed_logging: false,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ProviderConfig {
    /// Base URL, or the default when blank.
    #[must_use]
    pub fn effective_base_url(&self) -> &str {
        or_default(&self.base_url, DEFAULT_BASE_URL)
    }

    /// Manifest path, or the default when blank.
    #[must_use]
    pub fn effective_file_tree_path(&self) -> &str {
        or_default(&self.file_tree_path, DEFAULT_FILE_TREE_PATH)
    }

    /// Content path, or the default when blank.
    #[must_use]
    pub fn effective_content_path(&self) -> &str {
        or_default(&self.content_path, DEFAULT_CONTENT_PATH)
    }

    /// Manifest cache lifetime.
    #[must_use]
    pub fn cache_ttl(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.cache_duration_minutes))
    }

    /// HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}
