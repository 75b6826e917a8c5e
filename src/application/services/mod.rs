//! Application services: manifest retrieval, caching and matching.

pub mod manifest_cache;
pub mod manifest_fetcher;
pub mod matcher;
pub mod name_normalizer;
pub mod url_composer;

pub use manifest_cache::{CacheEntry, CacheStats, ManifestCache};
pub use manifest_fetcher::ManifestFetcher;
pub use matcher::{file_stem, find_match, strip_query};
pub use name_normalizer::normalize;
pub use url_composer::{compose, trim_base_url};
