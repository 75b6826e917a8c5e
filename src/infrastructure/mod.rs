//! Infrastructure layer with external service adapters.

/// System clock.
pub mod clock;
/// Application configuration.
pub mod config;
/// HTTP transport.
pub mod http;

pub use clock::SystemClock;
pub use config::{AppConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use http::{ClientBuildError, ReqwestHttpClient};
