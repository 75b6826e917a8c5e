//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::args::CliArgs;
use crate::application::dto::ProviderConfig;

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl LogLevel {
    /// Converts to tracing level.
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, read from `config.toml` and overridden by
/// CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Headshot provider settings.
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.base_url {
            self.provider.base_url.clone_from(base_url);
        }
        if let Some(file_tree_path) = &args.file_tree_path {
            self.provider.file_tree_path.clone_from(file_tree_path);
        }
        if let Some(content_path) = &args.content_path {
            self.provider.content_path.clone_from(content_path);
        }
        if let Some(minutes) = args.cache_duration_minutes {
            self.provider.cache_duration_minutes = minutes;
        }
        if let Some(detailed) = args.detailed_logging {
            self.provider.enable_detailed_logging = detailed;
        }
    }

    /// Returns the tracing filter directives for this configuration.
    ///
    /// Detailed provider logging lifts this crate to `debug`.
    #[must_use]
    pub fn log_filter(&self) -> String {
        if self.provider.enable_detailed_logging
            && self.log_level.to_tracing_level() < tracing::Level::DEBUG
        {
            format!("{},{}=debug", self.log_level, env!("CARGO_CRATE_NAME"))
        } else {
            self.log_level.to_string()
        }
    }
}
