//! Command-line arguments.

use super::app_config::LogLevel;
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "headshot-resolver",
    version,
    about = "Resolve person names to headshot URLs from a remote file tree",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Base URL of the file tree host.
    #[arg(long, env = "HEADSHOT_BASE_URL", value_name = "URL")]
    pub base_url: Option<String>,

    /// Path of the file tree manifest below the base URL.
    #[arg(long, value_name = "PATH")]
    pub file_tree_path: Option<String>,

    /// Path of the image content below the base URL.
    #[arg(long, value_name = "PATH")]
    pub content_path: Option<String>,

    /// Manifest cache lifetime in minutes.
    #[arg(long, value_name = "MINUTES")]
    pub cache_duration_minutes: Option<u32>,

    /// Log cache and match decisions.
    #[arg(long)]
    pub detailed_logging: Option<bool>,

    /// Person names to look up.
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}
