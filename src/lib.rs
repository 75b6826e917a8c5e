//! Headshot resolver - person names to headshot URLs.
//!
//! Looks people up in a remotely hosted, categorized file tree
//! (`Filetree.json`), cached in memory, and composes the image URL a media
//! server's metadata pipeline can download. Every failure degrades to "no
//! image" so a bad file tree host never breaks a metadata refresh.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "headshot-resolver";
