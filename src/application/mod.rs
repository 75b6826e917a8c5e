//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Manifest services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::ProviderConfig;
pub use use_cases::{ImageLookupService, PROVIDER_NAME, PROVIDER_ORDER};
