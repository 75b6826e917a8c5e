//! Use case implementations.

mod lookup_images_use_case;

pub use lookup_images_use_case::{ImageLookupService, PROVIDER_NAME, PROVIDER_ORDER};
