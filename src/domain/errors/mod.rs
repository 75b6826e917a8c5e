//! Domain error types.

mod lookup_error;
mod manifest_error;

pub use lookup_error::LookupError;
pub use manifest_error::ManifestError;
