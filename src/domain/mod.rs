//! Domain layer with core entities, errors and port definitions.

/// Cooperative cancellation.
pub mod cancellation;
/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Manifest wire format.
pub mod manifest_format;
/// Port definitions.
pub mod ports;

pub use cancellation::CancellationSignal;
pub use entities::{EntityKind, ImageRecord, ImageType, ItemInfo, Manifest, MatchResult};
pub use errors::{LookupError, ManifestError};
pub use ports::{Clock, HttpPort, RemoteImageProvider};
