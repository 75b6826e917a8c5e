//! Remote image provider port exposed to the host.

use async_trait::async_trait;

use crate::domain::cancellation::CancellationSignal;
use crate::domain::entities::{EntityKind, ImageRecord, ImageType, ItemInfo};

/// A source of remote images the host's metadata refresh consults.
///
/// Providers never fail from the host's point of view: every problem
/// degrades to an empty list.
#[async_trait]
pub trait RemoteImageProvider: Send + Sync {
    /// Display name of the provider.
    fn name(&self) -> &str;

    /// Priority among providers; lower values are consulted first.
    fn order(&self) -> i32;

    /// Returns whether the provider handles items of `kind`.
    fn supports(&self, kind: EntityKind) -> bool;

    /// Image roles the provider can supply for items of `kind`.
    fn supported_images(&self, kind: EntityKind) -> Vec<ImageType>;

    /// Returns candidate images for `item`.
    async fn get_images(&self, item: &ItemInfo, cancel: &CancellationSignal) -> Vec<ImageRecord>;
}
