//! Domain entity definitions.

mod image_record;
mod item;
mod manifest;
mod match_result;

pub use image_record::{ImageRecord, ImageType};
pub use item::{EntityKind, ItemInfo};
pub use manifest::{Category, Manifest, ManifestEntry};
pub use match_result::MatchResult;
