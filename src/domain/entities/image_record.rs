//! Image records handed back to the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Image role within a metadata item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageType {
    /// Primary portrait / poster.
    Primary,
    /// Background art.
    Backdrop,
    /// Thumbnail.
    Thumb,
    /// Logo.
    Logo,
}

impl std::fmt::Display for ImageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Backdrop => write!(f, "backdrop"),
            Self::Thumb => write!(f, "thumb"),
            Self::Logo => write!(f, "logo"),
        }
    }
}

/// A remote image the host may download for an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageRecord {
    provider_name: String,
    url: String,
    image_type: ImageType,
    date_modified: DateTime<Utc>,
}

impl ImageRecord {
    /// Creates a new image record.
    #[must_use]
    pub fn new(
        provider_name: impl Into<String>,
        url: impl Into<String>,
        image_type: ImageType,
        date_modified: DateTime<Utc>,
    ) -> Self {
        Self {
            provider_name: provider_name.into(),
            url: url.into(),
            image_type,
            date_modified,
        }
    }

    /// Name of the provider that produced the record.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        &self.provider_name
    }

    /// Absolute image URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Image role.
    #[must_use]
    pub const fn image_type(&self) -> ImageType {
        self.image_type
    }

    /// Freshness marker, stamped at lookup time.
    #[must_use]
    pub const fn date_modified(&self) -> DateTime<Utc> {
        self.date_modified
    }
}
