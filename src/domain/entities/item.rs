//! Metadata items the host asks providers about.

use serde::{Deserialize, Serialize};

/// Kind of metadata item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum EntityKind {
    /// A person (actor, director, writer).
    Person,
    Movie,
    Series,
    Episode,
    MusicArtist,
    Other,
}

impl EntityKind {
    /// Returns true for person items.
    #[must_use]
    pub const fn is_person(self) -> bool {
        matches!(self, Self::Person)
    }
}

/// The subset of a host item a provider needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemInfo {
    name: String,
    kind: EntityKind,
}

impl ItemInfo {
    /// Creates an item of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: EntityKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Creates a person item.
    #[must_use]
    pub fn person(name: impl Into<String>) -> Self {
        Self::new(name, EntityKind::Person)
    }

    /// Display name of the item.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Item kind.
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        self.kind
    }
}
