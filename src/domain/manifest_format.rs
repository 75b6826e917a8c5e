//! Wire format of the remote `Filetree.json`.
//!
//! ```json
//! { "Content": { "<category>": { "<filename>": "<image>[?query]" } } }
//! ```
//!
//! The root field name is matched case-insensitively. Object order is kept
//! so that matching stays reproducible when names repeat. Entries whose
//! image reference is `null` are dropped.

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

use crate::domain::entities::{Category, Manifest, ManifestEntry};
use crate::domain::errors::ManifestError;

const CONTENT_FIELD: &str = "content";

/// Parses a manifest document.
///
/// A missing or `null` root content field yields an empty manifest, as does
/// a `null` category.
///
/// # Errors
///
/// Returns [`ManifestError::Parse`] if the body is not JSON of the expected
/// shape.
pub fn parse_manifest(body: &str) -> Result<Manifest, ManifestError> {
    let document: FileTreeDocument = serde_json::from_str(body)?;
    Ok(document.content.unwrap_or_default())
}

struct FileTreeDocument {
    content: Option<Manifest>,
}

impl<'de> Deserialize<'de> for FileTreeDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = FileTreeDocument;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a file tree object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut content = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key.eq_ignore_ascii_case(CONTENT_FIELD) {
                        content = map.next_value::<Option<ContentBlock>>()?.map(|c| c.0);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(FileTreeDocument { content })
            }
        }

        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct ContentBlock(Manifest);

impl<'de> Deserialize<'de> for ContentBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ContentVisitor;

        impl<'de> Visitor<'de> for ContentVisitor {
            type Value = ContentBlock;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of categories")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut categories = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, entries)) = map.next_entry::<String, Option<EntryBlock>>()? {
                    let entries = entries.map(|e| e.0).unwrap_or_default();
                    categories.push(Category::new(name, entries));
                }
                Ok(ContentBlock(Manifest::new(categories)))
            }
        }

        deserializer.deserialize_map(ContentVisitor)
    }
}

struct EntryBlock(Vec<ManifestEntry>);

impl<'de> Deserialize<'de> for EntryBlock {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = EntryBlock;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of filenames to image references")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((file_name, image)) = map.next_entry::<String, Option<String>>()? {
                    // A null reference can never produce an image URL.
                    if let Some(image) = image {
                        entries.push(ManifestEntry::new(file_name, image));
                    }
                }
                Ok(EntryBlock(entries))
            }
        }

        deserializer.deserialize_map(EntryVisitor)
    }
}
