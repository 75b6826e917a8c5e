//! Remote file tree manifest.

use std::collections::HashMap;

/// One file in a category: the raw filename and its image reference.
///
/// The reference may carry a query suffix such as `?t=1700000000`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    file_name: String,
    image: String,
}

impl ManifestEntry {
    /// Creates a new entry.
    #[must_use]
    pub fn new(file_name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            image: image.into(),
        }
    }

    /// Raw filename as listed in the manifest.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Image reference, possibly with a query suffix.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}

/// A named group of entries, in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    entries: Vec<ManifestEntry>,
}

impl Category {
    /// Creates a category from entries.
    ///
    /// A repeated filename keeps the position of its first occurrence and
    /// the image of its last.
    #[must_use]
    pub fn new(name: impl Into<String>, entries: impl IntoIterator<Item = ManifestEntry>) -> Self {
        let mut deduped: Vec<ManifestEntry> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for entry in entries {
            if let Some(&index) = positions.get(&entry.file_name) {
                deduped[index].image = entry.image;
            } else {
                positions.insert(entry.file_name.clone(), deduped.len());
                deduped.push(entry);
            }
        }
        Self {
            name: name.into(),
            entries: deduped,
        }
    }

    /// Category name (a subdirectory of the content path).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in manifest order.
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Looks up an entry by its exact raw filename.
    #[must_use]
    pub fn get(&self, file_name: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|e| e.file_name == file_name)
    }

    /// Returns true if the category has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parsed file tree.
///
/// Categories and their entries keep the order they had in the source
/// document. A manifest is never edited after construction; a refresh
/// replaces it as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    categories: Vec<Category>,
}

impl Manifest {
    /// Creates an empty manifest.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Creates a manifest from categories.
    ///
    /// A repeated category name keeps the position of its first occurrence
    /// and the entries of its last.
    #[must_use]
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        let mut deduped: Vec<Category> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for category in categories {
            if let Some(&index) = positions.get(&category.name) {
                deduped[index].entries = category.entries;
            } else {
                positions.insert(category.name.clone(), deduped.len());
                deduped.push(category);
            }
        }
        Self {
            categories: deduped,
        }
    }

    /// Categories in manifest order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by exact name.
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Total number of entries across all categories.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    /// Returns true if the manifest has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
