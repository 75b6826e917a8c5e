/// Successful manifest match: the category and the cleaned image reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    category: String,
    image: String,
}

impl MatchResult {
    /// Creates a match result.
    #[must_use]
    pub fn new(category: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            image: image.into(),
        }
    }

    /// Category the entry was found in.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Image reference with any query suffix removed.
    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}
