//! Name canonicalization for case- and space-insensitive comparison.

/// Removes every space (U+0020) and lowercases with the locale-independent
/// Unicode mapping. `None` normalizes to an empty string.
///
/// Other whitespace such as tabs or no-break spaces is kept.
#[must_use]
pub fn normalize<'a>(name: impl Into<Option<&'a str>>) -> String {
    name.into()
        .map_or_else(String::new, |n| n.replace(' ', "").to_lowercase())
}
