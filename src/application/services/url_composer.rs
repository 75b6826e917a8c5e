//! Content URL composition.

/// Removes exactly one trailing `/` from `base_url`.
#[must_use]
pub fn trim_base_url(base_url: &str) -> &str {
    base_url.strip_suffix('/').unwrap_or(base_url)
}

/// Builds `base_url + content_path + category + "/" + file_name`.
///
/// No percent-encoding is applied; names pass through as stored.
#[must_use]
pub fn compose(base_url: &str, content_path: &str, category: &str, file_name: &str) -> String {
    format!(
        "{}{content_path}{category}/{file_name}",
        trim_base_url(base_url)
    )
}
