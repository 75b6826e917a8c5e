//! Manifest matching.
//!
//! Walks categories and entries in manifest order. The first entry whose
//! normalized filename, with or without extension, equals the normalized
//! query wins.

use crate::domain::entities::{Manifest, MatchResult};

use super::name_normalizer::normalize;

/// Returns `file_name` without directory components and final extension.
#[must_use]
pub fn file_stem(file_name: &str) -> &str {
    let base = file_name
        .rfind(['/', '\\'])
        .map_or(file_name, |i| &file_name[i + 1..]);
    base.rfind('.').map_or(base, |i| &base[..i])
}

/// Drops a query suffix from an image reference.
///
/// Only a `?` after the first character starts a suffix; a reference that
/// begins with `?` is returned unchanged.
#[must_use]
pub fn strip_query(image: &str) -> &str {
    match image.find('?') {
        Some(i) if i > 0 => &image[..i],
        _ => image,
    }
}

/// Finds the image for `query` in `manifest`.
#[must_use]
pub fn find_match(manifest: &Manifest, query: &str) -> Option<MatchResult> {
    let wanted = normalize(query);
    if wanted.is_empty() {
        return None;
    }

    manifest.categories().iter().find_map(|category| {
        category
            .entries()
            .iter()
            .find(|entry| {
                normalize(entry.file_name()) == wanted
                    || normalize(file_stem(entry.file_name())) == wanted
            })
            .map(|entry| MatchResult::new(category.name(), strip_query(entry.image())))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::manifest_format::parse_manifest;
    use test_case::test_case;

    fn manifest(body: &str) -> Manifest {
        parse_manifest(body).unwrap()
    }

    #[test_case("img.jpg?t=12345", "img.jpg" ; "timestamp_suffix")]
    #[test_case("?leading", "?leading" ; "leading_question_mark")]
    #[test_case("plain.jpg", "plain.jpg" ; "no_suffix")]
    #[test_case("a.jpg?x=1?y=2", "a.jpg" ; "first_question_mark")]
    #[test_case("a.jpg?", "a.jpg" ; "trailing_question_mark")]
    #[test_case("", "" ; "empty")]
    fn test_strip_query(input: &str, expected: &str) {
        assert_eq!(strip_query(input), expected);
    }

    #[test_case("John Doe.jpg", "John Doe" ; "simple")]
    #[test_case("archive.tar.gz", "archive.tar" ; "last_extension_only")]
    #[test_case("noext", "noext" ; "no_extension")]
    #[test_case(".jpg", "" ; "extension_only")]
    #[test_case("dir/John Doe.png", "John Doe" ; "forward_slash")]
    #[test_case("dir\\John Doe.png", "John Doe" ; "back_slash")]
    #[test_case("dir.v2/John", "John" ; "dot_in_directory")]
    fn test_file_stem(input: &str, expected: &str) {
        assert_eq!(file_stem(input), expected);
    }

    #[test]
    fn test_null_sibling_does_not_hide_match() {
        let m = manifest(r#"{"Content":{"actors":{"Broken.jpg":null,"John Doe.jpg":"johndoe.jpg"}}}"#);

        let result = find_match(&m, "John Doe").unwrap();

        assert_eq!(result.image(), "johndoe.jpg");
        assert!(find_match(&m, "Broken").is_none());
    }

    #[test]
    fn test_match_without_extension() {
        let m = manifest(r#"{"Content":{"actors":{"John Doe.jpg":"johndoe.jpg?t=999"}}}"#);

        let result = find_match(&m, "john doe").unwrap();

        assert_eq!(result.category(), "actors");
        assert_eq!(result.image(), "johndoe.jpg");
    }

    #[test]
    fn test_match_with_extension() {
        let m = manifest(r#"{"Content":{"actors":{"John Doe.jpg":"johndoe.jpg"}}}"#);

        let result = find_match(&m, "JOHN DOE.JPG").unwrap();

        assert_eq!(result.image(), "johndoe.jpg");
    }

    #[test]
    fn test_no_match() {
        let m = manifest(r#"{"Content":{"actors":{"John Doe.jpg":"johndoe.jpg"}}}"#);
        assert!(find_match(&m, "Jane Smith").is_none());
    }

    #[test]
    fn test_empty_manifest_has_no_match() {
        assert!(find_match(&Manifest::empty(), "John Doe").is_none());
    }

    #[test]
    fn test_empty_query_never_matches() {
        let m = manifest(r#"{"Content":{"actors":{" .jpg":"blank.jpg","":"empty.jpg"}}}"#);

        assert!(find_match(&m, "").is_none());
        assert!(find_match(&m, "   ").is_none());
    }

    #[test]
    fn test_first_category_wins_on_duplicates() {
        let m = manifest(
            r#"{"Content":{
                "directors":{"John Doe.jpg":"director.jpg"},
                "actors":{"John Doe.jpg":"actor.jpg"}
            }}"#,
        );

        let result = find_match(&m, "John Doe").unwrap();

        assert_eq!(result.category(), "directors");
        assert_eq!(result.image(), "director.jpg");
    }

    #[test]
    fn test_first_entry_wins_within_category() {
        let m = manifest(
            r#"{"Content":{"actors":{
                "johndoe.png":"first.png",
                "John Doe.jpg":"second.jpg"
            }}}"#,
        );

        let result = find_match(&m, "John Doe").unwrap();

        assert_eq!(result.image(), "first.png");
    }

    #[test]
    fn test_later_category_matches_when_earlier_does_not() {
        let m = manifest(
            r#"{"Content":{
                "actors":{"Someone Else.jpg":"else.jpg"},
                "writers":{"John Doe.webp":"jd.webp?v=2"}
            }}"#,
        );

        let result = find_match(&m, "john doe").unwrap();

        assert_eq!(result.category(), "writers");
        assert_eq!(result.image(), "jd.webp");
    }

    #[test]
    fn test_reference_starting_with_question_mark_is_kept() {
        let m = manifest(r#"{"Content":{"actors":{"John Doe.jpg":"?leading"}}}"#);

        let result = find_match(&m, "John Doe").unwrap();

        assert_eq!(result.image(), "?leading");
    }
}
