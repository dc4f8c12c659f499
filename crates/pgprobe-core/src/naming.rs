//! Conversion of catalog identifiers into type and field names.

use regex::Regex;
use std::sync::OnceLock;

/// Converts a raw catalog identifier into an upper camel case name.
///
/// Two passes, in order:
///
/// 1. Every case-insensitive occurrence of `sql`, `id`, `uri`, `url` or `?` is
///    upper-cased in place. Matches are plain substrings, so `acid` becomes
///    `acID`; generated names rely on this, so it must stay loose.
/// 2. The result is split on `_`, the first character of each non-empty
///    segment is upper-cased and the segments are joined without separator.
///
/// ```
/// use pgprobe_core::normalize_identifier;
///
/// assert_eq!(normalize_identifier("release_date"), "ReleaseDate");
/// assert_eq!(normalize_identifier("user_id"), "UserID");
/// ```
pub fn normalize_identifier(raw: &str) -> String {
    camelize(&uppercase_acronyms(raw))
}

fn acronym_regex() -> &'static Regex {
    static ACRONYM_REGEX: OnceLock<Regex> = OnceLock::new();
    ACRONYM_REGEX.get_or_init(|| {
        Regex::new(r"(?i)(\?|(sql)|(id)|(uri)|(url))").expect("Invalid regex pattern")
    })
}

fn uppercase_acronyms(raw: &str) -> String {
    acronym_regex()
        .replace_all(raw, |caps: &regex::Captures<'_>| caps[0].to_uppercase())
        .into_owned()
}

fn camelize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for segment in input.split('_') {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    }
    out
}
