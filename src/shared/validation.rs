use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating slugs used in public URLs
    /// Must be lowercase alphanumeric with single hyphens between words
    /// - Valid: "rice", "rice-bran-oil", "grade-5"
    /// - Invalid: "-rice", "rice-", "rice--oil", "Rice", "rice_oil"
    pub static ref SLUG_REGEX: Regex = Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap();

    /// Site content keys: camelCase or kebab-case identifiers, at most 64 characters
    pub static ref CONTENT_KEY_REGEX: Regex = Regex::new(r"^[A-Za-z][A-Za-z0-9_-]{0,63}$").unwrap();

    static ref NON_ALPHANUMERIC_RUN: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Derive a URL slug from a display name.
///
/// Lowercases, collapses every run of non-alphanumeric characters into one
/// hyphen and trims hyphens from both ends. Non-ASCII letters are dropped.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase();
    NON_ALPHANUMERIC_RUN
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
