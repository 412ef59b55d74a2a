/// Pattern definitions for the snake_case checker
///
/// This module holds the regex used to detect snake_case identifiers and the
/// conversion rule that turns them into camelCase.

use lazy_static::lazy_static;
use regex::{Match, Regex};

lazy_static! {
    /// Lowercase/digit runs joined by single underscores, bounded by word boundaries
    pub static ref SNAKE_CASE: Regex =
        Regex::new(r"\b[a-z0-9]+(?:_[a-z0-9]+)+\b").expect("snake_case pattern is valid");
}

/// Find every snake_case token in a line.
///
/// Matches are non-overlapping and returned leftmost first.
pub fn find_snake_case(line: &str) -> impl Iterator<Item = Match<'_>> {
    SNAKE_CASE.find_iter(line)
}

/// Check whether a whole string is a single snake_case token
pub fn is_snake_case(token: &str) -> bool {
    SNAKE_CASE
        .find(token)
        .map(|m| m.start() == 0 && m.end() == token.len())
        .unwrap_or(false)
}

/// Convert a snake_case token to camelCase.
///
/// The first segment is kept verbatim; every later segment gets its first
/// character ASCII-uppercased. Empty segments contribute nothing.
///
/// # Arguments
///
/// * `token` - The snake_case token
///
/// # Returns
///
/// The camelCase form of the token
pub fn to_camel_case(token: &str) -> String {
    let mut parts = token.split('_');
    let mut camel = String::with_capacity(token.len());

    if let Some(first) = parts.next() {
        camel.push_str(first);
    }

    for part in parts {
        let mut chars = part.chars();
        if let Some(c) = chars.next() {
            camel.push(c.to_ascii_uppercase());
            camel.extend(chars);
        }
    }

    camel
}
