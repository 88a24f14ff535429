//! String extraction and formatting helpers
//!
//! Pure functions over `&str`. The extraction patterns are compiled once and
//! reused across calls.

use regex::Regex;
use std::sync::LazyLock;

// Patterns are compile-time literals, so the unwraps cannot fire
#[allow(clippy::unwrap_used)]
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+").unwrap());

#[allow(clippy::unwrap_used)]
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://\S+").unwrap());

/// Extract every email address from the text
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract every http/https URL from the text
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Number of whitespace-separated words; 0 for empty or blank text
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Uppercase the first character of every word
///
/// A word starts at the beginning of the text or after any character that is
/// not alphanumeric or an underscore.
pub fn capitalize_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_boundary = true;

    for c in text.chars() {
        if at_boundary && c.is_alphabetic() {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_boundary = !(c.is_alphanumeric() || c == '_');
    }
    out
}

/// Reverse a string by code point
///
/// Multi-byte characters survive intact; combining sequences are not
/// reordered as grapheme clusters.
pub fn reverse_string(text: &str) -> String {
    text.chars().rev().collect()
}
