// src/core/extract.rs
//! Pull `JSON.parse('<payload>')` literals out of a script bundle.
//!
//! The payload is matched lazily up to the first `')`. There is no quote
//! balancing: a payload that itself contains `')` gets cut short there. The
//! dashboard doesn't emit such payloads; if it ever does, the fix is an
//! escape-aware scanner, not a tweak to the pattern.
//!
//! Payloads are returned exactly as they sit in the source, escapes and all
//! (`\'`, `é`, ...). Nothing is unescaped or validated.

use std::sync::LazyLock;

use regex::Regex;

static JSON_PARSE: LazyLock<Regex> = LazyLock::new(|| {
    // `.` stops at newlines, same as the bundle's single-line literals
    Regex::new(r"JSON\.parse\('(.*?)'\)").unwrap()
});

/// One payload and its 0-based rank in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LiteralOccurrence<'a> {
    pub index: usize,
    pub content: &'a str,
}

/// Lazily yield every payload, left to right. Calling again restarts the scan.
pub fn extract_literals(text: &str) -> impl Iterator<Item = &str> + '_ {
    JSON_PARSE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// `extract_literals` with ordinals attached.
pub fn occurrences(text: &str) -> impl Iterator<Item = LiteralOccurrence<'_>> + '_ {
    extract_literals(text)
        .enumerate()
        .map(|(index, content)| LiteralOccurrence { index, content })
}
