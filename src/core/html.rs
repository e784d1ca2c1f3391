// src/core/html.rs
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

use crate::error::ResolutionError;

/// ASCII case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_ascii_lowercase()
        .contains(&needle.to_ascii_lowercase())
}

/// All `<script src>` values in document order.
pub fn script_sources(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut out = Vec::new();

    if let Ok(sel) = Selector::parse("script[src]") {
        for el in document.select(&sel) {
            if let Some(src) = el.value().attr("src") {
                let src = src.trim();
                if !src.is_empty() {
                    out.push(src.to_string());
                }
            }
        }
    }
    out
}

pub fn parse_absolute(url: &str) -> Result<Url, ResolutionError> {
    Url::parse(url.trim()).map_err(|source| ResolutionError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// Find the bundle referenced by the entry page.
///
/// First `<script src>` whose value contains `marker` (case-insensitive) wins;
/// it is joined against `base_url`, so `/static/js/x.js`, `static/js/x.js` and
/// full URLs all work.
pub fn resolve_script_url(html: &str, base_url: &str, marker: &str) -> Result<Url, ResolutionError> {
    let base = parse_absolute(base_url)?;

    let src = script_sources(html)
        .into_iter()
        .find(|src| contains_ci(src, marker))
        .ok_or_else(|| ResolutionError::NoScript {
            marker: marker.to_string(),
        })?;
    debug!(%src, "script reference matched");

    base.join(&src).map_err(|source| ResolutionError::BadReference {
        src,
        base: base.to_string(),
        source,
    })
}
