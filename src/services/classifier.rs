// src/services/classifier.rs

//! Link classification for the listing page.
//!
//! Decides whether an anchor points at a species detail page, carries an
//! order heading, carries a family heading, or is noise to be skipped.

use std::sync::OnceLock;

use regex::Regex;
use url::Url;

use crate::error::{AppError, Result};

/// Classification outcome for a single candidate link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// Species detail page; carries the absolute URL to visit
    Leaf(String),

    /// Order heading; carries the heading token from the anchor text
    OrderMarker(String),

    /// Family heading; carries the heading token from the anchor text
    FamilyMarker(String),
}

/// Detail page path: `/<section>/<genus>/<species>/` where the first
/// segment is a content section, not the reference index itself.
fn leaf_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/([^/]+)/(\w+)/([a-z0-9-]+)/$").unwrap())
}

/// Heading path, short form: `/reference/<group>/`.
fn heading_short_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/reference/(\w+)/$").unwrap())
}

/// Heading path, long form: `/reference/<group>/<subgroup>/`.
fn heading_long_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^/reference/(\w+)/([a-z-]+)/$").unwrap())
}

/// Classify an anchor from the listing page.
///
/// Returns `Ok(None)` for links that match none of the accepted path
/// shapes, or whose heading token has no usable casing. Pure function of
/// its inputs.
///
/// The site's URL scheme keeps detail and heading paths disjoint (detail
/// paths never start with `reference`). Should that ever stop holding,
/// this fails loudly instead of silently preferring one reading.
pub fn classify(url: &str, text: &str) -> Result<Option<LinkKind>> {
    let Ok(parsed) = Url::parse(url) else {
        return Ok(None);
    };
    let path = parsed.path();

    let is_leaf = leaf_pattern()
        .captures(path)
        .is_some_and(|caps| !matches!(&caps[1], "reference" | "en"));
    let is_heading =
        heading_short_pattern().is_match(path) || heading_long_pattern().is_match(path);

    if is_leaf && is_heading {
        return Err(AppError::structure(format!(
            "URL path {path} matches both the detail and heading shapes"
        )));
    }

    if is_leaf {
        return Ok(Some(LinkKind::Leaf(url.to_string())));
    }
    if is_heading {
        return Ok(classify_heading_token(text));
    }
    Ok(None)
}

/// Split heading tokens into order vs family by casing.
///
/// Order headings are set in full uppercase on the listing page
/// ("ПОГАНКООБРАЗНЫЕ"); family headings are capitalized ("Поганковые").
/// Tokens with neither casing are dropped.
fn classify_heading_token(token: &str) -> Option<LinkKind> {
    let token = token.trim();
    if is_all_uppercase(token) {
        return Some(LinkKind::OrderMarker(token.to_string()));
    }
    if token.chars().next().is_some_and(char::is_uppercase) {
        return Some(LinkKind::FamilyMarker(token.to_string()));
    }
    None
}

fn is_all_uppercase(token: &str) -> bool {
    token.chars().any(char::is_alphabetic) && !token.chars().any(char::is_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uppercase_heading_is_order_marker() {
        let kind = classify("https://example.com/reference/poganki/", "ПОГАНКООБРАЗНЫЕ")
            .unwrap()
            .unwrap();
        assert_eq!(kind, LinkKind::OrderMarker("ПОГАНКООБРАЗНЫЕ".to_string()));
    }

    #[test]
    fn test_capitalized_heading_is_family_marker() {
        let kind = classify("https://example.com/reference/poganki/pogankovye/", "Поганковые")
            .unwrap()
            .unwrap();
        assert_eq!(kind, LinkKind::FamilyMarker("Поганковые".to_string()));
    }

    #[test]
    fn test_leaf_shape_wins_regardless_of_text() {
        let url = "https://example.com/poganki/chomga/bolshaya/";
        let kind = classify(url, "ПОГАНКООБРАЗНЫЕ").unwrap().unwrap();
        assert_eq!(kind, LinkKind::Leaf(url.to_string()));
    }

    #[test]
    fn test_reference_and_en_sections_are_not_leaves() {
        // Three-segment paths under /reference/ are headings, not leaves
        let kind = classify("https://example.com/reference/poganki/pogankovye/", "Поганковые")
            .unwrap()
            .unwrap();
        assert!(matches!(kind, LinkKind::FamilyMarker(_)));

        // The English mirror is skipped outright
        assert_eq!(classify("https://example.com/en/poganki/chomga/", "Grebe").unwrap(), None);
    }

    #[test]
    fn test_lowercase_heading_token_is_discarded() {
        assert_eq!(
            classify("https://example.com/reference/poganki/", "поганки").unwrap(),
            None
        );
    }

    #[test]
    fn test_unmatched_shapes_are_discarded() {
        assert_eq!(classify("https://example.com/", "Главная").unwrap(), None);
        assert_eq!(classify("https://example.com/about/", "О сайте").unwrap(), None);
        assert_eq!(
            // No trailing slash
            classify("https://example.com/poganki/chomga/bolshaya", "").unwrap(),
            None
        );
        assert_eq!(classify("not a url", "Поганковые").unwrap(), None);
    }

    #[test]
    fn test_classification_is_idempotent() {
        let url = "https://example.com/poganki/chomga/bolshaya/";
        let first = classify(url, "Чомга").unwrap();
        let second = classify(url, "Чомга").unwrap();
        assert_eq!(first, second);
    }
}
