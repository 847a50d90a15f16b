// src/services/extractor.rs

//! Field extraction from a species detail page.
//!
//! The site's detail pages are only loosely structured: the names live
//! together in one heading and the descriptive fields are labeled
//! paragraphs. Each field gets its own small parser with an explicit
//! failure, so a page that stops matching is reported as a structure
//! error rather than a generic panic.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::{AppError, Result};
use crate::models::{SelectorConfig, SpeciesFields};
use crate::page::Page;

const SIGNS_LABEL: &str = "Признаки. ";
const HABITAT_LABEL: &str = "Местообитание. ";

/// Extracts the four species fields from the currently loaded page.
pub struct FieldExtractor {
    selectors: SelectorConfig,
}

impl FieldExtractor {
    pub fn new(selectors: SelectorConfig) -> Self {
        Self { selectors }
    }

    /// Extract all fields from the page the collaborator currently shows.
    ///
    /// Expects one primary heading and at least two paragraphs in the main
    /// content region; anything less fails the whole run.
    pub async fn extract(&self, page: &dyn Page) -> Result<SpeciesFields> {
        let heading = page
            .query_text(&self.selectors.heading)
            .await?
            .ok_or_else(|| {
                AppError::structure(format!("no heading matches '{}'", self.selectors.heading))
            })?;

        let paragraphs = page.query_text_all(&self.selectors.paragraphs).await?;
        if paragraphs.len() < 2 {
            return Err(AppError::structure(format!(
                "expected at least 2 paragraphs matching '{}', found {}",
                self.selectors.paragraphs,
                paragraphs.len()
            )));
        }

        Ok(SpeciesFields {
            rus_name: parse_rus_name(&heading)?,
            lat_name: parse_lat_name(&heading)?,
            signs: strip_label(&paragraphs[0], SIGNS_LABEL),
            habitat: strip_label(&paragraphs[1], HABITAT_LABEL),
        })
    }
}

/// Cyrillic word run with optional parenthesized clause, e.g.
/// "Серощёкая поганка" or "Чомга (большая поганка)".
fn rus_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[А-ЯЁа-яё-]+(?:\s+[А-ЯЁа-яё-]+)*(?:\s*\([А-ЯЁа-яё\s,-]+\))?").unwrap()
    })
}

/// One or two Latin-letter runs, e.g. "Podiceps cristatus" or "Gavia".
fn lat_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[A-Za-z]+(?:\s+[A-Za-z]+)?").unwrap())
}

/// Take the Russian name from the page heading.
pub fn parse_rus_name(heading: &str) -> Result<String> {
    rus_name_pattern()
        .find(heading)
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| AppError::structure(format!("no Russian name in heading '{heading}'")))
}

/// Take the Latin name from the page heading.
pub fn parse_lat_name(heading: &str) -> Result<String> {
    lat_name_pattern()
        .find(heading)
        .map(|m| m.as_str().trim().to_string())
        .ok_or_else(|| AppError::structure(format!("no Latin name in heading '{heading}'")))
}

/// Drop the fixed leading label of a description paragraph, if present.
/// The remainder is kept verbatim.
fn strip_label(text: &str, label: &str) -> String {
    text.strip_prefix(label).unwrap_or(text).to_string()
}
