// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP and crawling behavior settings
    #[serde(default)]
    pub crawler: CrawlerConfig,

    /// CSS selectors for the species detail pages
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Output destination settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.crawler.listing_url.trim().is_empty() {
            return Err(AppError::validation("crawler.listing_url is empty"));
        }
        if self.crawler.user_agent.trim().is_empty() {
            return Err(AppError::validation("crawler.user_agent is empty"));
        }
        if self.crawler.timeout_secs == 0 {
            return Err(AppError::validation("crawler.timeout_secs must be > 0"));
        }
        if self.selectors.heading.trim().is_empty() {
            return Err(AppError::validation("selectors.heading is empty"));
        }
        if self.selectors.paragraphs.trim().is_empty() {
            return Err(AppError::validation("selectors.paragraphs is empty"));
        }
        if self.output.path.trim().is_empty() {
            return Err(AppError::validation("output.path is empty"));
        }
        Ok(())
    }
}

/// HTTP client and crawling behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrawlerConfig {
    /// URL of the species listing page
    #[serde(default = "defaults::listing_url")]
    pub listing_url: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Delay between detail page visits in milliseconds
    #[serde(default = "defaults::request_delay")]
    pub request_delay_ms: u64,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            listing_url: defaults::listing_url(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            request_delay_ms: defaults::request_delay(),
        }
    }
}

/// CSS selectors for species detail pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Primary heading of the detail page
    #[serde(default = "defaults::heading_selector")]
    pub heading: String,

    /// Paragraph sequence within the main article content
    #[serde(default = "defaults::paragraphs_selector")]
    pub paragraphs: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            heading: defaults::heading_selector(),
            paragraphs: defaults::paragraphs_selector(),
        }
    }
}

/// Output destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Path of the JSON file the record set is written to
    #[serde(default = "defaults::output_path")]
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: defaults::output_path(),
        }
    }
}

/// Default values used by serde and the `Default` impls.
mod defaults {
    pub fn listing_url() -> String {
        "https://www.ebirds.ru/reference/".to_string()
    }

    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; birdref/0.1)".to_string()
    }

    pub fn timeout() -> u64 {
        30
    }

    pub fn request_delay() -> u64 {
        200
    }

    pub fn heading_selector() -> String {
        "article h1".to_string()
    }

    pub fn paragraphs_selector() -> String {
        "article p".to_string()
    }

    pub fn output_path() -> String {
        "data/birds.json".to_string()
    }
}
