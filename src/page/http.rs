// src/page/http.rs

//! HTTP-backed page implementation.
//!
//! Fetches documents with `reqwest` and parses them with `scraper`. Unlike
//! a scripted browser there is nothing to click: collapsed sections of the
//! listing page are already present in the static DOM, so anchor discovery
//! sees the complete document.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::{CandidateLink, CrawlerConfig};
use crate::page::Page;
use crate::utils::resolve_url;

/// A page backed by a plain HTTP client.
pub struct HttpPage {
    client: Client,
    /// URL of the currently loaded document, if any
    current_url: Option<Url>,
    /// Raw HTML of the currently loaded document
    html: String,
}

impl HttpPage {
    /// Create a page with the configured user agent and timeout.
    pub fn new(config: &CrawlerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            current_url: None,
            html: String::new(),
        })
    }

    fn document(&self) -> Html {
        // scraper::Html is not Sync, so the parse is redone per read
        // instead of being held across await points.
        Html::parse_document(&self.html)
    }

    fn parse_selector(s: &str) -> Result<Selector> {
        Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
    }
}

#[async_trait]
impl Page for HttpPage {
    async fn goto(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url)?;
        let response = self
            .client
            .get(parsed.clone())
            .send()
            .await
            .map_err(|e| AppError::navigation(url, e))?;
        let response = response
            .error_for_status()
            .map_err(|e| AppError::navigation(url, e))?;
        self.html = response
            .text()
            .await
            .map_err(|e| AppError::navigation(url, e))?;
        self.current_url = Some(parsed);
        Ok(())
    }

    async fn links(&self) -> Result<Vec<CandidateLink>> {
        let base = self
            .current_url
            .as_ref()
            .ok_or_else(|| AppError::structure("link discovery before first navigation"))?;

        let anchor_sel = Self::parse_selector("a[href]")?;
        let document = self.document();

        let mut links = Vec::new();
        for anchor in document.select(&anchor_sel) {
            let Some(href) = anchor.value().attr("href") else {
                continue;
            };
            let text: String = anchor.text().collect::<String>().trim().to_string();
            links.push(CandidateLink::new(resolve_url(base, href), text));
        }
        Ok(links)
    }

    async fn query_text(&self, selector: &str) -> Result<Option<String>> {
        let sel = Self::parse_selector(selector)?;
        let document = self.document();
        Ok(document
            .select(&sel)
            .next()
            .map(|el| el.text().collect::<String>()))
    }

    async fn query_text_all(&self, selector: &str) -> Result<Vec<String>> {
        let sel = Self::parse_selector(selector)?;
        let document = self.document();
        Ok(document
            .select(&sel)
            .map(|el| el.text().collect::<String>())
            .collect())
    }
}
