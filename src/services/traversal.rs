// src/services/traversal.rs

//! Traversal and aggregation engine.
//!
//! Walks the listing page's anchors in document order, keeps the running
//! order/family context, visits each species detail page and assembles
//! the output record set.

use std::sync::Arc;
use std::time::Duration;

use crate::error::Result;
use crate::models::{BirdRecord, Config, TaxonContext};
use crate::page::Page;
use crate::services::classifier::{LinkKind, classify};
use crate::services::extractor::FieldExtractor;

/// Service that drives a single crawl over the reference site.
pub struct SpeciesCrawler {
    config: Arc<Config>,
    extractor: FieldExtractor,
}

impl SpeciesCrawler {
    /// Create a new crawler with the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        let extractor = FieldExtractor::new(config.selectors.clone());
        Self { config, extractor }
    }

    /// Crawl the listing page and return one record per species page, in
    /// visitation order.
    ///
    /// Fail-fast: a navigation failure or a detail page that does not
    /// match the expected structure aborts the whole traversal. A
    /// malformed page means the site-structure assumptions no longer
    /// hold, and partial data would mask that.
    pub async fn collect(&self, page: &mut dyn Page) -> Result<Vec<BirdRecord>> {
        page.goto(&self.config.crawler.listing_url).await?;

        // The full candidate sequence is taken up front; navigating to a
        // detail page replaces the listing document.
        let candidates = page.links().await?;
        log::info!(
            "Listing page yielded {} anchors: {}",
            candidates.len(),
            self.config.crawler.listing_url
        );

        let delay = Duration::from_millis(self.config.crawler.request_delay_ms);
        let mut context = TaxonContext::default();
        let mut records = Vec::new();

        for candidate in &candidates {
            match classify(&candidate.url, &candidate.text)? {
                Some(LinkKind::OrderMarker(token)) => {
                    log::debug!("Order: {token}");
                    context.set_order(token);
                }
                Some(LinkKind::FamilyMarker(token)) => {
                    log::debug!("Family: {token}");
                    context.set_family(token);
                }
                Some(LinkKind::Leaf(url)) => {
                    page.goto(&url).await?;
                    let fields = self.extractor.extract(page).await?;
                    log::info!("Extracted {} ({})", fields.rus_name, fields.lat_name);
                    records.push(BirdRecord::from_parts(&context, fields));

                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
                None => {}
            }
        }

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::error::AppError;
    use crate::models::CandidateLink;

    /// In-memory stand-in for the browser/HTTP page collaborator.
    struct FakePage {
        listing_url: String,
        listing_links: Vec<CandidateLink>,
        /// url -> (heading text, paragraph texts)
        detail_pages: HashMap<String, (String, Vec<String>)>,
        current: Option<String>,
    }

    impl FakePage {
        fn new(listing_url: &str, links: Vec<(&str, &str)>) -> Self {
            Self {
                listing_url: listing_url.to_string(),
                listing_links: links
                    .into_iter()
                    .map(|(url, text)| CandidateLink::new(url, text))
                    .collect(),
                detail_pages: HashMap::new(),
                current: None,
            }
        }

        fn with_detail(mut self, url: &str, heading: &str, paragraphs: &[&str]) -> Self {
            self.detail_pages.insert(
                url.to_string(),
                (
                    heading.to_string(),
                    paragraphs.iter().map(|p| p.to_string()).collect(),
                ),
            );
            self
        }

        fn current_detail(&self) -> Option<&(String, Vec<String>)> {
            self.current
                .as_ref()
                .and_then(|url| self.detail_pages.get(url))
        }
    }

    #[async_trait]
    impl Page for FakePage {
        async fn goto(&mut self, url: &str) -> Result<()> {
            if url != self.listing_url && !self.detail_pages.contains_key(url) {
                return Err(AppError::navigation(url, "unreachable"));
            }
            self.current = Some(url.to_string());
            Ok(())
        }

        async fn links(&self) -> Result<Vec<CandidateLink>> {
            Ok(self.listing_links.clone())
        }

        async fn query_text(&self, _selector: &str) -> Result<Option<String>> {
            Ok(self.current_detail().map(|(heading, _)| heading.clone()))
        }

        async fn query_text_all(&self, _selector: &str) -> Result<Vec<String>> {
            Ok(self
                .current_detail()
                .map(|(_, paragraphs)| paragraphs.clone())
                .unwrap_or_default())
        }
    }

    fn test_crawler(listing_url: &str) -> SpeciesCrawler {
        let mut config = Config::default();
        config.crawler.listing_url = listing_url.to_string();
        config.crawler.request_delay_ms = 0;
        SpeciesCrawler::new(Arc::new(config))
    }

    const LISTING: &str = "https://example.com/reference/";

    #[tokio::test]
    async fn test_order_family_leaf_sequence_tags_the_record() {
        let mut page = FakePage::new(
            LISTING,
            vec![
                ("https://example.com/reference/poganki/", "ПОГАНКООБРАЗНЫЕ"),
                ("https://example.com/reference/poganki/chomga/", "Чомга"),
                ("https://example.com/poganki/chomga/bolshaya/", ""),
            ],
        )
        .with_detail(
            "https://example.com/poganki/chomga/bolshaya/",
            "Чомга Podiceps cristatus",
            &[
                "Признаки. Крупная птица с хохолком.",
                "Местообитание. Крупные стоячие водоёмы.",
            ],
        );

        let records = test_crawler(LISTING).collect(&mut page).await.unwrap();
        assert_eq!(records.len(), 1);

        let record = &records[0];
        assert_eq!(record.order.as_deref(), Some("ПОГАНКООБРАЗНЫЕ"));
        assert_eq!(record.family.as_deref(), Some("Чомга"));
        assert_eq!(record.rus_name, "Чомга");
        assert_eq!(record.lat_name, "Podiceps cristatus");
        assert_eq!(record.signs, "Крупная птица с хохолком.");
        assert_eq!(record.habitat, "Крупные стоячие водоёмы.");
    }

    #[tokio::test]
    async fn test_context_carries_until_overwritten() {
        let mut page = FakePage::new(
            LISTING,
            vec![
                ("https://example.com/gagary/gagara/krasnozobaya/", ""),
                ("https://example.com/reference/gagary/", "ГАГАРООБРАЗНЫЕ"),
                ("https://example.com/gagary/gagara/chernozobaya/", ""),
                ("https://example.com/reference/gagary/gagarovye/", "Гагаровые"),
                ("https://example.com/reference/poganki/", "ПОГАНКООБРАЗНЫЕ"),
                ("https://example.com/poganki/chomga/bolshaya/", ""),
            ],
        )
        .with_detail(
            "https://example.com/gagary/gagara/krasnozobaya/",
            "Краснозобая гагара Gavia stellata",
            &["Признаки. Мелкая гагара.", "Местообитание. Тундровые озёра."],
        )
        .with_detail(
            "https://example.com/gagary/gagara/chernozobaya/",
            "Чернозобая гагара Gavia arctica",
            &["Признаки. Крупнее краснозобой.", "Местообитание. Крупные озёра."],
        )
        .with_detail(
            "https://example.com/poganki/chomga/bolshaya/",
            "Чомга Podiceps cristatus",
            &["Признаки. Крупная птица.", "Местообитание. Водоёмы."],
        );

        let records = test_crawler(LISTING).collect(&mut page).await.unwrap();
        assert_eq!(records.len(), 3);

        // Before any marker: both fields absent
        assert_eq!(records[0].order, None);
        assert_eq!(records[0].family, None);

        // After the first order marker, family still unseen
        assert_eq!(records[1].order.as_deref(), Some("ГАГАРООБРАЗНЫЕ"));
        assert_eq!(records[1].family, None);

        // A new order overwrites the old one; the family persists
        assert_eq!(records[2].order.as_deref(), Some("ПОГАНКООБРАЗНЫЕ"));
        assert_eq!(records[2].family.as_deref(), Some("Гагаровые"));
    }

    #[tokio::test]
    async fn test_malformed_leaf_aborts_with_structure_error() {
        let mut page = FakePage::new(
            LISTING,
            vec![
                ("https://example.com/poganki/chomga/bolshaya/", ""),
                ("https://example.com/poganki/poganka/malaya/", ""),
            ],
        )
        .with_detail(
            "https://example.com/poganki/chomga/bolshaya/",
            "Чомга Podiceps cristatus",
            &["Признаки. Крупная птица.", "Местообитание. Водоёмы."],
        )
        // Second paragraph missing
        .with_detail(
            "https://example.com/poganki/poganka/malaya/",
            "Малая поганка Tachybaptus ruficollis",
            &["Признаки. Самая мелкая поганка."],
        );

        let result = test_crawler(LISTING).collect(&mut page).await;
        assert!(matches!(result, Err(AppError::Structure(_))));
    }

    #[tokio::test]
    async fn test_unreachable_leaf_aborts_with_navigation_error() {
        let mut page = FakePage::new(
            LISTING,
            vec![("https://example.com/poganki/chomga/bolshaya/", "")],
        );

        let result = test_crawler(LISTING).collect(&mut page).await;
        assert!(matches!(result, Err(AppError::Navigation { .. })));
    }

    #[tokio::test]
    async fn test_noise_links_are_skipped() {
        let mut page = FakePage::new(
            LISTING,
            vec![
                ("https://example.com/", "Главная"),
                ("https://example.com/about/", "О сайте"),
                ("https://example.com/en/poganki/chomga/", "Grebe"),
            ],
        );

        let records = test_crawler(LISTING).collect(&mut page).await.unwrap();
        assert!(records.is_empty());
    }
}
