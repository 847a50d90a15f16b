// src/pipeline/crawl.rs

//! Species crawling pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::Config;
use crate::page::Page;
use crate::services::SpeciesCrawler;
use crate::storage::{RecordSink, WriteSummary};

/// Run one full traversal and persist the result set.
///
/// Navigation and structure errors abort the run before anything is
/// written. A sink failure is logged and returned without retrying; the
/// record set was already complete in memory at that point, and whether
/// to re-attempt the write is the caller's call.
pub async fn run_crawl(
    config: &Config,
    page: &mut dyn Page,
    sink: &dyn RecordSink,
) -> Result<WriteSummary> {
    let start_time = Utc::now();
    log::info!("Starting crawl of {}", config.crawler.listing_url);

    let crawler = SpeciesCrawler::new(Arc::new(config.clone()));
    let records = crawler.collect(page).await?;
    log::info!("Collected {} species records", records.len());

    let summary = match sink.write_records(&records).await {
        Ok(summary) => summary,
        Err(error) => {
            log::error!(
                "Failed to persist {} collected records: {}",
                records.len(),
                error
            );
            return Err(error);
        }
    };

    let elapsed = Utc::now() - start_time;
    log::info!(
        "Saved {} records to {} in {}s",
        summary.record_count,
        summary.location,
        elapsed.num_seconds()
    );

    Ok(summary)
}
