// src/storage/mod.rs

//! Sink abstractions for persisting the crawled record set.

pub mod json;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::BirdRecord;

// Re-export for convenience
pub use json::JsonFileSink;

/// Metadata about a completed sink write.
#[derive(Debug, Clone)]
pub struct WriteSummary {
    /// Number of records written
    pub record_count: usize,
    /// Destination the records were written to
    pub location: String,
    /// Timestamp of the write
    pub timestamp: DateTime<Utc>,
}

/// Trait for record persistence backends.
///
/// A failed write surfaces as an error to the caller; the in-memory
/// record set stays intact either way.
#[async_trait]
pub trait RecordSink: Send + Sync {
    /// Persist the ordered record set to the sink's destination.
    async fn write_records(&self, records: &[BirdRecord]) -> Result<WriteSummary>;
}
