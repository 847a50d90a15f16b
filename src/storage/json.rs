// src/storage/json.rs

//! JSON file sink.
//!
//! Writes the record set as a pretty-printed JSON array, atomically
//! (write to a temp file, then rename).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::BirdRecord;
use crate::storage::{RecordSink, WriteSummary};

/// Local filesystem sink producing a single JSON document.
#[derive(Clone)]
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink writing to the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ensure the parent directory exists.
    async fn ensure_dir(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        Ok(())
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        self.ensure_dir(&self.path).await?;

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl RecordSink for JsonFileSink {
    async fn write_records(&self, records: &[BirdRecord]) -> Result<WriteSummary> {
        let location = self.path.display().to_string();
        let bytes = serde_json::to_vec_pretty(records)?;

        self.write_bytes(&bytes)
            .await
            .map_err(|e| AppError::sink(location.clone(), e))?;

        Ok(WriteSummary {
            record_count: records.len(),
            location,
            timestamp: Utc::now(),
        })
    }
}
