// src/models/mod.rs

//! Domain models for the crawler application.

mod candidate;
mod config;
mod context;
mod record;

// Re-export all public types
pub use candidate::CandidateLink;
pub use config::{Config, CrawlerConfig, OutputConfig, SelectorConfig};
pub use context::TaxonContext;
pub use record::{BirdRecord, SpeciesFields};
