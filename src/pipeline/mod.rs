// src/pipeline/mod.rs

//! High-level run orchestration.

mod crawl;

pub use crawl::run_crawl;
