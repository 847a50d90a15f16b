// src/services/mod.rs

//! Core crawling services.
//!
//! `classifier` sorts listing-page anchors into taxonomic markers and
//! detail links, `extractor` pulls the species fields out of a detail
//! page, and `traversal` drives both over a `Page` collaborator.

pub mod classifier;
pub mod extractor;
pub mod traversal;

pub use classifier::{LinkKind, classify};
pub use extractor::FieldExtractor;
pub use traversal::SpeciesCrawler;
