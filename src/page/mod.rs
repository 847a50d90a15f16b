// src/page/mod.rs

//! Page collaborator consumed by the traversal engine.
//!
//! The engine only needs three reads over a current document: navigation,
//! anchor discovery, and text lookup by CSS selector. The default backend
//! fetches over HTTP and parses with `scraper`; tests substitute an
//! in-memory fake.

pub mod http;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::CandidateLink;

// Re-export for convenience
pub use http::HttpPage;

/// Read-only view over the currently loaded document.
#[async_trait]
pub trait Page: Send {
    /// Navigate to a URL; subsequent reads reflect the new document.
    async fn goto(&mut self, url: &str) -> Result<()>;

    /// All anchors of the current document, in document order, with hrefs
    /// resolved to absolute URLs against the document URL.
    async fn links(&self) -> Result<Vec<CandidateLink>>;

    /// Text content of the first element matching a CSS selector.
    async fn query_text(&self, selector: &str) -> Result<Option<String>>;

    /// Text content of every element matching a CSS selector, in document
    /// order.
    async fn query_text_all(&self, selector: &str) -> Result<Vec<String>>;
}
