// src/models/candidate.rs

//! Candidate link scanned from the listing page.

/// A URL/text pair taken from an anchor element, prior to classification.
///
/// Candidates are collected in document order; that order decides which
/// taxonomic markers apply to which species pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLink {
    /// Absolute URL of the anchor
    pub url: String,

    /// Visible anchor text (may be empty)
    pub text: String,
}

impl CandidateLink {
    pub fn new(url: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            text: text.into(),
        }
    }
}
