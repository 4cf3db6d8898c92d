//! Vote document references and bodies

use serde::{Deserialize, Serialize};

/// Link to a vote document as it appears in an action row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteSourceRef {
    pub raw_url: String,
    /// Absolute links are fetched as-is; relative ones need a base URL
    pub is_absolute: bool,
}

impl VoteSourceRef {
    /// Build a reference from an href, dropping embedded line breaks.
    ///
    /// Returns `None` for an empty href.
    pub fn parse(href: &str) -> Option<Self> {
        let raw_url: String = href.chars().filter(|c| *c != '\r' && *c != '\n').collect();
        let raw_url = raw_url.trim().to_string();
        if raw_url.is_empty() {
            return None;
        }
        let lower = raw_url.to_ascii_lowercase();
        let is_absolute = lower.starts_with("http://") || lower.starts_with("https://");
        Some(Self {
            raw_url,
            is_absolute,
        })
    }
}

/// Body of a fetched vote document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawVoteDocument {
    pub body: String,
}

impl RawVoteDocument {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
