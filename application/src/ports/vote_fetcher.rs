//! Vote document fetcher port
//!
//! Defines how the application layer retrieves vote documents.

use async_trait::async_trait;
use statehouse_domain::RawVoteDocument;
use thiserror::Error;

/// Errors that can occur while fetching a vote document
///
/// Only [`FetchError::NotFound`] is recoverable; every other failure stops
/// the bill being processed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Vote document not found: {0}")]
    NotFound(String),

    #[error("Invalid vote document URL: {0}")]
    InvalidUrl(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Timeout fetching {0}")]
    Timeout(String),
}

impl FetchError {
    /// Check if this error means the document does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::NotFound(_))
    }
}

/// Source of vote documents
///
/// Implementations (adapters) live in the infrastructure layer. Retries and
/// timeouts are the adapter's business.
#[async_trait]
pub trait VoteDocumentFetcher: Send + Sync {
    /// Fetch the document at an absolute URL
    async fn fetch(&self, url: &str) -> Result<RawVoteDocument, FetchError>;
}
