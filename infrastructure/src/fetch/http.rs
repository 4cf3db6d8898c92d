//! HTTP vote document fetcher

use async_trait::async_trait;
use statehouse_application::{FetchError, VoteDocumentFetcher};
use statehouse_domain::RawVoteDocument;
use std::time::Duration;
use tracing::debug;

/// Maximum response body size (5 MB)
const MAX_BODY_SIZE: u64 = 5 * 1024 * 1024;

fn check_body_size(url: &str, size: u64) -> Result<(), FetchError> {
    if size > MAX_BODY_SIZE {
        return Err(FetchError::RequestFailed(format!(
            "{}: response too large: {} bytes (max: {} bytes)",
            url, size, MAX_BODY_SIZE
        )));
    }
    Ok(())
}

/// Fetches vote documents over HTTP with reqwest
pub struct HttpVoteFetcher {
    client: reqwest::Client,
}

impl HttpVoteFetcher {
    /// Create a fetcher sending `user_agent` and giving up after `timeout`
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestFailed(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl VoteDocumentFetcher for HttpVoteFetcher {
    async fn fetch(&self, url: &str) -> Result<RawVoteDocument, FetchError> {
        let parsed = url::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?;

        debug!("GET {}", parsed);
        let response = self.client.get(parsed).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::RequestFailed(format!("{}: {}", url, e))
            }
        })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::RequestFailed(format!(
                "{}: HTTP {} {}",
                url,
                status.as_u16(),
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        // Declared length is checked before buffering; the actual length after.
        if let Some(declared) = response.content_length() {
            check_body_size(url, declared)?;
        }

        let body = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout(url.to_string())
            } else {
                FetchError::RequestFailed(format!("Failed to read response body: {}", e))
            }
        })?;
        check_body_size(url, body.len() as u64)?;

        Ok(RawVoteDocument::new(String::from_utf8_lossy(&body)))
    }
}
