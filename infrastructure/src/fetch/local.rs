//! Vote documents from a local directory
//!
//! Each URL maps to one file named after the URL's last path segment and
//! query, with characters that are awkward in file names replaced by `_`:
//!
//! ```text
//! http://laws.leg.mt.gov/laws09/LAW0211W$BLAC.VoteTabulation?P_VOTE_SEQ=H1
//!   -> LAW0211W_BLAC.VoteTabulation_P_VOTE_SEQ_H1
//! ```

use async_trait::async_trait;
use statehouse_application::{FetchError, VoteDocumentFetcher};
use statehouse_domain::RawVoteDocument;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

/// Reads vote documents saved under a directory
pub struct LocalVoteFetcher {
    root: PathBuf,
}

impl LocalVoteFetcher {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path the document for `url` is expected at
    pub fn path_for(&self, url: &str) -> Result<PathBuf, FetchError> {
        document_file_name(url)
            .map(|name| self.root.join(name))
            .ok_or_else(|| FetchError::InvalidUrl(url.to_string()))
    }
}

/// File name a vote document URL is stored under
pub fn document_file_name(url: &str) -> Option<String> {
    let without_fragment = url.split('#').next().unwrap_or(url);
    let (path, query) = match without_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (without_fragment, None),
    };
    let segment = path.trim_end_matches('/').rsplit('/').next().unwrap_or(path);

    let mut name = segment.to_string();
    if let Some(query) = query.filter(|q| !q.is_empty()) {
        name.push('_');
        name.push_str(query);
    }

    let name: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if name.is_empty() || name.chars().all(|c| c == '.') {
        None
    } else {
        Some(name)
    }
}

#[async_trait]
impl VoteDocumentFetcher for LocalVoteFetcher {
    async fn fetch(&self, url: &str) -> Result<RawVoteDocument, FetchError> {
        let path = self.path_for(url)?;
        debug!("Reading {} for {}", path.display(), url);

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(RawVoteDocument::new(String::from_utf8_lossy(&bytes))),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(FetchError::NotFound(format!("{} ({})", url, path.display())))
            }
            Err(e) => Err(FetchError::RequestFailed(format!("{}: {}", path.display(), e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_with_query() {
        assert_eq!(
            document_file_name(
                "http://laws.leg.mt.gov/laws09/LAW0211W$BLAC.VoteTabulation?P_VOTE_SEQ=H1"
            )
            .as_deref(),
            Some("LAW0211W_BLAC.VoteTabulation_P_VOTE_SEQ_H1")
        );
    }

    #[test]
    fn test_file_name_plain() {
        assert_eq!(
            document_file_name("http://data.opi.mt.gov/votes/HB0002_1.htm").as_deref(),
            Some("HB0002_1.htm")
        );
    }

    #[test]
    fn test_file_name_rejects_empty() {
        assert_eq!(document_file_name("http://host/.."), None);
    }

    #[tokio::test]
    async fn test_reads_saved_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("s12.txt"), "UNOFFICIAL VOTE TALLY\n").unwrap();

        let fetcher = LocalVoteFetcher::new(dir.path());
        let document = fetcher.fetch("http://laws.leg.mt.gov/votes/s12.txt").await.unwrap();
        assert_eq!(document.body, "UNOFFICIAL VOTE TALLY\n");
    }

    #[tokio::test]
    async fn test_missing_document_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = LocalVoteFetcher::new(dir.path());
        let error = fetcher
            .fetch("http://laws.leg.mt.gov/votes/missing.txt")
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }
}
