//! Vote document fetching configuration from TOML (`[fetch]` section)

use serde::{Deserialize, Serialize};
use statehouse_application::DEFAULT_LAWS_HOST;
use std::path::PathBuf;

/// Default User-Agent sent with vote document requests
pub const DEFAULT_USER_AGENT: &str = concat!("statehouse/", env!("CARGO_PKG_VERSION"));

/// Raw fetch configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileFetchConfig {
    /// Base for relative vote links when the bill has no source on `laws_host`
    pub base_url: Option<String>,
    /// Host whose bill source is the base for relative vote links
    pub laws_host: String,
    pub user_agent: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
    /// Read vote documents from this directory instead of the network
    pub documents_dir: Option<PathBuf>,
}

impl Default for FileFetchConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            laws_host: DEFAULT_LAWS_HOST.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_seconds: 30,
            documents_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_section_deserialize() {
        let toml_str = r#"
[fetch]
base_url = "http://laws.leg.mt.gov/laws09/"
timeout_seconds = 60
documents_dir = "fixtures/votes"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.fetch.base_url.as_deref(),
            Some("http://laws.leg.mt.gov/laws09/")
        );
        assert_eq!(config.fetch.timeout_seconds, 60);
        assert_eq!(
            config.fetch.documents_dir,
            Some(PathBuf::from("fixtures/votes"))
        );
        assert_eq!(config.fetch.laws_host, DEFAULT_LAWS_HOST);
        assert!(config.fetch.user_agent.starts_with("statehouse/"));
    }
}
