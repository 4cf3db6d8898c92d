//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod fetch;
mod output;

pub use fetch::{DEFAULT_USER_AGENT, FileFetchConfig};
pub use output::FileOutputConfig;

use serde::{Deserialize, Serialize};
use statehouse_application::ReconcileConfig;
use thiserror::Error;
use url::Url;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("fetch.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("fetch.base_url is not an absolute URL: {0}")]
    InvalidBaseUrl(String),

    #[error("fetch.laws_host cannot be empty")]
    EmptyLawsHost,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Vote document fetching
    pub fetch: FileFetchConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.fetch.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.fetch.laws_host.trim().is_empty() {
            return Err(ConfigValidationError::EmptyLawsHost);
        }
        self.base_url()?;
        Ok(())
    }

    /// Parsed `fetch.base_url`
    pub fn base_url(&self) -> Result<Option<Url>, ConfigValidationError> {
        self.fetch
            .base_url
            .as_deref()
            .map(|raw| Url::parse(raw).map_err(|_| ConfigValidationError::InvalidBaseUrl(raw.to_string())))
            .transpose()
    }

    /// Reconciliation settings carried by this file
    pub fn reconcile_config(&self) -> Result<ReconcileConfig, ConfigValidationError> {
        let mut config = ReconcileConfig::default().with_laws_host(self.fetch.laws_host.trim());
        if let Some(base) = self.base_url()? {
            config = config.with_fallback_base_url(base);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use statehouse_domain::OutputFormat;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
[fetch]
base_url = "http://mirror.test/laws09/"
laws_host = "mirror.test"
user_agent = "test-agent"
timeout_seconds = 5

[output]
format = "full"
color = false
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.fetch.user_agent, "test-agent");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());

        let reconcile = config.reconcile_config().unwrap();
        assert_eq!(reconcile.laws_host, "mirror.test");
        assert_eq!(
            reconcile.fallback_base_url.map(String::from),
            Some("http://mirror.test/laws09/".to_string())
        );
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert!(config.output.format.is_none());
        assert!(config.reconcile_config().unwrap().fallback_base_url.is_none());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let toml_str = r#"
[fetch]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }

    #[test]
    fn test_validate_relative_base_url() {
        let toml_str = r#"
[fetch]
base_url = "laws09/"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_validate_empty_laws_host() {
        let config: FileConfig = toml::from_str("[fetch]\nlaws_host = \" \"\n").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::EmptyLawsHost)
        ));
    }
}
