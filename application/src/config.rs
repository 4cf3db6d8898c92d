//! Application-level configuration.
//!
//! Controls how the reconcile use case resolves relative vote links.

use url::Url;

/// Host whose bill sources double as the base for relative vote links
pub const DEFAULT_LAWS_HOST: &str = "laws.leg.mt.gov";

/// Reconciliation behavior configuration.
#[derive(Debug, Clone)]
pub struct ReconcileConfig {
    /// Bill sources on this host provide the base for relative vote links.
    pub laws_host: String,
    /// Base used when no bill source is on `laws_host`.
    pub fallback_base_url: Option<Url>,
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            laws_host: DEFAULT_LAWS_HOST.to_string(),
            fallback_base_url: None,
        }
    }
}

impl ReconcileConfig {
    pub fn with_laws_host(mut self, host: impl Into<String>) -> Self {
        self.laws_host = host.into();
        self
    }

    pub fn with_fallback_base_url(mut self, base: Url) -> Self {
        self.fallback_base_url = Some(base);
        self
    }
}
