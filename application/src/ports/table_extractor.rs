//! HTML table extraction port

use statehouse_domain::VoteTable;

/// Locates the tables of an HTML vote document
///
/// Implementations return every `<table>` in document order, nested tables
/// included, so the parser can classify each by shape.
pub trait TableExtractor: Send + Sync {
    fn extract_tables(&self, html: &str) -> Vec<VoteTable>;
}
