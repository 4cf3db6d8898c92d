//! Bill version discovery from a version index listing
//!
//! Version files are named `<TYPE><zero-padded NUMBER>_<version>.<ext>`,
//! e.g. `HB0002_1.htm` for the first version of `HB 2` and `HB0002_x.htm`
//! for the enrolled text.

use super::entities::BillVersion;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// One link of a version index page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionIndexEntry {
    /// Link text, which is the file name
    pub file_name: String,
    pub href: String,
}

/// Listing of bill text files for a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionIndex {
    pub url: String,
    #[serde(default)]
    pub entries: Vec<VersionIndexEntry>,
}

impl VersionIndex {
    /// Versions in the listing that belong to `bill_id`, in listing order.
    ///
    /// PDF-only bills have no matching entries and yield nothing.
    pub fn versions_for(&self, bill_id: &str) -> Vec<BillVersion> {
        let Some(matcher) = VersionMatcher::for_bill(bill_id) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter_map(|entry| matcher.version(&entry.file_name, &entry.href, &self.url))
            .collect()
    }
}

/// Matches index entries belonging to one bill
#[derive(Debug, Clone)]
pub struct VersionMatcher {
    pattern: Regex,
}

impl VersionMatcher {
    /// Build a matcher for a bill id of the form `"<TYPE> <NUMBER>"`.
    ///
    /// Returns `None` when the id does not have both parts.
    pub fn for_bill(bill_id: &str) -> Option<Self> {
        let mut tokens = bill_id.split_whitespace();
        let kind = tokens.next()?;
        let number = tokens.next()?.trim_start_matches('0');
        let pattern = format!(
            "^{}0*{}_",
            regex::escape(kind),
            regex::escape(number)
        );
        Regex::new(&pattern).ok().map(|pattern| Self { pattern })
    }

    pub fn matches(&self, file_name: &str) -> bool {
        self.pattern.is_match(file_name)
    }

    /// Turn an index entry into a version, if it belongs to this bill.
    ///
    /// `href` is resolved against the site root of `index_url` unless it is
    /// already absolute.
    pub fn version(&self, file_name: &str, href: &str, index_url: &str) -> Option<BillVersion> {
        if !self.matches(file_name) {
            return None;
        }
        Some(BillVersion {
            title: version_title(file_name),
            url: version_url(href, index_url),
        })
    }
}

/// "Version N" from the token between `_` and `.`, "Final Version" for `x`
pub fn version_title(file_name: &str) -> String {
    let after = file_name
        .split_once('_')
        .map(|(_, rest)| rest)
        .unwrap_or(file_name);
    let token = after.split('.').next().unwrap_or(after);
    if token == "x" {
        "Final Version".to_string()
    } else {
        format!("Version {}", token)
    }
}

fn version_url(href: &str, index_url: &str) -> String {
    if href.starts_with("http://") || href.starts_with("https://") {
        return href.to_string();
    }
    let root = match index_url.find("/bills") {
        Some(idx) => &index_url[..idx],
        None => index_url.trim_end_matches('/'),
    };
    format!("{}/{}", root, href.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    const INDEX: &str = "http://data.opi.mt.gov/bills/2009/HB0099";

    #[test]
    fn test_matcher_accepts_zero_padding() {
        let matcher = VersionMatcher::for_bill("HB 2").unwrap();
        assert!(matcher.matches("HB0002_1.htm"));
        assert!(matcher.matches("HB2_x.pdf"));
        assert!(!matcher.matches("HB0020_1.htm"));
        assert!(!matcher.matches("SB0002_1.htm"));
    }

    #[test]
    fn test_matcher_requires_two_tokens() {
        assert!(VersionMatcher::for_bill("HB").is_none());
    }

    #[test]
    fn test_version_titles() {
        assert_eq!(version_title("HB0002_1.htm"), "Version 1");
        assert_eq!(version_title("HB0002_x.htm"), "Final Version");
    }

    #[test]
    fn test_version_url_uses_site_root() {
        let matcher = VersionMatcher::for_bill("HB 99").unwrap();
        let version = matcher
            .version("HB0099_2.htm", "/bills/2009/HB0099/HB0099_2.htm", INDEX)
            .unwrap();
        assert_eq!(version.title, "Version 2");
        assert_eq!(
            version.url,
            "http://data.opi.mt.gov/bills/2009/HB0099/HB0099_2.htm"
        );
    }

    #[test]
    fn test_index_versions_for_bill() {
        let entry = |name: &str| VersionIndexEntry {
            file_name: name.to_string(),
            href: format!("/bills/2009/HB0099/{}", name),
        };
        let index = VersionIndex {
            url: INDEX.to_string(),
            entries: vec![entry("HB0099_1.htm"), entry("HB0990_1.htm"), entry("HB0099_x.htm")],
        };
        let titles: Vec<_> = index
            .versions_for("HB 99")
            .into_iter()
            .map(|v| v.title)
            .collect();
        assert_eq!(titles, vec!["Version 1", "Final Version"]);
        assert!(index.versions_for("HB").is_empty());
    }

    #[test]
    fn test_absolute_href_kept() {
        let matcher = VersionMatcher::for_bill("HB 99").unwrap();
        let version = matcher
            .version("HB0099_x.htm", "http://mirror.test/HB0099_x.htm", INDEX)
            .unwrap();
        assert_eq!(version.url, "http://mirror.test/HB0099_x.htm");
    }
}
