//! Vote document format detection by content sniffing

use serde::{Deserialize, Serialize};

/// Phrase the site serves instead of a vote when the action has none
pub const NO_VOTE_RECORDS: &str = "No Vote Records Found for this Action.";

const HTML_PREFIX: &str = "<html";
const TEXT_TALLY_PREFIX: &str = "UNOFFICIAL VOTE TALLY";

/// What a fetched vote document turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    /// HTML page with tally, roster, and date tables
    TabularHtmlLike,
    /// Line-oriented "UNOFFICIAL VOTE TALLY" text
    PlainTextTally,
    /// The site explicitly says no vote was recorded
    NoVoteRecords,
    /// Neither format; the caller treats the document as absent
    Unrecognized,
}

/// Classify a vote document body.
///
/// The explicit "no records" phrase wins over prefix sniffing, since the
/// notice itself is usually wrapped in an HTML page.
///
/// # Examples
///
/// ```
/// use statehouse_domain::vote::detector::{DocumentKind, detect_format};
///
/// assert_eq!(detect_format("<HTML><body></body></HTML>"), DocumentKind::TabularHtmlLike);
/// assert_eq!(detect_format("<htmlish>"), DocumentKind::Unrecognized);
/// assert_eq!(detect_format("unofficial vote tally\n"), DocumentKind::PlainTextTally);
/// assert_eq!(detect_format("%PDF-1.4"), DocumentKind::Unrecognized);
/// ```
pub fn detect_format(body: &str) -> DocumentKind {
    if body.contains(NO_VOTE_RECORDS) {
        DocumentKind::NoVoteRecords
    } else if starts_with_html_tag(body) {
        DocumentKind::TabularHtmlLike
    } else if starts_with_ignore_case(body, TEXT_TALLY_PREFIX) {
        DocumentKind::PlainTextTally
    } else {
        DocumentKind::Unrecognized
    }
}

/// `<html` followed by the end of the tag name: `>`, `/` or whitespace
fn starts_with_html_tag(body: &str) -> bool {
    starts_with_ignore_case(body, HTML_PREFIX)
        && body
            .as_bytes()
            .get(HTML_PREFIX.len())
            .is_some_and(|&next| next == b'>' || next == b'/' || next.is_ascii_whitespace())
}

fn starts_with_ignore_case(body: &str, prefix: &str) -> bool {
    body.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_any_case() {
        assert_eq!(detect_format("<html>\n<table>"), DocumentKind::TabularHtmlLike);
        assert_eq!(detect_format("<HtMl>"), DocumentKind::TabularHtmlLike);
    }

    #[test]
    fn test_html_prefix_needs_tag_end() {
        assert_eq!(detect_format("<htmlfoo>"), DocumentKind::Unrecognized);
        assert_eq!(detect_format("<html"), DocumentKind::Unrecognized);
        assert_eq!(
            detect_format("<HTML lang=\"en\">"),
            DocumentKind::TabularHtmlLike
        );
        assert_eq!(detect_format("<html\n>"), DocumentKind::TabularHtmlLike);
    }

    #[test]
    fn test_text_tally_any_case() {
        assert_eq!(
            detect_format("UNOFFICIAL VOTE TALLY\nBill: HB 2"),
            DocumentKind::PlainTextTally
        );
        assert_eq!(
            detect_format("Unofficial Vote Tally"),
            DocumentKind::PlainTextTally
        );
    }

    #[test]
    fn test_other_prefixes_unrecognized() {
        assert_eq!(detect_format(""), DocumentKind::Unrecognized);
        assert_eq!(detect_format(" <html>"), DocumentKind::Unrecognized);
        assert_eq!(detect_format("<!DOCTYPE html>"), DocumentKind::Unrecognized);
        assert_eq!(detect_format("VOTE TALLY"), DocumentKind::Unrecognized);
    }

    #[test]
    fn test_no_vote_records_wins() {
        let body = "<html><body>No Vote Records Found for this Action.</body></html>";
        assert_eq!(detect_format(body), DocumentKind::NoVoteRecords);
    }

    #[test]
    fn test_multibyte_body_does_not_panic() {
        assert_eq!(detect_format("é"), DocumentKind::Unrecognized);
    }
}
