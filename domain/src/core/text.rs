//! Text cleanup shared by the row and document parsers.

/// Non-breaking space as it appears in scraped cell text
pub const NBSP: char = '\u{a0}';

/// Remove `&nbsp` residue left behind by upstream entity handling and trim.
///
/// Some rows arrive with a literal `&nbsp` (no trailing semicolon) where a
/// blank cell should be.
pub fn clean_cell(s: &str) -> String {
    s.replace("&nbsp;", "").replace("&nbsp", "").trim().to_string()
}

/// Replace non-breaking spaces with regular spaces.
pub fn normalize_spaces(s: &str) -> String {
    s.replace(NBSP, " ")
}

/// Parse the last whitespace-separated token of a line as an integer.
///
/// A single trailing period on that token is tolerated ("Total 3.").
pub fn trailing_integer(line: &str) -> Option<u32> {
    let token = line.split_whitespace().last()?;
    let token = token.strip_suffix('.').unwrap_or(token);
    token.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_cell() {
        assert_eq!(clean_cell("&nbsp"), "");
        assert_eq!(clean_cell(" 12&nbsp; "), "12");
        assert_eq!(clean_cell("  7 "), "7");
    }

    #[test]
    fn test_normalize_spaces() {
        assert_eq!(normalize_spaces("Y\u{a0}Smith"), "Y Smith");
    }

    #[test]
    fn test_trailing_integer() {
        assert_eq!(trailing_integer("Total 3"), Some(3));
        assert_eq!(trailing_integer("Total Excused 2."), Some(2));
        assert_eq!(trailing_integer("Total -"), None);
        assert_eq!(trailing_integer(""), None);
    }
}
