//! Raw action rows handed over by the status-page scraper

use crate::core::error::ParseError;
use crate::core::text::clean_cell;
use crate::vote::source::VoteSourceRef;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format of the action table (`MM/DD/YYYY`)
pub const ACTION_DATE_FORMAT: &str = "%m/%d/%Y";

/// One row of a bill's action table, cells already pulled out of the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRow {
    /// Actor marker fused with the action name, e.g. `"(H) Introduced"`
    pub leading_cell_text: String,
    /// `MM/DD/YYYY`
    pub date_text: String,
    /// Link to the vote document, when the row has one
    pub vote_href: Option<String>,
    pub inline_yes_text: String,
    pub inline_no_text: String,
}

impl ActionRow {
    pub fn new(leading_cell_text: impl Into<String>, date_text: impl Into<String>) -> Self {
        Self {
            leading_cell_text: leading_cell_text.into(),
            date_text: date_text.into(),
            ..Default::default()
        }
    }

    pub fn with_vote_href(mut self, href: impl Into<String>) -> Self {
        self.vote_href = Some(href.into());
        self
    }

    pub fn with_inline_counts(mut self, yes: impl Into<String>, no: impl Into<String>) -> Self {
        self.inline_yes_text = yes.into();
        self.inline_no_text = no.into();
        self
    }

    /// Parse the action date
    pub fn date(&self) -> Result<NaiveDate, ParseError> {
        let text = self.date_text.trim();
        NaiveDate::parse_from_str(text, ACTION_DATE_FORMAT)
            .map_err(|_| ParseError::MalformedActionDate(text.to_string()))
    }

    /// Reference to the vote document, if the row links one
    pub fn vote_source(&self) -> Option<VoteSourceRef> {
        self.vote_href.as_deref().and_then(VoteSourceRef::parse)
    }

    /// Inline yes count text with blank-cell residue removed
    pub fn inline_yes(&self) -> String {
        clean_cell(&self.inline_yes_text)
    }

    /// Inline no count text with blank-cell residue removed
    pub fn inline_no(&self) -> String {
        clean_cell(&self.inline_no_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let row = ActionRow::new("(H) Introduced", "01/05/2009");
        assert_eq!(row.date().unwrap(), NaiveDate::from_ymd_opt(2009, 1, 5).unwrap());
    }

    #[test]
    fn test_malformed_date() {
        let row = ActionRow::new("(H) Introduced", "2009-01-05");
        assert_eq!(
            row.date(),
            Err(ParseError::MalformedActionDate("2009-01-05".to_string()))
        );
    }

    #[test]
    fn test_inline_counts_are_cleaned() {
        let row = ActionRow::new("(H) 3rd Reading Passed", "02/10/2009")
            .with_inline_counts(" 67&nbsp", "&nbsp");
        assert_eq!(row.inline_yes(), "67");
        assert_eq!(row.inline_no(), "");
    }

    #[test]
    fn test_blank_href_has_no_source() {
        let row = ActionRow::new("(H) Introduced", "01/05/2009").with_vote_href("  ");
        assert!(row.vote_source().is_none());

        let row = ActionRow::new("(H) 2nd Reading", "01/05/2009")
            .with_vote_href("LAW0211W$BLAC.VoteTabulation?P_VOTE_SEQ=H1\r\n");
        let source = row.vote_source().unwrap();
        assert!(!source.is_absolute);
        assert_eq!(source.raw_url, "LAW0211W$BLAC.VoteTabulation?P_VOTE_SEQ=H1");
    }

    #[test]
    fn test_deserialize_with_missing_fields() {
        let row: ActionRow =
            serde_json::from_str(r#"{"leading_cell_text": "(S) Introduced", "date_text": "01/05/2009"}"#)
                .unwrap();
        assert!(row.vote_href.is_none());
        assert_eq!(row.inline_yes_text, "");
    }
}
