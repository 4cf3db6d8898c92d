//! Sponsor rows from a bill status page

use super::entities::Sponsor;
use crate::core::text::clean_cell;
use serde::{Deserialize, Serialize};

/// Raw sponsor row as handed over by the status-page scraper
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SponsorRow {
    pub kind: String,
    pub last_name: String,
    pub first_name: String,
    pub middle_initial: String,
}

/// Map the site's sponsor type to a normalized one; unknown types pass through
pub fn normalize_sponsor_kind(kind: &str) -> String {
    match kind.trim() {
        "Primary Sponsor" => "primary".to_string(),
        other => other.to_string(),
    }
}

impl From<&SponsorRow> for Sponsor {
    fn from(row: &SponsorRow) -> Self {
        let name = format!(
            "{}, {} {}",
            row.last_name.trim(),
            row.first_name.trim(),
            clean_cell(&row.middle_initial)
        );
        Sponsor {
            kind: normalize_sponsor_kind(&row.kind),
            name: name.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(kind: &str, last: &str, first: &str, middle: &str) -> SponsorRow {
        SponsorRow {
            kind: kind.to_string(),
            last_name: last.to_string(),
            first_name: first.to_string(),
            middle_initial: middle.to_string(),
        }
    }

    #[test]
    fn test_primary_sponsor() {
        let sponsor = Sponsor::from(&row("Primary Sponsor", "Smith", "Jane", "Q"));
        assert_eq!(sponsor.kind, "primary");
        assert_eq!(sponsor.name, "Smith, Jane Q");
    }

    #[test]
    fn test_blank_middle_initial_is_trimmed() {
        let sponsor = Sponsor::from(&row("Requested By", "Jones", "Al", "&nbsp"));
        assert_eq!(sponsor.kind, "Requested By");
        assert_eq!(sponsor.name, "Jones, Al");
    }
}
