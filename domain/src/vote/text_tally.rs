//! Parser for "UNOFFICIAL VOTE TALLY" text documents
//!
//! ```text
//! UNOFFICIAL VOTE TALLY
//! Bill: HB 2   Date: 02/10/2009
//! Motion: DO PASS AS AMENDED
//!
//! Yeas: Adams, Baker,
//!   Clark.
//! Total 3
//!
//! Nays: Davis.
//! Total 1
//!
//! Total Excused 1
//! ```
//!
//! Names follow a `Yeas:`/`Ayes:` or `Nays:`/`Noes` header until a blank
//! line; a `Total` line inside a section carries that section's count and a
//! `Total` line outside any section adds to the "other" count.

use super::entities::{Vote, VoteChoice};
use super::outcome::Outcome;
use crate::bill::value_objects::Chamber;
use crate::core::error::ParseError;
use crate::core::text::trailing_integer;

/// Motion wording that means the motion carried
const PASSING_MOTIONS: [&str; 3] = ["DO CONCUR", "DO PASS", "DO ADOPT"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Yeas,
    Nays,
}

/// Parse a plain-text tally. The vote date is left for the caller to set.
pub fn parse_text_tally(body: &str, chamber: Chamber, motion: &str) -> Result<Vote, ParseError> {
    let mut vote = Vote::new(chamber, motion);
    let mut section = Section::None;

    for line in body.lines() {
        if let Some(rest) = line.strip_prefix("Motion:") {
            let rest = rest.to_uppercase();
            if PASSING_MOTIONS.iter().any(|m| rest.contains(m)) {
                vote.passed = Outcome::Passed;
            }
        } else if line.starts_with("Yeas:") || line.starts_with("Ayes:") {
            section = Section::Yeas;
        } else if line.starts_with("Nays:") || line.starts_with("Noes") {
            section = Section::Nays;
        } else if line.starts_with("Total ") {
            if section == Section::None {
                let count = total(line)?;
                vote.other_count =
                    vote.other_count
                        .checked_add(count)
                        .ok_or_else(|| ParseError::MalformedCount {
                            context: "tally total",
                            value: line.to_string(),
                        })?;
            }
        } else if line.is_empty() {
            section = Section::None;
        }

        let choice = match section {
            Section::Yeas => VoteChoice::Yes,
            Section::Nays => VoteChoice::No,
            Section::None => continue,
        };

        if line.starts_with("Total ") {
            let count = total(line)?;
            match choice {
                VoteChoice::Yes => vote.yes_count = count,
                _ => vote.no_count = count,
            }
            continue;
        }

        let names = line.split_once(':').map(|(_, rest)| rest).unwrap_or(line);
        for name in names.split(',') {
            let name = name.trim();
            let name = name.strip_suffix('.').unwrap_or(name);
            if !name.is_empty() {
                vote.record(name, choice);
            }
        }
    }

    Ok(vote)
}

fn total(line: &str) -> Result<u32, ParseError> {
    trailing_integer(line).ok_or_else(|| ParseError::MalformedCount {
        context: "tally total",
        value: line.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "UNOFFICIAL VOTE TALLY
Bill: HB 2   Date: 02/10/2009
Motion: DO PASS AS AMENDED

Yeas: Adams, Baker,
  Clark.
Total 3

Nays: Davis.
Total 1

Total Excused 1
Total Absent 2
";

    #[test]
    fn test_yeas_block() {
        let vote = parse_text_tally("Yeas: A, B, C.\nTotal 3\n", Chamber::Lower, "m").unwrap();
        assert_eq!(vote.yes_count, 3);
        assert_eq!(vote.roster.len(), 3);
        for name in ["A", "B", "C"] {
            assert_eq!(vote.roster.get(name), Some(&VoteChoice::Yes));
        }
    }

    #[test]
    fn test_full_document() {
        let vote = parse_text_tally(SAMPLE, Chamber::Lower, "3rd Reading Passed").unwrap();
        assert_eq!(vote.passed, Outcome::Passed);
        assert_eq!(vote.yes_count, 3);
        assert_eq!(vote.no_count, 1);
        assert_eq!(vote.other_count, 3);
        assert_eq!(vote.roster.get("Clark"), Some(&VoteChoice::Yes));
        assert_eq!(vote.roster.get("Davis"), Some(&VoteChoice::No));
        assert_eq!(vote.roster.len(), 4);
        assert!(vote.roster_matches_counts());
        assert_eq!(vote.date, None);
    }

    #[test]
    fn test_ayes_and_noes_headers() {
        let body = "Ayes: Adams\nTotal 1\n\nNoes: Baker, Clark\nTotal 2\n";
        let vote = parse_text_tally(body, Chamber::Upper, "m").unwrap();
        assert_eq!(vote.yes_count, 1);
        assert_eq!(vote.no_count, 2);
        assert_eq!(vote.roster.get("Clark"), Some(&VoteChoice::No));
    }

    #[test]
    fn test_nays_header_switches_section() {
        let body = "Yeas: Adams\nNays: Baker\nTotal 1\n";
        let vote = parse_text_tally(body, Chamber::Upper, "m").unwrap();
        assert_eq!(vote.roster.get("Adams"), Some(&VoteChoice::Yes));
        assert_eq!(vote.roster.get("Baker"), Some(&VoteChoice::No));
        assert_eq!(vote.yes_count, 0);
        assert_eq!(vote.no_count, 1);
    }

    #[test]
    fn test_motion_never_sets_failed() {
        let vote = parse_text_tally("Motion: DO NOT CONCUR? TABLED\n", Chamber::Upper, "m").unwrap();
        assert_eq!(vote.passed, Outcome::Unknown);

        let vote = parse_text_tally("Motion: do adopt\n", Chamber::Upper, "m").unwrap();
        assert_eq!(vote.passed, Outcome::Passed);
    }

    #[test]
    fn test_blank_line_ends_section() {
        let body = "Yeas: Adams\n\nStray, Names\nTotal 5\n";
        let vote = parse_text_tally(body, Chamber::Upper, "m").unwrap();
        assert_eq!(vote.roster.len(), 1);
        assert_eq!(vote.other_count, 5);
        assert_eq!(vote.yes_count, 0);
    }

    #[test]
    fn test_malformed_total_is_error() {
        let result = parse_text_tally("Yeas: Adams\nTotal many\n", Chamber::Upper, "m");
        assert!(matches!(result, Err(ParseError::MalformedCount { .. })));
    }

    #[test]
    fn test_parse_is_deterministic() {
        let first = parse_text_tally(SAMPLE, Chamber::Lower, "m").unwrap();
        let second = parse_text_tally(SAMPLE, Chamber::Lower, "m").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_other_total_overflow_is_error() {
        let body = "UNOFFICIAL VOTE TALLY\nTotal 4294967295\nTotal 1\n";
        let result = parse_text_tally(body, Chamber::Lower, "m");
        assert_eq!(
            result,
            Err(ParseError::MalformedCount {
                context: "tally total",
                value: "Total 1".to_string(),
            })
        );
    }
}
