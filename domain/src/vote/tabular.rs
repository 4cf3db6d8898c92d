//! Parser for HTML vote documents
//!
//! A vote page is a handful of unlabelled tables. Which one holds what is
//! decided by shape only, since the page layout does not keep them in a
//! stable order:
//!
//! | Shape | Meaning |
//! |-------|---------|
//! | first header cell `YEAS` | tally summary, counts in the last row |
//! | blank first header, four header cells | roster of `"<code> <name>"` cells |
//! | blank first header, second row starting `DATE:` | decision date |

use super::entities::{Vote, VoteChoice};
use super::outcome::Outcome;
use super::table::VoteTable;
use crate::bill::value_objects::Chamber;
use crate::core::error::ParseError;
use crate::core::text::{clean_cell, normalize_spaces};
use chrono::NaiveDate;

/// Lines that mark the motion as carried wherever they appear in the page
const PASSAGE_LINES: [&str; 2] = ["Do Pass", "Do Concur"];

/// Long-form date used by the date table ("January 5, 2009")
const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Structural role of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    TallySummary,
    Roster,
    Date,
    Unrecognized,
}

/// Decide which role a table plays
pub fn table_shape(table: &VoteTable) -> TableShape {
    let Some(left_header) = table.left_header() else {
        return TableShape::Unrecognized;
    };

    if left_header == "YEAS" {
        TableShape::TallySummary
    } else if left_header.is_empty() && table.first_row_header_count() == 4 {
        TableShape::Roster
    } else if left_header.is_empty()
        && table
            .rows
            .get(1)
            .and_then(|row| row.cells.first())
            .is_some_and(|cell| cell.starts_with("DATE:"))
    {
        TableShape::Date
    } else {
        TableShape::Unrecognized
    }
}

/// Parse an HTML vote document into a vote with an undetermined date.
///
/// `body` is scanned for passage lines; `tables` are the document's tables
/// in document order. Unrecognized tables are skipped.
pub fn parse_tabular_vote(
    body: &str,
    tables: &[VoteTable],
    chamber: Chamber,
    motion: &str,
) -> Result<Vote, ParseError> {
    let mut vote = Vote::new(chamber, motion);

    if body.lines().any(|line| PASSAGE_LINES.contains(&line)) {
        vote.passed = Outcome::Passed;
    }

    for table in tables {
        match table_shape(table) {
            TableShape::TallySummary => read_tally(table, &mut vote)?,
            TableShape::Roster => read_roster(table, &mut vote),
            TableShape::Date => vote.date = Some(read_date(table)?),
            TableShape::Unrecognized => {}
        }
    }

    Ok(vote)
}

fn read_tally(table: &VoteTable, vote: &mut Vote) -> Result<(), ParseError> {
    let cells = table
        .rows
        .last()
        .map(|row| row.cells.as_slice())
        .unwrap_or_default();
    if cells.len() < 4 {
        return Err(ParseError::ShortTallyRow {
            expected: 4,
            found: cells.len(),
        });
    }

    let mut counts = [0u32; 4];
    for (slot, cell) in counts.iter_mut().zip(cells) {
        let text = clean_cell(cell);
        *slot = text.parse().map_err(|_| ParseError::MalformedCount {
            context: "tally table",
            value: text,
        })?;
    }

    let [yes, no, other_a, other_b] = counts;
    vote.yes_count = yes;
    vote.no_count = no;
    vote.other_count = other_a
        .checked_add(other_b)
        .ok_or_else(|| ParseError::MalformedCount {
            context: "tally table",
            value: format!("{} + {}", other_a, other_b),
        })?;
    Ok(())
}

fn read_roster(table: &VoteTable, vote: &mut Vote) {
    for cell in &table.descendant_cells {
        let cell = normalize_spaces(cell);
        let Some((code, name)) = cell.split_once(' ') else {
            continue;
        };
        let name = name.trim();
        if name.is_empty() {
            continue;
        }
        vote.record(name, VoteChoice::from_code(code.trim()));
    }
}

fn read_date(table: &VoteTable) -> Result<NaiveDate, ParseError> {
    let cell = table
        .rows
        .get(1)
        .and_then(|row| row.cells.first())
        .map(String::as_str)
        .unwrap_or_default();
    let text = normalize_spaces(cell.trim_start_matches("DATE:"));
    let text = text.trim();
    NaiveDate::parse_from_str(text, LONG_DATE_FORMAT)
        .map_err(|_| ParseError::MalformedVoteDate(text.to_string()))
}
