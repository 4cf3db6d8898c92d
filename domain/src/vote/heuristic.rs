//! Outcome guessing from action wording and inline counts.
//!
//! Used when an action carries only a yes/no count, and when a parsed vote
//! document did not say whether the motion carried. Some actions need a
//! supermajority, so a plain yes/no comparison is only trusted for the
//! ambiguous wordings.
//!
//! The three indicator lists are checked in a fixed order and the ambiguous
//! list is applied last, overwriting whatever the first two decided. That
//! ordering is historical rather than principled, but results depend on it.

use crate::core::error::GuessError;
use crate::core::text::clean_cell;
use serde::{Deserialize, Serialize};

/// Wording that means the action carried
pub const PASSAGE_INDICATORS: [&str; 10] = [
    "Adopted",
    "Appointed",
    "Carried",
    "Concurred",
    "Dissolved",
    "Passed",
    "Rereferred to Committee",
    "Transmitted to",
    "Veto Overidden",
    "Veto Overridden",
];

/// Wording that means the action failed
pub const FAILURE_INDICATORS: [&str; 2] = ["Failed", "Rejected"];

/// Wording whose outcome is read off the counts
pub const AMBIGUOUS_INDICATORS: [&str; 10] = [
    "Indefinitely Postponed",
    "On Motion Rules Suspended",
    "Pass Consideration",
    "Reconsidered Previous",
    "Rules Suspended",
    "Segregated from Committee",
    "Special Action",
    "Sponsor List Modified",
    "Tabled",
    "Taken from",
];

/// A determinate outcome guessed from an action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicGuess {
    pub passed: bool,
    pub yes_count: u32,
    pub no_count: u32,
}

/// Guess whether an action carried.
///
/// Returns `Ok(None)` when either inline count is not a number: without
/// counts there is nothing to guess from. Errors are fatal data problems
/// and must reach the caller.
///
/// # Examples
///
/// ```
/// use statehouse_domain::vote::heuristic::guess_outcome;
///
/// let guess = guess_outcome("Indefinitely Postponed", "4", "10").unwrap().unwrap();
/// assert!(!guess.passed);
///
/// assert_eq!(guess_outcome("Signed by Governor", "", "").unwrap(), None);
/// ```
pub fn guess_outcome(
    description: &str,
    yes_text: &str,
    no_text: &str,
) -> Result<Option<HeuristicGuess>, GuessError> {
    let (Ok(yes), Ok(no)) = (
        clean_cell(yes_text).parse::<u32>(),
        clean_cell(no_text).parse::<u32>(),
    ) else {
        return Ok(None);
    };

    let mut passed: Option<bool> = None;

    if contains_any(description, &PASSAGE_INDICATORS) {
        passed = Some(true);
    }

    for indicator in FAILURE_INDICATORS {
        if !description.contains(indicator) {
            continue;
        }
        match passed {
            Some(true) if no >= yes => passed = Some(false),
            Some(true) => return Err(GuessError::AmbiguousPassage(description.to_string())),
            None => passed = Some(false),
            Some(false) => {}
        }
    }

    if contains_any(description, &AMBIGUOUS_INDICATORS) {
        passed = Some(yes > no);
    }

    match passed {
        Some(passed) => Ok(Some(HeuristicGuess {
            passed,
            yes_count: yes,
            no_count: no,
        })),
        None => Err(GuessError::UnknownPassage(description.to_string())),
    }
}

fn contains_any(description: &str, indicators: &[&str]) -> bool {
    indicators.iter().any(|i| description.contains(i))
}
