//! Domain error types

use thiserror::Error;

/// Errors raised while reading a vote document or an action row.
///
/// Every variant is recoverable: the caller logs it and continues as if the
/// offending document (or row) did not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Malformed count in {context}: {value:?}")]
    MalformedCount { context: &'static str, value: String },

    #[error("Tally row has {found} cells, expected {expected}")]
    ShortTallyRow { expected: usize, found: usize },

    #[error("Malformed vote date: {0:?}")]
    MalformedVoteDate(String),

    #[error("Malformed action date: {0:?}")]
    MalformedActionDate(String),
}

/// Errors raised by the heuristic outcome guesser.
///
/// These are never downgraded to "no vote": they mean either the source data
/// contradicts itself or the indicator lists do not cover the wording.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuessError {
    #[error("Passage and failure indicator both present: {0}")]
    AmbiguousPassage(String),

    #[error("Unknown passage: {0}")]
    UnknownPassage(String),
}
