//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ParseError`]: recoverable document/row parsing errors
//! - [`error::GuessError`]: fatal heuristic errors
//! - [`text`]: cell text cleanup helpers

pub mod error;
pub mod text;
