//! Vote domain
//!
//! Everything needed to turn an action row and an optional vote document
//! into at most one [`Vote`]:
//!
//! ```text
//! vote document ──► detector ──► tabular / text_tally ──► candidate ─┐
//!                                                                    ├─► reconcile ──► Option<Vote>
//! action row (description, inline counts) ──► heuristic ──► guess ───┘
//! ```
//!
//! Nothing here performs I/O; fetching documents and locating HTML tables
//! are application-layer ports.

pub mod detector;
pub mod entities;
pub mod heuristic;
pub mod outcome;
pub mod reconcile;
pub mod source;
pub mod table;
pub mod tabular;
pub mod text_tally;

pub use detector::{DocumentKind, detect_format};
pub use entities::{RosterTally, Vote, VoteChoice};
pub use heuristic::{HeuristicGuess, guess_outcome};
pub use outcome::Outcome;
pub use reconcile::{VoteContext, merge_outcome};
pub use source::{RawVoteDocument, VoteSourceRef};
pub use table::{TableRow, VoteTable};
pub use tabular::parse_tabular_vote;
pub use text_tally::parse_text_tally;
