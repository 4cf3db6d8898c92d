//! Domain layer for statehouse
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Actions
//!
//! Each row of a bill's action table becomes an [`Action`] with a normalized
//! [`Actor`] and [`ActionType`]. Classification never fails; unknown markers
//! and names fall back to `Unknown` / `Other`.
//!
//! ## Votes
//!
//! A row may also yield a [`Vote`]. Three sources can speak to the outcome:
//!
//! - **Vote document**: HTML tables or an "UNOFFICIAL VOTE TALLY" text
//! - **Inline counts**: yes/no numbers printed in the action row
//! - **Wording**: indicator phrases in the action description
//!
//! [`merge_outcome`] settles them into at most one vote. An undetermined
//! outcome ([`Outcome::Unknown`]) is never attached to a bill.

pub mod action;
pub mod bill;
pub mod config;
pub mod core;
pub mod vote;

// Re-export commonly used types
pub use action::{ActionRow, ClassifiedAction, classify_action};
pub use bill::{
    Action, ActionType, Actor, Bill, BillVersion, Chamber, Sponsor, SponsorRow, VersionIndex,
    VersionIndexEntry, VersionMatcher,
};
pub use config::OutputFormat;
pub use core::error::{GuessError, ParseError};

// Re-export vote types
pub use vote::{
    DocumentKind, HeuristicGuess, Outcome, RawVoteDocument, TableRow, Vote, VoteChoice,
    VoteContext, VoteSourceRef, VoteTable, detect_format, guess_outcome, merge_outcome,
    parse_tabular_vote, parse_text_tally,
};
