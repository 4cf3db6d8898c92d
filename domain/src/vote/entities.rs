//! Vote record attached to a bill

use super::outcome::Outcome;
use crate::bill::value_objects::Chamber;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single legislator's recorded choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
    Other,
}

impl VoteChoice {
    /// Map a roster code (`Y`, `N`, anything else) to a choice
    pub fn from_code(code: &str) -> Self {
        match code {
            "Y" => VoteChoice::Yes,
            "N" => VoteChoice::No,
            _ => VoteChoice::Other,
        }
    }
}

/// Per-choice head count of a roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RosterTally {
    pub yes: u32,
    pub no: u32,
    pub other: u32,
}

/// Canonical vote record for one action
///
/// # Example
///
/// ```
/// use statehouse_domain::{Chamber, Outcome, Vote};
///
/// let mut vote = Vote::new(Chamber::Lower, "3rd Reading Passed");
/// vote.yes("Smith");
/// vote.no("Jones");
/// assert_eq!(vote.passed, Outcome::Unknown);
/// assert_eq!(vote.roster_tally().yes, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vote {
    pub chamber: Chamber,
    /// Decision date; `None` until a document or the action supplies one
    pub date: Option<NaiveDate>,
    pub motion: String,
    pub passed: Outcome,
    pub yes_count: u32,
    pub no_count: u32,
    pub other_count: u32,
    /// Voter name to choice. Advisory against the counts, which source
    /// documents do not always keep in agreement.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub roster: BTreeMap<String, VoteChoice>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<String>,
}

impl Vote {
    /// Create an empty vote with an undetermined outcome
    pub fn new(chamber: Chamber, motion: impl Into<String>) -> Self {
        Self {
            chamber,
            date: None,
            motion: motion.into(),
            passed: Outcome::Unknown,
            yes_count: 0,
            no_count: 0,
            other_count: 0,
            roster: BTreeMap::new(),
            sources: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_counts(mut self, yes: u32, no: u32, other: u32) -> Self {
        self.yes_count = yes;
        self.no_count = no;
        self.other_count = other;
        self
    }

    pub fn with_outcome(mut self, passed: Outcome) -> Self {
        self.passed = passed;
        self
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.sources.contains(&url) {
            self.sources.push(url);
        }
    }

    pub fn record(&mut self, name: impl Into<String>, choice: VoteChoice) {
        self.roster.insert(name.into(), choice);
    }

    pub fn yes(&mut self, name: impl Into<String>) {
        self.record(name, VoteChoice::Yes);
    }

    pub fn no(&mut self, name: impl Into<String>) {
        self.record(name, VoteChoice::No);
    }

    pub fn other(&mut self, name: impl Into<String>) {
        self.record(name, VoteChoice::Other);
    }

    /// Voters who recorded the given choice, in name order
    pub fn voters(&self, choice: VoteChoice) -> impl Iterator<Item = &str> {
        self.roster
            .iter()
            .filter(move |(_, c)| **c == choice)
            .map(|(name, _)| name.as_str())
    }

    /// Count roster entries per choice
    pub fn roster_tally(&self) -> RosterTally {
        let mut tally = RosterTally::default();
        for choice in self.roster.values() {
            match choice {
                VoteChoice::Yes => tally.yes += 1,
                VoteChoice::No => tally.no += 1,
                VoteChoice::Other => tally.other += 1,
            }
        }
        tally
    }

    /// Whether the roster agrees with the yes/no counts.
    ///
    /// An empty roster is considered consistent.
    pub fn roster_matches_counts(&self) -> bool {
        if self.roster.is_empty() {
            return true;
        }
        let tally = self.roster_tally();
        tally.yes == self.yes_count && tally.no == self.no_count
    }

    /// Generate a compact count summary (e.g., "12-8-3")
    pub fn count_summary(&self) -> String {
        format!("{}-{}-{}", self.yes_count, self.no_count, self.other_count)
    }
}
