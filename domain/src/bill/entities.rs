//! Bill entities - the bill container and the records it owns.

use super::value_objects::{ActionType, Actor, Chamber};
use crate::vote::Vote;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One recorded legislative event against a bill
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub actor: Actor,
    pub description: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub action_type: ActionType,
}

impl Action {
    pub fn new(
        actor: Actor,
        description: impl Into<String>,
        date: NaiveDate,
        action_type: ActionType,
    ) -> Self {
        Self {
            actor,
            description: description.into(),
            date,
            action_type,
        }
    }
}

/// A bill sponsor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    /// Normalized sponsor type (e.g. "primary")
    #[serde(rename = "type")]
    pub kind: String,
    /// "Last, First M"
    pub name: String,
}

/// A published version of the bill text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillVersion {
    pub title: String,
    pub url: String,
}

/// Container for everything scraped about one bill
///
/// Constructed by the caller; reconciliation only appends to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub session: String,
    pub chamber: Chamber,
    pub bill_id: String,
    pub title: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub sponsors: Vec<Sponsor>,
    #[serde(default)]
    pub versions: Vec<BillVersion>,
    #[serde(default)]
    pub actions: Vec<Action>,
    #[serde(default)]
    pub votes: Vec<Vote>,
}

impl Bill {
    pub fn new(
        session: impl Into<String>,
        chamber: Chamber,
        bill_id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            session: session.into(),
            chamber,
            bill_id: bill_id.into(),
            title: title.into(),
            sources: Vec::new(),
            sponsors: Vec::new(),
            versions: Vec::new(),
            actions: Vec::new(),
            votes: Vec::new(),
        }
    }

    pub fn add_source(&mut self, url: impl Into<String>) {
        let url = url.into();
        if !self.sources.contains(&url) {
            self.sources.push(url);
        }
    }

    pub fn add_sponsor(&mut self, sponsor: Sponsor) {
        self.sponsors.push(sponsor);
    }

    pub fn add_version(&mut self, version: BillVersion) {
        self.versions.push(version);
    }

    /// Append an action; actions are kept in document order
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn add_vote(&mut self, vote: Vote) {
        self.votes.push(vote);
    }

    /// First recorded source whose URL contains `host`
    pub fn source_on_host(&self, host: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.contains(host))
            .map(String::as_str)
    }
}
