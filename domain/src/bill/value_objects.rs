//! Bill value objects - chambers, actors, and action types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legislative chamber that can hold a vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Chamber {
    /// Senate
    Upper,
    /// House
    Lower,
}

impl Chamber {
    pub fn as_str(&self) -> &'static str {
        match self {
            Chamber::Upper => "upper",
            Chamber::Lower => "lower",
        }
    }
}

impl fmt::Display for Chamber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chamber {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upper" | "senate" => Ok(Chamber::Upper),
            "lower" | "house" => Ok(Chamber::Lower),
            other => Err(format!("unknown chamber: {}", other)),
        }
    }
}

/// Who performed an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Actor {
    Upper,
    Lower,
    Clerk,
    Unknown,
}

impl Actor {
    /// Chamber this actor belongs to, if it is a chamber at all
    pub fn chamber(&self) -> Option<Chamber> {
        match self {
            Actor::Upper => Some(Chamber::Upper),
            Actor::Lower => Some(Chamber::Lower),
            Actor::Clerk | Actor::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Actor::Upper => "upper",
            Actor::Lower => "lower",
            Actor::Clerk => "clerk",
            Actor::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized action type
///
/// Serialized with the colon-separated names used by downstream bill stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[serde(rename = "bill:introduced")]
    Introduced,
    #[serde(rename = "committee:referred")]
    CommitteeReferred,
    #[serde(rename = "governor:signed")]
    GovernorSigned,
    #[serde(rename = "governor:vetoed")]
    GovernorVetoed,
    #[serde(rename = "governor:vetoed:line-item")]
    GovernorVetoedLineItem,
    #[serde(rename = "other")]
    Other,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Introduced => "bill:introduced",
            ActionType::CommitteeReferred => "committee:referred",
            ActionType::GovernorSigned => "governor:signed",
            ActionType::GovernorVetoed => "governor:vetoed",
            ActionType::GovernorVetoedLineItem => "governor:vetoed:line-item",
            ActionType::Other => "other",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_chamber() {
        assert_eq!(Actor::Upper.chamber(), Some(Chamber::Upper));
        assert_eq!(Actor::Lower.chamber(), Some(Chamber::Lower));
        assert_eq!(Actor::Clerk.chamber(), None);
        assert_eq!(Actor::Unknown.chamber(), None);
    }

    #[test]
    fn test_chamber_from_str() {
        assert_eq!("House".parse::<Chamber>().unwrap(), Chamber::Lower);
        assert_eq!("upper".parse::<Chamber>().unwrap(), Chamber::Upper);
        assert!("joint".parse::<Chamber>().is_err());
    }

    #[test]
    fn test_action_type_serializes_colon_names() {
        let json = serde_json::to_string(&ActionType::GovernorVetoedLineItem).unwrap();
        assert_eq!(json, "\"governor:vetoed:line-item\"");
        let parsed: ActionType = serde_json::from_str("\"committee:referred\"").unwrap();
        assert_eq!(parsed, ActionType::CommitteeReferred);
    }
}
