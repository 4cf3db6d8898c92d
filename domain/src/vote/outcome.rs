//! Tri-state vote outcome

use serde::{Deserialize, Serialize};

/// Outcome of a vote
///
/// `Unknown` is an explicit state: it means every available source was
/// consulted and none determined the result. It is never a stand-in for
/// `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
    #[default]
    Unknown,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed)
    }

    /// Whether the outcome is either passed or failed
    pub fn is_determined(&self) -> bool {
        !matches!(self, Outcome::Unknown)
    }
}

impl From<bool> for Outcome {
    fn from(passed: bool) -> Self {
        if passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "Passed"),
            Outcome::Failed => write!(f, "Failed"),
            Outcome::Unknown => write!(f, "Unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(Outcome::default(), Outcome::Unknown);
        assert!(!Outcome::default().is_determined());
    }

    #[test]
    fn test_from_bool() {
        assert_eq!(Outcome::from(true), Outcome::Passed);
        assert_eq!(Outcome::from(false), Outcome::Failed);
        assert!(Outcome::from(false).is_determined());
    }

    #[test]
    fn test_serialize_lowercase() {
        let json = serde_json::to_string(&Outcome::Unknown).unwrap();
        assert_eq!(json, "\"unknown\"");
    }
}
