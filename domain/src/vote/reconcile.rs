//! Merging a parsed vote with a heuristic guess.
//!
//! Precedence, highest first:
//!
//! 1. a parsed document whose outcome is determined, used as-is
//! 2. a parsed document with an undetermined outcome, overlaid with the
//!    guess's outcome (document counts and roster kept)
//! 3. the guess alone, with its inline counts
//!
//! Anything else yields no vote at all. An undetermined vote is never
//! returned.

use super::entities::Vote;
use super::heuristic::HeuristicGuess;
use super::outcome::Outcome;
use crate::bill::value_objects::Chamber;
use chrono::NaiveDate;

/// What the action row itself says about the vote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteContext {
    pub chamber: Chamber,
    /// Action description, used as the vote's motion
    pub motion: String,
    /// Action date
    pub date: NaiveDate,
}

impl VoteContext {
    pub fn new(chamber: Chamber, motion: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            chamber,
            motion: motion.into(),
            date,
        }
    }
}

/// Combine an optional parsed vote and an optional guess into the final vote.
///
/// The result always has a date no earlier than the action date: a missing
/// document date, or one that predates the action, is replaced by the
/// action's date.
pub fn merge_outcome(
    candidate: Option<Vote>,
    guess: Option<HeuristicGuess>,
    context: &VoteContext,
) -> Option<Vote> {
    let merged = match (candidate, guess) {
        (Some(vote), _) if vote.passed.is_determined() => vote,
        (Some(vote), Some(guess)) => vote.with_outcome(Outcome::from(guess.passed)),
        (Some(_), None) | (None, None) => return None,
        (None, Some(guess)) => Vote::new(context.chamber, context.motion.clone())
            .with_counts(guess.yes_count, guess.no_count, 0)
            .with_outcome(Outcome::from(guess.passed)),
    };
    Some(settle_date(merged, context.date))
}

fn settle_date(mut vote: Vote, action_date: NaiveDate) -> Vote {
    match vote.date {
        Some(date) if date >= action_date => {}
        _ => vote.date = Some(action_date),
    }
    vote
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vote::entities::VoteChoice;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2009, 2, d).unwrap()
    }

    fn context() -> VoteContext {
        VoteContext::new(Chamber::Lower, "3rd Reading Passed", day(10))
    }

    fn parsed(passed: Outcome) -> Vote {
        let mut vote = Vote::new(Chamber::Lower, "3rd Reading Passed")
            .with_counts(60, 40, 0)
            .with_outcome(passed)
            .with_date(day(11));
        vote.yes("Adams");
        vote
    }

    fn guess(passed: bool) -> HeuristicGuess {
        HeuristicGuess {
            passed,
            yes_count: 1,
            no_count: 2,
        }
    }

    #[test]
    fn test_determined_candidate_wins() {
        let vote = merge_outcome(Some(parsed(Outcome::Passed)), Some(guess(false)), &context())
            .unwrap();
        assert_eq!(vote.passed, Outcome::Passed);
        assert_eq!(vote.yes_count, 60);
        assert_eq!(vote.date, Some(day(11)));
    }

    #[test]
    fn test_guess_overlays_undetermined_candidate() {
        let vote = merge_outcome(Some(parsed(Outcome::Unknown)), Some(guess(false)), &context())
            .unwrap();
        assert_eq!(vote.passed, Outcome::Failed);
        assert_eq!(vote.yes_count, 60);
        assert_eq!(vote.no_count, 40);
        assert_eq!(vote.roster.get("Adams"), Some(&VoteChoice::Yes));
    }

    #[test]
    fn test_undetermined_candidate_without_guess_is_absent() {
        assert!(merge_outcome(Some(parsed(Outcome::Unknown)), None, &context()).is_none());
    }

    #[test]
    fn test_guess_alone_builds_vote() {
        let vote = merge_outcome(None, Some(guess(true)), &context()).unwrap();
        assert_eq!(vote.passed, Outcome::Passed);
        assert_eq!(vote.chamber, Chamber::Lower);
        assert_eq!(vote.motion, "3rd Reading Passed");
        assert_eq!(vote.count_summary(), "1-2-0");
        assert_eq!(vote.date, Some(day(10)));
        assert!(vote.roster.is_empty());
    }

    #[test]
    fn test_nothing_is_absent() {
        assert!(merge_outcome(None, None, &context()).is_none());
    }

    #[test]
    fn test_missing_or_early_date_uses_action_date() {
        let mut candidate = parsed(Outcome::Passed);
        candidate.date = None;
        let vote = merge_outcome(Some(candidate), None, &context()).unwrap();
        assert_eq!(vote.date, Some(day(10)));

        let candidate = parsed(Outcome::Passed).with_date(day(3));
        let vote = merge_outcome(Some(candidate), None, &context()).unwrap();
        assert_eq!(vote.date, Some(day(10)));
    }
}
