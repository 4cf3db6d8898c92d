//! Action classification
//!
//! The leading cell of an action row carries an actor marker followed by the
//! action name: `"(H) Referred to Committee"`. The site sometimes drops the
//! separating space (`"(H)Introduced"`), so markers are matched as a prefix
//! rather than as the first whitespace token.

use crate::bill::value_objects::{ActionType, Actor};

/// Actor markers as they appear at the start of the cell
const ACTOR_MARKERS: [(&str, Actor); 3] = [
    ("(S)", Actor::Upper),
    ("(H)", Actor::Lower),
    ("(C)", Actor::Clerk),
];

/// Exact action names with a known type
const ACTION_TYPES: [(&str, ActionType); 7] = [
    (
        "Returned with Governor's Line-item Veto",
        ActionType::GovernorVetoedLineItem,
    ),
    ("Introduced", ActionType::Introduced),
    ("Referred to Committee", ActionType::CommitteeReferred),
    ("Rereferred to Committee", ActionType::CommitteeReferred),
    ("Signed by Governor", ActionType::GovernorSigned),
    (
        "Taken from 2nd Reading; Rereferred to Committee",
        ActionType::CommitteeReferred,
    ),
    ("Vetoed by Governor", ActionType::GovernorVetoed),
];

/// Always performed by the clerk, whatever marker precedes it
const CLERK_ACTION: &str = "Chapter Number Assigned";

/// Result of classifying an action row's leading cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedAction {
    pub actor: Actor,
    pub description: String,
    pub action_type: ActionType,
}

/// Split a leading cell into actor and description and type the action.
///
/// Never fails: an unknown marker gives [`Actor::Unknown`] and an unknown
/// name gives [`ActionType::Other`].
///
/// # Examples
///
/// ```
/// use statehouse_domain::action::classify_action;
/// use statehouse_domain::{ActionType, Actor};
///
/// let action = classify_action("(H)Introduced");
/// assert_eq!(action.actor, Actor::Lower);
/// assert_eq!(action.description, "Introduced");
/// assert_eq!(action.action_type, ActionType::Introduced);
/// ```
pub fn classify_action(leading_cell: &str) -> ClassifiedAction {
    let text = leading_cell.trim();

    let (actor, rest) = ACTOR_MARKERS
        .iter()
        .find_map(|(marker, actor)| text.strip_prefix(marker).map(|rest| (*actor, rest)))
        .unwrap_or((Actor::Unknown, text));

    let description = rest.trim().to_string();
    let actor = if description == CLERK_ACTION {
        Actor::Clerk
    } else {
        actor
    };

    ClassifiedAction {
        actor,
        action_type: action_type_for(&description),
        description,
    }
}

/// Look up the type of an exact action name
pub fn action_type_for(description: &str) -> ActionType {
    ACTION_TYPES
        .iter()
        .find(|(name, _)| *name == description)
        .map(|(_, action_type)| *action_type)
        .unwrap_or(ActionType::Other)
}
