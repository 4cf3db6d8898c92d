//! Action rows and their classification

pub mod classifier;
pub mod row;

pub use classifier::{ClassifiedAction, action_type_for, classify_action};
pub use row::ActionRow;
