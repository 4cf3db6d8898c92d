//! Progress notification port
//!
//! Defines the interface for reporting progress while bills are reconciled.

use statehouse_domain::{Action, Outcome};

/// What happened to one action row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResolution {
    /// A vote with this outcome was attached
    VoteAttached(Outcome),
    /// The action was recorded without a vote
    NoVote,
    /// The row could not be turned into an action
    Skipped,
}

/// Callback for progress updates during reconciliation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, nothing).
pub trait ReconcileProgressNotifier: Send + Sync {
    /// Called before the first action row of a bill
    fn on_bill_start(&self, bill_id: &str, total_rows: usize);

    /// Called after each action row
    fn on_action_complete(&self, action: Option<&Action>, resolution: ActionResolution);

    /// Called when a bill finishes, successfully or not
    fn on_bill_complete(&self, bill_id: &str, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ReconcileProgressNotifier for NoProgress {
    fn on_bill_start(&self, _bill_id: &str, _total_rows: usize) {}
    fn on_action_complete(&self, _action: Option<&Action>, _resolution: ActionResolution) {}
    fn on_bill_complete(&self, _bill_id: &str, _success: bool) {}
}
