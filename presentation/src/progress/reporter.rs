//! Progress reporting for reconciliation runs

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use statehouse_application::{ActionResolution, ReconcileProgressNotifier};
use statehouse_domain::{Action, Outcome};
use std::sync::Mutex;

/// Reports progress with one progress bar per bill
pub struct ProgressReporter {
    multi: MultiProgress,
    bill_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            bill_bar: Mutex::new(None),
        }
    }

    fn bill_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Short colored description of what happened to an action row
fn resolution_label(action: Option<&Action>, resolution: ActionResolution) -> String {
    let description = action.map(|a| a.description.as_str()).unwrap_or("(unreadable row)");
    match resolution {
        ActionResolution::VoteAttached(Outcome::Passed) => {
            format!("{} {}", "v".green(), description)
        }
        ActionResolution::VoteAttached(outcome) => {
            format!("{} {} ({})", "x".red(), description, outcome)
        }
        ActionResolution::NoVote => format!("{} {}", "-".dimmed(), description),
        ActionResolution::Skipped => format!("{} {}", "!".yellow(), description),
    }
}

impl ReconcileProgressNotifier for ProgressReporter {
    fn on_bill_start(&self, bill_id: &str, total_rows: usize) {
        let pb = self.multi.add(ProgressBar::new(total_rows as u64));
        pb.set_style(Self::bill_style());
        pb.set_prefix(bill_id.to_string());
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.bill_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_action_complete(&self, action: Option<&Action>, resolution: ActionResolution) {
        if let Ok(slot) = self.bill_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(resolution_label(action, resolution));
            pb.inc(1);
        }
    }

    fn on_bill_complete(&self, bill_id: &str, success: bool) {
        if let Ok(mut slot) = self.bill_bar.lock()
            && let Some(pb) = slot.take()
        {
            if success {
                pb.finish_with_message(format!("{} complete!", bill_id.green()));
            } else {
                pb.abandon_with_message(format!("{} failed", bill_id.red()));
            }
        }
    }
}

/// Simple line-based progress on stderr (no fancy UI)
pub struct SimpleProgress;

impl ReconcileProgressNotifier for SimpleProgress {
    fn on_bill_start(&self, bill_id: &str, total_rows: usize) {
        eprintln!("{} {} ({} action rows)", "->".cyan(), bill_id.bold(), total_rows);
    }

    fn on_action_complete(&self, action: Option<&Action>, resolution: ActionResolution) {
        eprintln!("  {}", resolution_label(action, resolution));
    }

    fn on_bill_complete(&self, bill_id: &str, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), bill_id);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), bill_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use statehouse_domain::{ActionType, Actor};

    fn action() -> Action {
        Action::new(
            Actor::Upper,
            "3rd Reading Failed",
            NaiveDate::from_ymd_opt(2009, 3, 1).unwrap(),
            ActionType::Other,
        )
    }

    #[test]
    fn test_resolution_label_mentions_action() {
        let label = resolution_label(Some(&action()), ActionResolution::VoteAttached(Outcome::Failed));
        assert!(label.contains("3rd Reading Failed"));
        assert!(label.contains("Failed)"));
    }

    #[test]
    fn test_resolution_label_for_skipped_row() {
        let label = resolution_label(None, ActionResolution::Skipped);
        assert!(label.contains("(unreadable row)"));
    }

    #[test]
    fn test_reporter_lifecycle_without_terminal() {
        let reporter = ProgressReporter::new();
        reporter.on_bill_start("SB 5", 1);
        reporter.on_action_complete(Some(&action()), ActionResolution::NoVote);
        reporter.on_bill_complete("SB 5", true);
        assert!(reporter.bill_bar.lock().unwrap().is_none());
    }
}
