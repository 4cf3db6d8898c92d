//! Console output formatter for reconciled bills

use colored::{ColoredString, Colorize};
use serde_json::json;
use statehouse_application::BillReport;
use statehouse_domain::{Bill, Outcome, Vote, VoteChoice};

/// Formats reconciliation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the full report for every bill
    pub fn format(reports: &[BillReport]) -> String {
        let mut output = String::new();

        for report in reports {
            output.push_str(&Self::header(&report.bill_id));
            output.push('\n');
            match &report.result {
                Ok(bill) => output.push_str(&Self::format_bill(bill)),
                Err(e) => output.push_str(&format!("\n{} {}\n", "Error:".red().bold(), e)),
            }
        }
        output.push_str(&Self::footer(reports));

        output
    }

    fn format_bill(bill: &Bill) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} {}\n", "Title:".cyan().bold(), bill.title));
        output.push_str(&format!(
            "{} {} ({})\n",
            "Session:".cyan().bold(),
            bill.session,
            bill.chamber
        ));

        if !bill.sponsors.is_empty() {
            output.push_str(&Self::section_header("Sponsors"));
            for sponsor in &bill.sponsors {
                output.push_str(&format!("  {} ({})\n", sponsor.name, sponsor.kind));
            }
        }

        if !bill.versions.is_empty() {
            output.push_str(&Self::section_header("Versions"));
            for version in &bill.versions {
                output.push_str(&format!("  {:<14} {}\n", version.title, version.url.dimmed()));
            }
        }

        output.push_str(&Self::section_header("Actions"));
        for action in &bill.actions {
            output.push_str(&format!(
                "  {}  {:<7}  {:<25}  {}\n",
                action.date.format("%Y-%m-%d"),
                action.actor.as_str(),
                action.action_type.as_str().dimmed(),
                action.description
            ));
        }

        if !bill.votes.is_empty() {
            output.push_str(&Self::section_header("Votes"));
            for vote in &bill.votes {
                output.push_str(&Self::format_vote(vote));
            }
        }

        output
    }

    fn format_vote(vote: &Vote) -> String {
        let date = vote
            .date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "----------".to_string());
        let mut output = format!(
            "\n  {}  {}  {}  {}\n",
            date,
            Self::outcome_label(vote.passed),
            vote.count_summary().bold(),
            format!("{} ({})", vote.motion, vote.chamber).yellow()
        );

        for (label, choice) in [
            ("Yes", VoteChoice::Yes),
            ("No", VoteChoice::No),
            ("Other", VoteChoice::Other),
        ] {
            let names: Vec<&str> = vote.voters(choice).collect();
            if !names.is_empty() {
                output.push_str(&format!("    {:<6} {}\n", format!("{}:", label).dimmed(), names.join(", ")));
            }
        }

        for source in &vote.sources {
            output.push_str(&format!("    {} {}\n", "Source:".dimmed(), source));
        }

        output
    }

    /// Format as JSON
    pub fn format_json(reports: &[BillReport]) -> String {
        let entries: Vec<_> = reports
            .iter()
            .map(|report| match &report.result {
                Ok(bill) => json!({ "bill_id": report.bill_id, "bill": bill }),
                Err(e) => json!({ "bill_id": report.bill_id, "error": e.to_string() }),
            })
            .collect();
        serde_json::to_string_pretty(&entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Format one line per bill
    pub fn format_summary(reports: &[BillReport]) -> String {
        let mut output = String::new();

        for report in reports {
            match &report.result {
                Ok(bill) => {
                    let passed = bill.votes.iter().filter(|v| v.passed.is_passed()).count();
                    let failed = bill.votes.iter().filter(|v| v.passed.is_failed()).count();
                    output.push_str(&format!(
                        "{} {:<8} {} actions, {} votes ({} passed, {} failed)\n",
                        "v".green(),
                        report.bill_id.bold(),
                        bill.actions.len(),
                        bill.votes.len(),
                        passed,
                        failed
                    ));
                }
                Err(e) => {
                    output.push_str(&format!(
                        "{} {:<8} {}\n",
                        "x".red(),
                        report.bill_id.bold(),
                        e.to_string().red()
                    ));
                }
            }
        }

        output
    }

    fn outcome_label(outcome: Outcome) -> ColoredString {
        let label = format!("{:<7}", outcome.to_string());
        match outcome {
            Outcome::Passed => label.green().bold(),
            Outcome::Failed => label.red().bold(),
            Outcome::Unknown => label.yellow(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer(reports: &[BillReport]) -> String {
        let failed = reports.iter().filter(|r| r.result.is_err()).count();
        let summary = format!("{} bill(s), {} failed", reports.len(), failed);
        format!("\n{}\n{}\n", "=".repeat(60).cyan(), summary.dimmed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use statehouse_application::ReconcileError;
    use statehouse_domain::{Action, ActionType, Actor, Chamber};

    fn reports() -> Vec<BillReport> {
        let date = NaiveDate::from_ymd_opt(2009, 2, 10).unwrap();
        let mut bill = Bill::new("2009", Chamber::Lower, "HB 2", "General Appropriations");
        bill.add_action(Action::new(
            Actor::Lower,
            "2nd Reading Passed",
            date,
            ActionType::Other,
        ));
        let mut vote = Vote::new(Chamber::Lower, "2nd Reading Passed")
            .with_date(date)
            .with_counts(2, 1, 0)
            .with_outcome(Outcome::Passed);
        vote.yes("Adams");
        vote.yes("Baker");
        vote.no("Clark");
        vote.add_source("http://laws.leg.mt.gov/votes/h1.txt");
        bill.add_vote(vote);

        vec![
            BillReport {
                bill_id: "HB 2".to_string(),
                result: Ok(bill),
            },
            BillReport {
                bill_id: "HB 3".to_string(),
                result: Err(ReconcileError::UnknownPassage("Hearing".to_string())),
            },
        ]
    }

    #[test]
    fn test_format_full() {
        let text = ConsoleFormatter::format(&reports());
        assert!(text.contains("General Appropriations"));
        assert!(text.contains("2nd Reading Passed"));
        assert!(text.contains("Adams, Baker"));
        assert!(text.contains("http://laws.leg.mt.gov/votes/h1.txt"));
        assert!(text.contains("Unknown passage: Hearing"));
    }

    #[test]
    fn test_format_summary_one_line_per_bill() {
        let text = ConsoleFormatter::format_summary(&reports());
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("1 actions, 1 votes (1 passed, 0 failed)"));
    }

    #[test]
    fn test_format_json() {
        let text = ConsoleFormatter::format_json(&reports());
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["bill"]["votes"][0]["passed"], "passed");
        assert_eq!(value[0]["bill"]["votes"][0]["roster"]["Clark"], "no");
        assert_eq!(value[0]["bill"]["actions"][0]["type"], "other");
        assert_eq!(value[1]["error"], "Unknown passage: Hearing");
    }
}
