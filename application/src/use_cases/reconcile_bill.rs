//! Reconcile Bill use case
//!
//! Walks a bill's action rows in order, records each action, and attaches
//! at most one vote per action by reconciling the linked vote document with
//! the row's own wording and counts.

use crate::config::ReconcileConfig;
use crate::ports::progress::{ActionResolution, NoProgress, ReconcileProgressNotifier};
use crate::ports::table_extractor::TableExtractor;
use crate::ports::vote_fetcher::{FetchError, VoteDocumentFetcher};
use statehouse_domain::{
    Action, ActionRow, Bill, DocumentKind, GuessError, Sponsor, SponsorRow, VersionIndex, Vote,
    VoteContext, VoteSourceRef, classify_action, detect_format, guess_outcome, merge_outcome,
    parse_tabular_vote, parse_text_tally,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::Url;

/// Errors that stop a bill from being reconciled
///
/// Recoverable conditions (missing documents, unrecognized formats,
/// unparseable counts) never surface here; they only mean no vote is
/// attached to that action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Passage and failure indicator both present: {0}")]
    AmbiguousPassage(String),

    #[error("Unknown passage: {0}")]
    UnknownPassage(String),

    #[error("Fetch error: {0}")]
    Fetch(FetchError),
}

impl From<GuessError> for ReconcileError {
    fn from(error: GuessError) -> Self {
        match error {
            GuessError::AmbiguousPassage(d) => ReconcileError::AmbiguousPassage(d),
            GuessError::UnknownPassage(d) => ReconcileError::UnknownPassage(d),
        }
    }
}

/// Input for the ReconcileBill use case
#[derive(Debug, Clone)]
pub struct ReconcileBillInput {
    /// Bill with its metadata and sources; actions and votes are appended
    pub bill: Bill,
    /// Action table rows in page order
    pub rows: Vec<ActionRow>,
    pub sponsors: Vec<SponsorRow>,
    pub version_index: Option<VersionIndex>,
}

impl ReconcileBillInput {
    pub fn new(bill: Bill, rows: Vec<ActionRow>) -> Self {
        Self {
            bill,
            rows,
            sponsors: Vec::new(),
            version_index: None,
        }
    }

    pub fn with_sponsors(mut self, sponsors: Vec<SponsorRow>) -> Self {
        self.sponsors = sponsors;
        self
    }

    pub fn with_version_index(mut self, index: VersionIndex) -> Self {
        self.version_index = Some(index);
        self
    }
}

/// Result of reconciling one bill as part of a batch
#[derive(Debug)]
pub struct BillReport {
    pub bill_id: String,
    pub result: Result<Bill, ReconcileError>,
}

/// Use case for reconciling the actions and votes of bills
pub struct ReconcileBillUseCase<F: VoteDocumentFetcher, T: TableExtractor> {
    fetcher: Arc<F>,
    extractor: Arc<T>,
    config: ReconcileConfig,
}

impl<F: VoteDocumentFetcher, T: TableExtractor> ReconcileBillUseCase<F, T> {
    pub fn new(fetcher: Arc<F>, extractor: Arc<T>) -> Self {
        Self {
            fetcher,
            extractor,
            config: ReconcileConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReconcileConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: ReconcileBillInput) -> Result<Bill, ReconcileError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Reconcile bills one after another.
    ///
    /// A fatal error ends only the bill it occurred in.
    pub async fn execute_all(
        &self,
        inputs: Vec<ReconcileBillInput>,
        progress: &dyn ReconcileProgressNotifier,
    ) -> Vec<BillReport> {
        let mut reports = Vec::with_capacity(inputs.len());
        for input in inputs {
            let bill_id = input.bill.bill_id.clone();
            let result = self.execute_with_progress(input, progress).await;
            if let Err(e) = &result {
                warn!("Bill {} aborted: {}", bill_id, e);
            }
            reports.push(BillReport { bill_id, result });
        }
        reports
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: ReconcileBillInput,
        progress: &dyn ReconcileProgressNotifier,
    ) -> Result<Bill, ReconcileError> {
        let ReconcileBillInput {
            mut bill,
            rows,
            sponsors,
            version_index,
        } = input;

        info!("Reconciling {} ({} action rows)", bill.bill_id, rows.len());
        progress.on_bill_start(&bill.bill_id, rows.len());

        for row in &sponsors {
            bill.add_sponsor(Sponsor::from(row));
        }
        if let Some(index) = &version_index {
            for version in index.versions_for(&bill.bill_id) {
                bill.add_version(version);
            }
        }

        for row in &rows {
            let date = match row.date() {
                Ok(date) => date,
                Err(e) => {
                    warn!("{}: skipping action row {:?}: {}", bill.bill_id, row.leading_cell_text, e);
                    progress.on_action_complete(None, ActionResolution::Skipped);
                    continue;
                }
            };

            let classified = classify_action(&row.leading_cell_text);
            let action = Action::new(
                classified.actor,
                classified.description,
                date,
                classified.action_type,
            );
            bill.add_action(action.clone());

            let vote = match self.reconcile_action(&bill, row, &action).await {
                Ok(vote) => vote,
                Err(e) => {
                    progress.on_action_complete(Some(&action), ActionResolution::NoVote);
                    progress.on_bill_complete(&bill.bill_id, false);
                    return Err(e);
                }
            };

            match vote {
                Some(vote) => {
                    debug!(
                        "{}: {} -> {} ({})",
                        bill.bill_id,
                        action.description,
                        vote.passed,
                        vote.count_summary()
                    );
                    progress
                        .on_action_complete(Some(&action), ActionResolution::VoteAttached(vote.passed));
                    bill.add_vote(vote);
                }
                None => progress.on_action_complete(Some(&action), ActionResolution::NoVote),
            }
        }

        progress.on_bill_complete(&bill.bill_id, true);
        Ok(bill)
    }

    /// Decide the vote for one action, if any
    async fn reconcile_action(
        &self,
        bill: &Bill,
        row: &ActionRow,
        action: &Action,
    ) -> Result<Option<Vote>, ReconcileError> {
        let chamber = action.actor.chamber().unwrap_or(bill.chamber);
        let context = VoteContext::new(chamber, action.description.clone(), action.date);

        let candidate = match row.vote_source() {
            Some(source) => self.authoritative_vote(bill, &source, &context).await?,
            None => None,
        };

        let guess = if candidate.as_ref().is_some_and(|v| v.passed.is_determined()) {
            None
        } else {
            guess_outcome(&action.description, &row.inline_yes(), &row.inline_no())?
        };

        Ok(merge_outcome(candidate, guess, &context))
    }

    /// Fetch and parse the linked vote document.
    ///
    /// `Ok(None)` covers every recoverable way of not having a document.
    async fn authoritative_vote(
        &self,
        bill: &Bill,
        source: &VoteSourceRef,
        context: &VoteContext,
    ) -> Result<Option<Vote>, ReconcileError> {
        let url = resolve_vote_url(source, bill, &self.config).map_err(ReconcileError::Fetch)?;

        let document = match self.fetcher.fetch(&url).await {
            Ok(document) => document,
            Err(e) if e.is_not_found() => {
                warn!("{}: {}", bill.bill_id, e);
                return Ok(None);
            }
            Err(e) => return Err(ReconcileError::Fetch(e)),
        };

        let parsed = match detect_format(&document.body) {
            DocumentKind::TabularHtmlLike => {
                let tables = self.extractor.extract_tables(&document.body);
                parse_tabular_vote(&document.body, &tables, context.chamber, &context.motion)
            }
            DocumentKind::PlainTextTally => {
                parse_text_tally(&document.body, context.chamber, &context.motion)
                    .map(|vote| vote.with_date(context.date))
            }
            DocumentKind::NoVoteRecords => {
                debug!("{}: no vote records at {}", bill.bill_id, url);
                return Ok(None);
            }
            DocumentKind::Unrecognized => {
                warn!("{}: unknown vote format at {}", bill.bill_id, url);
                return Ok(None);
            }
        };

        match parsed {
            Ok(mut vote) => {
                if !vote.roster_matches_counts() {
                    debug!(
                        "{}: roster disagrees with counts {} at {}",
                        bill.bill_id,
                        vote.count_summary(),
                        url
                    );
                }
                vote.add_source(url);
                Ok(Some(vote))
            }
            Err(e) => {
                warn!("{}: unreadable vote document at {}: {}", bill.bill_id, url, e);
                Ok(None)
            }
        }
    }
}

/// Turn a vote link into an absolute URL.
///
/// Relative links are joined onto the bill's first source on the laws host,
/// or onto the configured fallback base.
pub fn resolve_vote_url(
    source: &VoteSourceRef,
    bill: &Bill,
    config: &ReconcileConfig,
) -> Result<String, FetchError> {
    if source.is_absolute {
        return Ok(source.raw_url.clone());
    }

    let base = match bill.source_on_host(&config.laws_host) {
        Some(url) => Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{}: {}", url, e)))?,
        None => config.fallback_base_url.clone().ok_or_else(|| {
            FetchError::InvalidUrl(format!("no base URL for relative link {}", source.raw_url))
        })?,
    };

    base.join(&source.raw_url)
        .map(String::from)
        .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", source.raw_url, e)))
}
