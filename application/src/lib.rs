//! Application layer for statehouse
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_LAWS_HOST, ReconcileConfig};
pub use ports::{
    progress::{ActionResolution, NoProgress, ReconcileProgressNotifier},
    table_extractor::TableExtractor,
    vote_fetcher::{FetchError, VoteDocumentFetcher},
};
pub use use_cases::reconcile_bill::{
    BillReport, ReconcileBillInput, ReconcileBillUseCase, ReconcileError, resolve_vote_url,
};
