//! Infrastructure layer for statehouse
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and bill input files.

pub mod config;
pub mod fetch;
pub mod html;
pub mod input;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileFetchConfig, FileOutputConfig,
};
#[cfg(feature = "http-fetch")]
pub use fetch::HttpVoteFetcher;
pub use fetch::LocalVoteFetcher;
pub use html::ScraperTableExtractor;
pub use input::{BillFile, InputError, load_bill_files};
