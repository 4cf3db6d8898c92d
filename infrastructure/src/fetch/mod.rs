//! Vote document fetchers
//!
//! Adapters implementing [`VoteDocumentFetcher`](statehouse_application::VoteDocumentFetcher):
//!
//! - [`HttpVoteFetcher`]: fetches from the legislature's servers (`http-fetch` feature)
//! - [`LocalVoteFetcher`]: reads previously saved documents from a directory

#[cfg(feature = "http-fetch")]
mod http;
mod local;

#[cfg(feature = "http-fetch")]
pub use http::HttpVoteFetcher;
pub use local::{LocalVoteFetcher, document_file_name};
