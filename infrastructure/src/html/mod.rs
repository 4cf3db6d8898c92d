//! HTML vote document support

mod tables;

pub use tables::ScraperTableExtractor;
