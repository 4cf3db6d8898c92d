//! Bill input files handed over by the status-page scraper

mod bill_file;

pub use bill_file::{BillFile, InputError, load_bill_files};
