//! JSON bill input files
//!
//! A file holds either one bill object or an array of them:
//!
//! ```json
//! {
//!   "session": "2009",
//!   "chamber": "lower",
//!   "bill_id": "HB 2",
//!   "title": "General Appropriations Act",
//!   "sources": ["http://laws.leg.mt.gov/laws09/LAW0203W$BSRV.ActionQuery?..."],
//!   "actions": [
//!     {"leading_cell_text": "(H) Introduced", "date_text": "01/05/2009"}
//!   ],
//!   "sponsors": [
//!     {"kind": "Primary Sponsor", "last_name": "Smith", "first_name": "Jane"}
//!   ],
//!   "version_index": {"url": "http://data.opi.mt.gov/bills/2009/HB0002", "entries": []}
//! }
//! ```

use serde::{Deserialize, Serialize};
use statehouse_application::ReconcileBillInput;
use statehouse_domain::{ActionRow, Bill, Chamber, SponsorRow, VersionIndex};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors reading bill input files
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bill file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// One bill as described by an input file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillFile {
    pub session: String,
    pub chamber: Chamber,
    pub bill_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub actions: Vec<ActionRow>,
    #[serde(default)]
    pub sponsors: Vec<SponsorRow>,
    #[serde(default)]
    pub version_index: Option<VersionIndex>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BillFileContents {
    One(Box<BillFile>),
    Many(Vec<BillFile>),
}

impl BillFile {
    /// Parse the bills contained in a JSON document
    pub fn parse_all(json: &str) -> Result<Vec<BillFile>, serde_json::Error> {
        Ok(match serde_json::from_str(json)? {
            BillFileContents::One(bill) => vec![*bill],
            BillFileContents::Many(bills) => bills,
        })
    }

    /// Build the use case input, with the bill's sources recorded
    pub fn into_input(self) -> ReconcileBillInput {
        let mut bill = Bill::new(self.session, self.chamber, self.bill_id, self.title);
        for source in self.sources {
            bill.add_source(source);
        }

        let mut input = ReconcileBillInput::new(bill, self.actions).with_sponsors(self.sponsors);
        if let Some(index) = self.version_index {
            input = input.with_version_index(index);
        }
        input
    }
}

/// Read every bill from the given files, in argument order
pub fn load_bill_files(paths: &[PathBuf]) -> Result<Vec<ReconcileBillInput>, InputError> {
    let mut inputs = Vec::new();
    for path in paths {
        let bills = load_file(path)?;
        debug!("{}: {} bill(s)", path.display(), bills.len());
        inputs.extend(bills.into_iter().map(BillFile::into_input));
    }
    Ok(inputs)
}

fn load_file(path: &Path) -> Result<Vec<BillFile>, InputError> {
    let json = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    BillFile::parse_all(&json).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
