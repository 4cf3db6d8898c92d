//! Bill domain
//!
//! The [`Bill`](entities::Bill) is the container the reconciliation engine
//! appends to. It is created by the caller from a bill status page; this
//! crate only adds actions, votes, sponsors, and versions to it.

pub mod entities;
pub mod sponsor;
pub mod value_objects;
pub mod version;

pub use entities::{Action, Bill, BillVersion, Sponsor};
pub use sponsor::SponsorRow;
pub use value_objects::{ActionType, Actor, Chamber};
pub use version::{VersionIndex, VersionIndexEntry, VersionMatcher};
