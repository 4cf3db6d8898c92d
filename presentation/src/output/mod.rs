//! Output formatting for reconciled bills

pub mod console;
