//! Progress reporting while bills are reconciled

pub mod reporter;
