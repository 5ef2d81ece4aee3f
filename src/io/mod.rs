//! Input/output helpers.
//!
//! - CSV/JSON stats ingest + validation (`ingest`)
//! - smoothed-series CSV export (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;
