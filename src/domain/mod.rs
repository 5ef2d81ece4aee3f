//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the sample/series shapes produced by ingest (`Sample`, `Series`)
//! - trend-line output (`TrendSeries`)
//! - the smoothing strategy selector (`SmoothingKind`)
//! - the render configuration (`ChartOptions`)

pub mod types;

pub use types::*;
