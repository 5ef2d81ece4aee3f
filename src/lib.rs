//! `traffic-charts` library crate.
//!
//! The binary (`trafficchart`) is a thin wrapper around this library so that:
//!
//! - core logic (smoothing, ingest, chart layout) is testable without spawning
//!   processes
//! - modules are reusable (e.g., embedding the renderer in a report generator)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod chart;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
