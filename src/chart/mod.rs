//! Chart layout and SVG rendering.
//!
//! - `spec`: resolve ingested series + trends into concrete plot bounds
//! - `svg`: draw the resolved spec with Plotters' SVG backend

pub mod spec;
pub mod svg;

pub use spec::*;
pub use svg::*;
