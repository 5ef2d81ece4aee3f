//! Command-line parsing for the daily traffic chart tool.
//!
//! The goal of this module is to keep **argument parsing** and **command
//! dispatch** separate from the smoothing/rendering code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::SmoothingKind;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "trafficchart",
    version,
    about = "Render daily traffic statistics (hits, views, downloads) as SVG charts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render an SVG chart: per-series area + line + smoothed trend line.
    Render(RenderArgs),
    /// Print (or export) smoothed trend values as CSV.
    Smooth(SmoothArgs),
    /// Print dataset statistics and ingest diagnostics.
    Summary(SummaryArgs),
}

/// Smoothing options shared by `render` and `smooth`.
#[derive(Debug, Args, Clone)]
pub struct SmoothingOpts {
    /// Trend-line smoothing strategy.
    #[arg(long, value_enum, default_value_t = SmoothingKind::Triangular)]
    pub smoothing: SmoothingKind,

    /// Window half-width for triangular smoothing.
    #[arg(long, default_value_t = 21)]
    pub radius: usize,

    /// Window size for trailing SMA smoothing (0 = whole series).
    #[arg(long, default_value_t = 7)]
    pub window: usize,
}

/// Options for rendering a chart.
#[derive(Debug, Parser, Clone)]
pub struct RenderArgs {
    /// Stats file: CSV with a `day` column, or a JSON array of records.
    pub input: PathBuf,

    /// Output SVG path.
    #[arg(short = 'o', long, default_value = "chart.svg")]
    pub output: PathBuf,

    #[command(flatten)]
    pub smoothing: SmoothingOpts,

    /// Chart title.
    #[arg(long)]
    pub title: Option<String>,

    /// Chart width in SVG units.
    #[arg(long, default_value_t = 700)]
    pub width: u32,

    /// Chart height in SVG units.
    #[arg(long, default_value_t = 300)]
    pub height: u32,

    /// Clamp the y axis at this value (keeps one-day spikes from flattening
    /// the rest of the chart).
    #[arg(long = "y-cap")]
    pub y_cap: Option<f64>,

    /// Omit the legend box.
    #[arg(long)]
    pub no_legend: bool,

    /// Omit the mesh grid.
    #[arg(long)]
    pub no_grid: bool,
}

/// Options for printing/exporting smoothed values.
#[derive(Debug, Parser, Clone)]
pub struct SmoothArgs {
    /// Stats file: CSV with a `day` column, or a JSON array of records.
    pub input: PathBuf,

    #[command(flatten)]
    pub smoothing: SmoothingOpts,

    /// Write the CSV here instead of stdout.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for the dataset summary.
#[derive(Debug, Parser)]
pub struct SummaryArgs {
    /// Stats file: CSV with a `day` column, or a JSON array of records.
    pub input: PathBuf,
}
