//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - loads and normalizes the stats file
//! - computes trend lines
//! - renders the chart / prints reports
//! - writes optional exports

use clap::Parser;

use crate::cli::{Command, RenderArgs, SmoothArgs, SummaryArgs};
use crate::domain::ChartOptions;
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `trafficchart` binary.
pub fn run() -> Result<(), AppError> {
    // We want `trafficchart stats.csv -o out.svg` to behave like
    // `trafficchart render stats.csv -o out.svg`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of
    // the argv list before parsing. This preserves a clean clap structure
    // while retaining the short invocation.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Render(args) => handle_render(args),
        Command::Smooth(args) => handle_smooth(args),
        Command::Summary(args) => handle_summary(args),
    }
}

fn handle_render(args: RenderArgs) -> Result<(), AppError> {
    let options = chart_options_from_args(&args);
    let run = pipeline::run(&args.input, &options)?;

    let spec = crate::chart::build_chart_spec(&run.ingest, &run.trends, &options)?;
    crate::chart::render_svg(&args.output, &spec, &options)?;

    // Ingest problems are warnings here: the chart is still produced from the
    // usable rows, but the user should know what was skipped.
    if !run.ingest.row_errors.is_empty() {
        eprint!("{}", crate::report::format_row_errors(&run.ingest.row_errors));
    }

    println!(
        "Wrote {} ({} series, {} days, smoothing: {})",
        args.output.display(),
        spec.series.len(),
        run.ingest.stats.n_days,
        options.smoothing.display_name()
    );
    Ok(())
}

fn handle_smooth(args: SmoothArgs) -> Result<(), AppError> {
    let options = ChartOptions {
        smoothing: args.smoothing.smoothing,
        radius: args.smoothing.radius,
        window: args.smoothing.window,
        ..ChartOptions::default()
    };
    let run = pipeline::run(&args.input, &options)?;

    match &args.export {
        Some(path) => crate::io::export::write_trends_csv(path, &run.trends)?,
        None => print!("{}", crate::io::export::format_trends_csv(&run.trends)?),
    }
    Ok(())
}

fn handle_summary(args: SummaryArgs) -> Result<(), AppError> {
    let ingest = crate::io::ingest::load_series(&args.input)?;
    println!("{}", crate::report::format_summary(&ingest));
    Ok(())
}

/// Build the render configuration from CLI flags.
pub fn chart_options_from_args(args: &RenderArgs) -> ChartOptions {
    ChartOptions {
        title: args.title.clone(),
        width: args.width,
        height: args.height,
        smoothing: args.smoothing.smoothing,
        radius: args.smoothing.radius,
        window: args.smoothing.window,
        y_cap: args.y_cap,
        legend: !args.no_legend,
        grid: !args.no_grid,
    }
}

/// Rewrite argv so a bare invocation defaults to `render`.
///
/// Rules:
/// - `trafficchart stats.csv ...`       -> `trafficchart render stats.csv ...`
/// - `trafficchart -o x.svg ...`        -> `trafficchart render -o x.svg ...`
/// - `trafficchart --help/--version`    -> unchanged (top-level help/version)
/// - explicit subcommands               -> unchanged
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        return argv;
    };

    let is_top_level_help_or_version =
        matches!(arg1.as_str(), "-h" | "--help" | "-V" | "--version" | "help");
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "render" | "smooth" | "summary");
    if is_subcommand {
        return argv;
    }

    // Anything else (an input path or a render flag) means implicit `render`.
    argv.insert(1, "render".to_string());
    argv
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn bare_input_path_defaults_to_render() {
        let out = rewrite_args(args(&["trafficchart", "stats.csv"]));
        assert_eq!(out, args(&["trafficchart", "render", "stats.csv"]));
    }

    #[test]
    fn explicit_subcommands_are_untouched() {
        let out = rewrite_args(args(&["trafficchart", "summary", "stats.csv"]));
        assert_eq!(out, args(&["trafficchart", "summary", "stats.csv"]));
    }

    #[test]
    fn help_and_version_are_untouched() {
        for flag in ["-h", "--help", "-V", "--version", "help"] {
            let out = rewrite_args(args(&["trafficchart", flag]));
            assert_eq!(out, args(&["trafficchart", flag]));
        }
    }

    #[test]
    fn leading_flag_defaults_to_render() {
        let out = rewrite_args(args(&["trafficchart", "--radius", "10", "stats.csv"]));
        assert_eq!(
            out,
            args(&["trafficchart", "render", "--radius", "10", "stats.csv"])
        );
    }
}
