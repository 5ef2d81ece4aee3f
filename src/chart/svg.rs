//! Plotters-powered SVG chart rendering.
//!
//! The layout mirrors the historical traffic reports: per-series translucent
//! area fill + outline, a heavier trend line per series in the same hue, a
//! mesh grid with month labels on the time axis, and an optional legend box
//! in the upper-left corner.
//!
//! We use the SVG backend so output needs no native font/raster dependencies
//! and embeds cleanly in web pages.

use std::path::Path;

use chrono::NaiveDate;
use plotters::prelude::*;

use crate::chart::spec::ChartSpec;
use crate::domain::ChartOptions;
use crate::error::AppError;

/// Series palette, cycled by series index.
const PALETTE: [RGBColor; 6] = [
    RGBColor(31, 119, 180),  // blue
    RGBColor(255, 127, 14),  // orange
    RGBColor(44, 160, 44),   // green
    RGBColor(214, 39, 40),   // red
    RGBColor(148, 103, 189), // purple
    RGBColor(140, 86, 75),   // brown
];

/// Color assigned to the series (and its trend line) at `index`.
pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Render the chart spec to an SVG file.
pub fn render_svg(path: &Path, spec: &ChartSpec, options: &ChartOptions) -> Result<(), AppError> {
    draw(path, spec, options)
        .map_err(|e| AppError::new(3, format!("Failed to render chart '{}': {e}", path.display())))
}

fn draw(
    path: &Path,
    spec: &ChartSpec,
    options: &ChartOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = SVGBackend::new(path, (options.width, options.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut builder = ChartBuilder::on(&root);
    builder
        .margin(10)
        .x_label_area_size(24)
        .y_label_area_size(48);
    if let Some(title) = &options.title {
        builder.caption(title, ("sans-serif", 18));
    }
    let mut chart = builder.build_cartesian_2d(spec.first_day..spec.last_day, 0.0..spec.y_max)?;

    let mut mesh = chart.configure_mesh();
    mesh.x_labels(8)
        .y_labels(6)
        .x_label_formatter(&|d: &NaiveDate| d.format("%b %Y").to_string())
        .label_style(("sans-serif", 11));
    if !options.grid {
        mesh.disable_x_mesh().disable_y_mesh();
    }
    mesh.draw()?;

    // Areas + outlines first, trend lines on top.
    for (index, series) in spec.series.iter().enumerate() {
        let color = series_color(index);
        let points = series
            .samples
            .iter()
            .filter(|s| s.value.is_finite())
            .map(|s| (s.day, s.value.min(spec.y_max)));

        let anno = chart.draw_series(
            AreaSeries::new(points, 0.0, color.mix(0.2)).border_style(color.stroke_width(1)),
        )?;
        if options.legend {
            anno.label(series.name.clone()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled())
            });
        }
    }

    for (index, trend) in spec.trends.iter().enumerate() {
        let color = series_color(index);
        let points = trend
            .samples
            .iter()
            .filter(|s| s.value.is_finite())
            .map(|s| (s.day, s.value.min(spec.y_max)));

        chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?;
    }

    if options.legend {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.85))
            .border_style(BLACK)
            .label_font(("sans-serif", 12))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::build_chart_spec;
    use crate::io::ingest::read_series_csv;

    #[test]
    fn palette_cycles() {
        assert_eq!(series_color(0), series_color(PALETTE.len()));
        assert_ne!(series_color(0), series_color(1));
    }

    #[test]
    fn renders_svg_file() {
        let csv = "day,hits,views\n\
                   2024-01-01,10,1\n\
                   2024-01-02,20,2\n\
                   2024-01-03,15,3\n";
        let ingest = read_series_csv(csv.as_bytes()).unwrap();
        let options = ChartOptions {
            title: Some("Traffic".to_string()),
            ..ChartOptions::default()
        };
        let trends = vec![
            crate::math::triangular_trend("hits", &ingest.series[0].samples, 1),
            crate::math::triangular_trend("views", &ingest.series[1].samples, 1),
        ];
        let spec = build_chart_spec(&ingest, &trends, &options).unwrap();

        let path = std::env::temp_dir().join("traffic_charts_render_test.svg");
        render_svg(&path, &spec, &options).unwrap();

        let svg = std::fs::read_to_string(&path).unwrap();
        assert!(svg.contains("<svg"));
        let _ = std::fs::remove_file(&path);
    }
}
