// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, SeriesLabelPosition};
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, PathElement, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, IntoFont, RGBColor};

use std::ops::Range;
use std::path::Path;

use crate::constants::{
    COLOR_MESSAGE, FONT_SIZE_MESSAGE, LINE_WIDTH_LEGEND, PLOT_HEIGHT, PLOT_WIDTH,
    RANGE_DEGENERATE_SPAN, RANGE_MIN_PADDING, RANGE_PADDING_RATIO, X_LABEL_COUNT, Y_LABEL_COUNT,
};
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MESSAGE,
};
use crate::types::{PlotPoints, PlotResult};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < RANGE_DEGENERATE_SPAN {
        RANGE_MIN_PADDING
    } else {
        range * RANGE_PADDING_RATIO
    };
    (min - padding, max + padding)
}

/// Bounding box `(x_min, x_max, y_min, y_max)` of the points whose
/// coordinates are both finite. `None` if there are no such points.
pub fn finite_bounds(points: &[(f64, f64)]) -> Option<(f64, f64, f64, f64)> {
    points
        .iter()
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc, &(x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x_min, x_max, y_min, y_max)) => {
                Some((x_min.min(x), x_max.max(x), y_min.min(y), y_max.max(y)))
            }
        })
}

/// Splits a polyline into runs of consecutive finite points.
/// A non-finite sample ends the current run; it is never drawn.
pub fn split_finite_segments(points: &[(f64, f64)]) -> Vec<PlotPoints> {
    let mut segments = Vec::new();
    let mut current: PlotPoints = Vec::new();
    for &(x, y) in points {
        if x.is_finite() && y.is_finite() {
            current.push((x, y));
        } else if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

/// Tick label text: "k" and "M" notation for large magnitudes, two
/// decimals for small fractional values, integers otherwise.
pub fn format_axis_value(v: f64) -> String {
    if v.abs() >= 1_000_000.0 {
        format!("{:.1}M", v / 1_000_000.0)
    } else if v.abs() >= 1000.0 {
        format!("{:.0}k", v / 1000.0)
    } else if v.abs() < 10.0 && v.fract() != 0.0 {
        format!("{v:.2}")
    } else {
        format!("{v:.0}")
    }
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_type: &str,
    reason: &str,
) -> PlotResult {
    // Approximate character width relative to font size
    const CHAR_WIDTH_RATIO: f32 = 0.6;

    let (width, height) = area.dim_in_pixel();
    let message = format!("{plot_type} Data Unavailable: {reason}");
    let estimated_text_width =
        (message.len() as f32 * FONT_SIZE_MESSAGE as f32 * CHAR_WIDTH_RATIO) as i32;

    let center_x = width as i32 / 2 - estimated_text_width / 2;
    let center_y = height as i32 / 2 - FONT_SIZE_MESSAGE / 2;

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(COLOR_MESSAGE);
    area.draw(&Text::new(message, (center_x, center_y), text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: PlotPoints,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Draws one chart from a PlotConfig. Every series is split at non-finite
/// samples; the legend entry is attached to the first drawn segment only.
fn draw_chart_with_config(
    area: &DrawingArea<BitMapBackend, Shift>,
    plot_config: &PlotConfig,
) -> PlotResult {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x| format_axis_value(*x))
        .y_label_formatter(&|y| format_axis_value(*y))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;

    for s in &plot_config.series {
        let mut labelled = s.label.is_empty();

        for segment in split_finite_segments(&s.data) {
            // An isolated finite sample would be invisible as a line.
            let annotation = if segment.len() == 1 {
                chart.draw_series(std::iter::once(Circle::new(
                    segment[0],
                    s.stroke_width + 1,
                    s.color.filled(),
                )))?
            } else {
                chart.draw_series(LineSeries::new(
                    segment,
                    s.color.stroke_width(s.stroke_width),
                ))?
            };

            if !labelled {
                let color = s.color;
                annotation.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH_LEGEND))
                });
                labelled = true;
                legend_series_count += 1;
            }
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }

    Ok(())
}

/// A range plotters can lay out: finite ends, `end > start`, and a span
/// that does not overflow.
pub fn is_drawable_range(range: &Range<f64>) -> bool {
    range.start.is_finite()
        && range.end.is_finite()
        && range.end > range.start
        && (range.end - range.start).is_finite()
}

/// Why `plot_config` cannot be drawn as a chart, or `None` if it can.
pub fn unavailable_reason(plot_config: &PlotConfig) -> Option<&'static str> {
    let has_data = plot_config
        .series
        .iter()
        .any(|s| s.data.iter().any(|(x, y)| x.is_finite() && y.is_finite()));
    if !has_data {
        Some("No finite data points")
    } else if !is_drawable_range(&plot_config.x_range) || !is_drawable_range(&plot_config.y_range) {
        Some("Invalid ranges")
    } else {
        None
    }
}

/// Creates a single-chart PNG at `output_path`.
///
/// `plot_config` of `None`, a config without any finite sample, or a range
/// that is degenerate or overflows produce a placeholder message instead of
/// a chart.
/// Returns `true` if a chart was drawn.
pub fn draw_single_plot(
    output_path: &Path,
    plot_type_name: &str,
    plot_config: Option<PlotConfig>,
) -> Result<bool, Box<dyn std::error::Error>> {
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;

    let plotted = match plot_config {
        Some(config) => match unavailable_reason(&config) {
            None => {
                draw_chart_with_config(&root_area, &config)?;
                true
            }
            Some(reason) => {
                draw_unavailable_message(&root_area, plot_type_name, reason)?;
                false
            }
        },
        None => {
            draw_unavailable_message(&root_area, plot_type_name, "No samples in domain")?;
            false
        }
    };

    root_area.present()?;
    Ok(plotted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (lo, hi) = calculate_range(0.0, 10.0);
        assert!((lo + 1.5).abs() < 1e-12);
        assert!((hi - 11.5).abs() < 1e-12);
        // Order of arguments does not matter.
        assert_eq!(calculate_range(10.0, 0.0), (lo, hi));
    }

    #[test]
    fn test_calculate_range_degenerate_span() {
        assert_eq!(calculate_range(2.0, 2.0), (1.5, 2.5));
    }

    fn config_with(data: PlotPoints, x_range: Range<f64>, y_range: Range<f64>) -> PlotConfig {
        PlotConfig {
            title: "Test".to_string(),
            x_range,
            y_range,
            series: vec![PlotSeries {
                data,
                label: String::new(),
                color: BLACK,
                stroke_width: 1,
            }],
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
        }
    }

    #[test]
    fn test_overflowing_span_is_not_drawable() {
        let (lo, hi) = calculate_range(-1.3e308, 1.3e308);
        assert!(!is_drawable_range(&(lo..hi)));
        // Finite ends whose difference still overflows.
        assert!(!is_drawable_range(&(-1.0e308..1.0e308)));
        assert!(is_drawable_range(&(-1.0e307..1.0e307)));
    }

    #[test]
    fn test_is_drawable_range_rejects_empty_and_non_finite() {
        assert!(is_drawable_range(&(0.0..1.0)));
        assert!(!is_drawable_range(&(1.0..1.0)));
        assert!(!is_drawable_range(&(2.0..1.0)));
        assert!(!is_drawable_range(&(f64::NEG_INFINITY..0.0)));
        assert!(!is_drawable_range(&(0.0..f64::NAN)));
    }

    #[test]
    fn test_unavailable_reason() {
        let points = vec![(-1.0, -1.3e308), (1.0, 1.3e308)];
        let (lo, hi) = calculate_range(-1.3e308, 1.3e308);
        let huge = config_with(points, -1.0..1.0, lo..hi);
        assert_eq!(unavailable_reason(&huge), Some("Invalid ranges"));

        let no_data = config_with(vec![(0.0, f64::NAN)], 0.0..1.0, 0.0..1.0);
        assert_eq!(unavailable_reason(&no_data), Some("No finite data points"));

        let ok = config_with(vec![(0.0, 1.0), (1.0, 2.0)], 0.0..1.0, 0.85..2.15);
        assert_eq!(unavailable_reason(&ok), None);
    }

    #[test]
    fn test_finite_bounds_skips_non_finite() {
        let points = [(0.0, f64::INFINITY), (1.0, -2.0), (2.0, f64::NAN), (3.0, 4.0)];
        assert_eq!(finite_bounds(&points), Some((1.0, 3.0, -2.0, 4.0)));
        assert_eq!(finite_bounds(&[(0.0, f64::NAN)]), None);
        assert_eq!(finite_bounds(&[]), None);
    }

    #[test]
    fn test_split_finite_segments() {
        let points = [
            (0.0, 1.0),
            (1.0, 2.0),
            (2.0, f64::INFINITY),
            (3.0, f64::NEG_INFINITY),
            (4.0, 5.0),
            (5.0, f64::NAN),
        ];
        let segments = split_finite_segments(&points);
        assert_eq!(segments, vec![vec![(0.0, 1.0), (1.0, 2.0)], vec![(4.0, 5.0)]]);
        assert!(split_finite_segments(&[(0.0, f64::NAN)]).is_empty());
    }
}
