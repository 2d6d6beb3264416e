// src/plot_functions/plot_function.rs

use plotters::style::RGBColor;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_FUNCTION_LINE, LINE_WIDTH_PLOT, PLOT_TITLE, RANGE_DEGENERATE_SPAN, X_AXIS_LABEL,
    Y_AXIS_LABEL,
};
use crate::data_analysis::series::Series;
use crate::data_input::params::Coefficients;
use crate::error::{FunctionPlotError, Result};
use crate::plot_framework::{calculate_range, draw_single_plot, finite_bounds, PlotConfig, PlotSeries};

/// Legend text naming the sampled function and its coefficients.
pub fn legend_label(coefficients: &Coefficients) -> String {
    let Coefficients { a, b, c } = *coefficients;
    format!("y = a(e^(2bx+c) + 1)/(e^(2bx+c) - 1), a={a}, b={b}, c={c}")
}

/// Builds the chart description for a series, or `None` if nothing in it
/// can be drawn (no samples, or no finite sample).
pub fn build_plot_config(series: &Series, coefficients: &Coefficients) -> Option<PlotConfig> {
    let data = series.points();
    let (x_min, x_max, y_min, y_max) = finite_bounds(&data)?;

    // The x axis spans the sampled domain exactly unless it collapses to a point.
    let (x_lo, x_hi) = if (x_max - x_min).abs() < RANGE_DEGENERATE_SPAN {
        calculate_range(x_min, x_max)
    } else {
        (x_min, x_max)
    };
    let (y_lo, y_hi) = calculate_range(y_min, y_max);

    let color: RGBColor = *COLOR_FUNCTION_LINE;
    Some(PlotConfig {
        title: PLOT_TITLE.to_string(),
        x_range: x_lo..x_hi,
        y_range: y_lo..y_hi,
        series: vec![PlotSeries {
            data,
            label: legend_label(coefficients),
            color,
            stroke_width: LINE_WIDTH_PLOT,
        }],
        x_label: X_AXIS_LABEL.to_string(),
        y_label: Y_AXIS_LABEL.to_string(),
    })
}

/// Renders the "Function Plot" chart into a PNG file under an explicit base directory.
///
/// Rendering is to a file and returns immediately; nothing waits on a viewer.
#[derive(Debug, Clone)]
pub struct FunctionPlotter {
    base_dir: PathBuf,
    file_name: PathBuf,
}

impl FunctionPlotter {
    pub fn new(base_dir: impl Into<PathBuf>, file_name: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            file_name: file_name.into(),
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.base_dir.join(&self.file_name)
    }

    /// Draws the series and returns the path of the written image.
    pub fn plot(&self, series: &Series, coefficients: &Coefficients) -> Result<PathBuf> {
        let path = self.output_path();
        plot_function(series, coefficients, &path)?;
        Ok(path)
    }
}

/// Generates the Function Plot at `output_path`.
pub fn plot_function(series: &Series, coefficients: &Coefficients, output_path: &Path) -> Result<()> {
    let plot_type_name = PLOT_TITLE;

    let non_finite = series.non_finite_count();
    if non_finite > 0 {
        log::warn!(
            "  {non_finite} of {} samples are not finite (inf/NaN) and are left out of the plot.",
            series.len()
        );
    }

    let plotted = draw_single_plot(output_path, plot_type_name, build_plot_config(series, coefficients))
        .map_err(|e| FunctionPlotError::Plot(e.to_string()))?;

    if plotted {
        log::info!("  {plot_type_name} saved as '{}'.", output_path.display());
    } else {
        log::info!(
            "  {plot_type_name} saved as '{}' with a placeholder: no finite data to draw.",
            output_path.display()
        );
    }
    Ok(())
}
