// src/constants.rs

use plotters::style::colors::full_palette::{BLUE_700, RED};
use plotters::style::RGBColor;

// Default file names, resolved against the base directory.
pub const DEFAULT_CONFIG_FILE: &str = "config.yml";
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";
pub const DEFAULT_PLOT_FILE: &str = "function_plot.png";

// Number of positional arguments that bypasses the config file.
pub const CLI_PARAM_COUNT: usize = 6;

// Parameter names, in canonical order: xmin, step, xmax, a, b, c.
pub const PARAM_KEYS: [&str; CLI_PARAM_COUNT] = ["xmin", "step", "xmax", "a", "b", "c"];

// Results file layout.
pub const RESULTS_DELIMITER: u8 = b' ';

// Plot labels.
pub const PLOT_TITLE: &str = "Function Plot";
pub const X_AXIS_LABEL: &str = "X";
pub const Y_AXIS_LABEL: &str = "Y";

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1280;
pub const PLOT_HEIGHT: u32 = 720;

// Fraction of the data span added on each side of an axis range.
pub const RANGE_PADDING_RATIO: f64 = 0.15;
// Padding used when the data span is (almost) zero.
pub const RANGE_MIN_PADDING: f64 = 0.5;
pub const RANGE_DEGENERATE_SPAN: f64 = 1e-6;

// --- Plot Color Assignments ---
pub const COLOR_FUNCTION_LINE: &RGBColor = &BLUE_700;
pub const COLOR_MESSAGE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Font sizes
pub const FONT_SIZE_CHART_TITLE: i32 = 28;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 22;

// Tick label counts
pub const X_LABEL_COUNT: usize = 20;
pub const Y_LABEL_COUNT: usize = 10;

// src/constants.rs
