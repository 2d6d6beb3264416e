// src/types.rs
// Type aliases shared by the plotting code

use std::error::Error;

/// (x, y) pairs as consumed by plotters line series.
pub type PlotPoints = Vec<(f64, f64)>;

/// Result type of the low-level drawing helpers; plotters backend errors are boxed.
pub type PlotResult = Result<(), Box<dyn Error>>;
