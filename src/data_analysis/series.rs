// src/data_analysis/series.rs

use crate::data_analysis::function_eval::evaluate;
use crate::data_input::params::ParameterSet;
use crate::error::{FunctionPlotError, Result};
use crate::types::PlotPoints;

/// Index-aligned x and y samples produced by one run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
}

impl Series {
    /// Builds a series from two sequences of equal length.
    pub fn from_parts(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.len() != y.len() {
            return Err(FunctionPlotError::MismatchedSeries {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over `(x, y)` pairs in generation order.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Pairs in the form plotters line series take.
    pub fn points(&self) -> PlotPoints {
        self.iter().collect()
    }

    /// Number of samples whose y value is infinite or NaN.
    pub fn non_finite_count(&self) -> usize {
        self.y.iter().filter(|y| !y.is_finite()).count()
    }
}

/// Samples the function from `xmin` up to and including `xmax`.
///
/// x advances by repeated addition of the step, so rounding drift
/// accumulates exactly as a running sum would; the last sample is the
/// last running sum that is still `<= xmax`. `xmin > xmax` gives an empty
/// series. The step is validated before anything is sampled.
pub fn generate_series(params: &ParameterSet) -> Result<Series> {
    params.validate()?;

    let mut x_values = Vec::new();
    let mut y_values = Vec::new();
    let mut x = params.xmin;
    while x <= params.xmax {
        x_values.push(x);
        y_values.push(evaluate(x, &params.coefficients));
        x += params.step;
    }

    log::debug!(
        "Sampled {} points over [{}, {}] with step {}",
        x_values.len(),
        params.xmin,
        params.xmax,
        params.step
    );
    Ok(Series {
        x: x_values,
        y: y_values,
    })
}
