// src/data_input/params.rs

use crate::constants::CLI_PARAM_COUNT;
use crate::error::{FunctionPlotError, Result};

/// Coefficients (a, b, c) of the sampled function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// The six scalar inputs of a run: sampling domain and function shape.
///
/// Only the step is constrained (strictly positive, checked by
/// [`ParameterSet::validate`]); `xmin > xmax` is allowed and yields an
/// empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterSet {
    pub xmin: f64,
    pub step: f64,
    pub xmax: f64,
    pub coefficients: Coefficients,
}

impl ParameterSet {
    /// Builds a parameter set from values in canonical order
    /// `[xmin, step, xmax, a, b, c]`.
    pub fn from_ordered(values: [f64; CLI_PARAM_COUNT]) -> Self {
        let [xmin, step, xmax, a, b, c] = values;
        Self {
            xmin,
            step,
            xmax,
            coefficients: Coefficients { a, b, c },
        }
    }

    /// Returns the values in canonical order `[xmin, step, xmax, a, b, c]`.
    pub fn to_ordered(&self) -> [f64; CLI_PARAM_COUNT] {
        let Coefficients { a, b, c } = self.coefficients;
        [self.xmin, self.step, self.xmax, a, b, c]
    }

    /// Fails with `InvalidStep` unless the step is strictly positive.
    /// NaN is rejected too.
    pub fn validate(&self) -> Result<()> {
        if self.step > 0.0 {
            Ok(())
        } else {
            Err(FunctionPlotError::InvalidStep { step: self.step })
        }
    }
}
