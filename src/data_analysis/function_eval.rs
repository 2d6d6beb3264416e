// src/data_analysis/function_eval.rs

use crate::data_input::params::Coefficients;

/// Evaluates `y = a * (e^(2bx+c) + 1) / (e^(2bx+c) - 1)`.
///
/// This is `a * coth(bx + c/2)` written out with a single exponential.
/// Plain IEEE-754 arithmetic throughout: where `2bx + c == 0` the
/// denominator is zero and the result is infinite (or NaN when `a == 0`),
/// and a large positive exponent overflows to `inf / inf = NaN`. Neither
/// case is special-cased.
pub fn evaluate(x: f64, coefficients: &Coefficients) -> f64 {
    let Coefficients { a, b, c } = *coefficients;
    let e = (2.0 * b * x + c).exp();
    a * ((e + 1.0) / (e - 1.0))
}
