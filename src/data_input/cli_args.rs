// src/data_input/cli_args.rs

use crate::constants::CLI_PARAM_COUNT;
use crate::data_input::params::ParameterSet;
use crate::error::{FunctionPlotError, Result};

/// Parses the positional command-line values into a parameter set.
///
/// Returns `Ok(None)` when the argument count is not exactly six; the
/// caller then falls back to the configuration file. With six arguments,
/// every one must parse as a float (surrounding whitespace is ignored,
/// `inf`/`nan` are accepted), otherwise `InvalidArgument` names the first
/// offending value.
pub fn parse_positional_params<S: AsRef<str>>(args: &[S]) -> Result<Option<ParameterSet>> {
    if args.len() != CLI_PARAM_COUNT {
        return Ok(None);
    }

    let mut values = [0.0; CLI_PARAM_COUNT];
    for (slot, arg) in values.iter_mut().zip(args) {
        let raw = arg.as_ref();
        *slot = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| FunctionPlotError::InvalidArgument {
                value: raw.to_string(),
            })?;
    }

    Ok(Some(ParameterSet::from_ordered(values)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_numeric_args() {
        let params = parse_positional_params(&["0", "1", "5", "2", "1", "0"])
            .unwrap()
            .unwrap();
        assert_eq!(params.to_ordered(), [0.0, 1.0, 5.0, 2.0, 1.0, 0.0]);
    }

    #[test]
    fn test_negative_and_exponent_forms() {
        let params = parse_positional_params(&["-2.5", "1e-1", " 3 ", "-1", "0.5", "inf"])
            .unwrap()
            .unwrap();
        assert_eq!(params.xmin, -2.5);
        assert_eq!(params.step, 0.1);
        assert_eq!(params.xmax, 3.0);
        assert!(params.coefficients.c.is_infinite());
    }

    #[test]
    fn test_other_counts_defer_to_config() {
        let empty: [&str; 0] = [];
        assert!(parse_positional_params(&empty).unwrap().is_none());
        assert!(parse_positional_params(&["1", "2", "3"]).unwrap().is_none());
        assert!(parse_positional_params(&["1"; 7]).unwrap().is_none());
    }

    #[test]
    fn test_non_numeric_argument() {
        let err = parse_positional_params(&["0", "1", "five", "2", "1", "0"]).unwrap_err();
        match err {
            FunctionPlotError::InvalidArgument { value } => assert_eq!(value, "five"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
