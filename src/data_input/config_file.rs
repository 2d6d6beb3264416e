// src/data_input/config_file.rs

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::constants::{CLI_PARAM_COUNT, PARAM_KEYS};
use crate::data_input::params::ParameterSet;
use crate::error::{FunctionPlotError, Result};

/// Raw shape of the YAML document. Every key is optional here so that all
/// missing keys can be reported together; unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    xmin: Option<f64>,
    step: Option<f64>,
    xmax: Option<f64>,
    a: Option<f64>,
    b: Option<f64>,
    c: Option<f64>,
}

impl RawConfig {
    fn ordered(&self) -> [Option<f64>; CLI_PARAM_COUNT] {
        [self.xmin, self.step, self.xmax, self.a, self.b, self.c]
    }
}

/// Parses a YAML document into a parameter set.
///
/// `path` is only used for error messages.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<ParameterSet> {
    let raw: RawConfig =
        serde_yaml::from_str(contents).map_err(|e| FunctionPlotError::ConfigFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let ordered = raw.ordered();
    if let [Some(xmin), Some(step), Some(xmax), Some(a), Some(b), Some(c)] = ordered {
        return Ok(ParameterSet::from_ordered([xmin, step, xmax, a, b, c]));
    }

    let missing: Vec<&'static str> = PARAM_KEYS
        .iter()
        .zip(ordered)
        .filter(|(_, value)| value.is_none())
        .map(|(&key, _)| key)
        .collect();
    Err(FunctionPlotError::ConfigIncomplete {
        path: path.to_path_buf(),
        missing,
    })
}

/// Loads the YAML configuration file at `path`.
pub fn load_config_file(path: &Path) -> Result<ParameterSet> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => FunctionPlotError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => FunctionPlotError::Io(e),
    })?;
    log::debug!("Read {} bytes from '{}'", contents.len(), path.display());
    parse_config_str(&contents, path)
}
