// src/error.rs

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can abort a run.
///
/// All variants are terminal: the binary reports the message and exits
/// with status 1. Nothing is retried.
#[derive(Error, Debug)]
pub enum FunctionPlotError {
    /// The configuration file does not exist.
    #[error("The file {} was not found.", path.display())]
    ConfigNotFound { path: PathBuf },

    /// The configuration file exists but is not a valid parameter document.
    #[error("Invalid YAML format in {} - {message}", path.display())]
    ConfigFormat { path: PathBuf, message: String },

    /// One or more required keys are absent from the configuration file.
    #[error("Parameters are missing in the YAML file {}: {}", path.display(), missing.join(", "))]
    ConfigIncomplete {
        path: PathBuf,
        missing: Vec<&'static str>,
    },

    /// A positional argument could not be parsed as a number.
    #[error("All arguments must be numbers (could not parse '{value}').")]
    InvalidArgument { value: String },

    #[error("Step must be positive (got {step}).")]
    InvalidStep { step: f64 },

    #[error("x and y sequences differ in length ({x_len} vs {y_len})")]
    MismatchedSeries { x_len: usize, y_len: usize },

    /// A results file line is not a pair of numbers.
    #[error("Malformed results line {line}: '{content}'")]
    MalformedResults { line: usize, content: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Results file error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    Plot(String),
}

pub type Result<T> = std::result::Result<T, FunctionPlotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_lists_every_missing_key() {
        let err = FunctionPlotError::ConfigIncomplete {
            path: PathBuf::from("config.yml"),
            missing: vec!["b", "c"],
        };
        let msg = err.to_string();
        assert!(msg.contains("config.yml"));
        assert!(msg.ends_with("b, c"));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = FunctionPlotError::InvalidArgument {
            value: "abc".to_string(),
        };
        assert!(err.to_string().starts_with("All arguments must be numbers"));
    }
}
