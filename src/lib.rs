// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod data_output;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod types;

pub use data_analysis::series::{generate_series, Series};
pub use data_input::config_resolver::{ConfigResolver, ConfigSource};
pub use data_input::params::{Coefficients, ParameterSet};
pub use data_output::results_writer::ResultsWriter;
pub use error::{FunctionPlotError, Result};
pub use plot_functions::plot_function::FunctionPlotter;
