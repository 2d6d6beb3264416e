// src/data_input/mod.rs

pub mod cli_args;
pub mod config_file;
pub mod config_resolver;
pub mod params;

// src/data_input/mod.rs
