// src/data_output/mod.rs

pub mod results_writer;

// src/data_output/mod.rs
