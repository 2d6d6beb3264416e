// src/data_analysis/mod.rs

pub mod function_eval;
pub mod series;

// src/data_analysis/mod.rs
