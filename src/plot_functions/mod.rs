// src/plot_functions/mod.rs

pub mod plot_function;

// src/plot_functions/mod.rs
