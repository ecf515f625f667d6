// src/plot_functions/mod.rs

pub mod plot_histogram;
pub mod plot_line;
pub mod plot_scatter;

// src/plot_functions/mod.rs
