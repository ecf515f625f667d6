// src/data_input/mod.rs

pub mod measurement_set;
pub mod validation;

// src/data_input/mod.rs
