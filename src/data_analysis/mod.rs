// src/data_analysis/mod.rs

pub mod bounds;
pub mod histogram;
pub mod periods;

// src/data_analysis/mod.rs
