// src/lib.rs - Library interface for internal module access

pub mod chart_kinds;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
pub mod report;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
