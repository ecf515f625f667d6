// src/constants.rs

// Import specific colors needed
use plotters::style::colors::full_palette::{BLUE, GREEN, RED};
use plotters::style::RGBColor;

// Plot dimensions.
pub const PLOT_WIDTH: u32 = 1000;
pub const PLOT_HEIGHT: u32 = 600;

// Margins and label areas around each chart, in pixels.
pub const CHART_MARGIN: u32 = 15;
pub const X_LABEL_AREA_SIZE: u32 = 50;
pub const Y_LABEL_AREA_SIZE: u32 = 60;

// Font sizes.
pub const FONT_SIZE_CHART_TITLE: i32 = 24;
pub const FONT_SIZE_AXIS_LABEL: i32 = 16;

// Grid line opacity over the white background.
pub const GRID_LINE_OPACITY: f64 = 0.3;

// Histogram of dry weights.
pub const HISTOGRAM_BIN_COUNT: usize = 5;
// Span used when every value is identical, half on each side.
pub const HISTOGRAM_DEGENERATE_SPAN: f64 = 1.0;

// --- Plot Color Assignments ---
pub const COLOR_SCATTER_POINT: &RGBColor = &BLUE;
pub const COLOR_HISTOGRAM_BAR: &RGBColor = &GREEN;
pub const COLOR_HISTOGRAM_EDGE: RGBColor = RGBColor(0, 0, 0);
pub const COLOR_LINE_PLOT: &RGBColor = &RED;

// Marker and line sizes.
pub const SCATTER_POINT_RADIUS: i32 = 5;
pub const LINE_MARKER_RADIUS: i32 = 5;
pub const LINE_WIDTH_PLOT: u32 = 2;
pub const LINE_WIDTH_BAR_EDGE: u32 = 1;

// Axis label counts.
pub const X_LABEL_COUNT: usize = 10;
pub const Y_LABEL_COUNT: usize = 10;

// src/constants.rs
