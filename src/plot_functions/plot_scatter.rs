// src/plot_functions/plot_scatter.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::chart_kinds::{output_filename, ChartKind};
use crate::constants::{COLOR_SCATTER_POINT, SCATTER_POINT_RADIUS};
use crate::data_analysis::bounds::ensure_finite;
use crate::data_input::measurement_set::MeasurementSet;
use crate::plot_framework::{draw_scatter_chart, draw_single_chart, ChartLabels, ScatterPlotConfig};

/// Generates the Height vs Leaf Count scatter plot, one point per observation period.
pub fn plot_scatter(
    measurements: &MeasurementSet,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(output_filename(&measurements.label, ChartKind::Scatter));

    ensure_finite("Height", &measurements.heights)?;

    let points: Vec<(f64, f64)> = measurements
        .heights
        .iter()
        .copied()
        .zip(measurements.leaf_counts_f64())
        .collect();

    let config = ScatterPlotConfig {
        labels: ChartLabels {
            title: format!("Height vs Leaf Count for {}", measurements.label),
            x_label: "Height (cm)".to_string(),
            y_label: "Leaf Count".to_string(),
        },
        points,
        color: *COLOR_SCATTER_POINT,
        point_radius: SCATTER_POINT_RADIUS,
    };

    draw_single_chart(&output_file, ChartKind::Scatter.display_name(), |area| {
        draw_scatter_chart(area, &config)
    })?;
    Ok(output_file)
}

// src/plot_functions/plot_scatter.rs
