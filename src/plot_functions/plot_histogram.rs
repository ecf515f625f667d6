// src/plot_functions/plot_histogram.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::chart_kinds::{output_filename, ChartKind};
use crate::constants::{COLOR_HISTOGRAM_BAR, COLOR_HISTOGRAM_EDGE, HISTOGRAM_BIN_COUNT};
use crate::data_analysis::histogram::histogram_counts;
use crate::data_input::measurement_set::MeasurementSet;
use crate::plot_framework::{draw_histogram_chart, draw_single_chart, ChartLabels, HistogramPlotConfig};

/// Generates the Dry Weight histogram: five equal-width bins over the observed range.
pub fn plot_histogram(
    measurements: &MeasurementSet,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(output_filename(&measurements.label, ChartKind::Histogram));

    let config = HistogramPlotConfig {
        labels: ChartLabels {
            title: format!("Histogram of Dry Weight for {}", measurements.label),
            x_label: "Dry Weight (g)".to_string(),
            y_label: "Frequency".to_string(),
        },
        bins: histogram_counts(&measurements.dry_weights, HISTOGRAM_BIN_COUNT)?,
        color: *COLOR_HISTOGRAM_BAR,
        edge_color: COLOR_HISTOGRAM_EDGE,
    };

    draw_single_chart(&output_file, ChartKind::Histogram.display_name(), |area| {
        draw_histogram_chart(area, &config)
    })?;
    Ok(output_file)
}

// src/plot_functions/plot_histogram.rs
