// src/plot_functions/plot_line.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::chart_kinds::{output_filename, ChartKind};
use crate::constants::{COLOR_LINE_PLOT, LINE_MARKER_RADIUS, LINE_WIDTH_PLOT};
use crate::data_analysis::periods::week_labels;
use crate::data_analysis::bounds::ensure_finite;
use crate::data_input::measurement_set::MeasurementSet;
use crate::plot_framework::{
    draw_category_line_chart, draw_single_chart, CategoryLinePlotConfig, ChartLabels,
};

/// Generates the Height Over Time line plot with one marked point per week.
pub fn plot_line(
    measurements: &MeasurementSet,
    output_dir: &Path,
) -> Result<PathBuf, Box<dyn Error>> {
    let output_file = output_dir.join(output_filename(&measurements.label, ChartKind::LinePlot));

    ensure_finite("Height", &measurements.heights)?;

    let config = CategoryLinePlotConfig {
        labels: ChartLabels {
            title: format!("{} Height Over Time", measurements.label),
            x_label: "Week".to_string(),
            y_label: "Height (cm)".to_string(),
        },
        categories: week_labels(measurements.period_count()),
        values: measurements.heights.clone(),
        color: *COLOR_LINE_PLOT,
        stroke_width: LINE_WIDTH_PLOT,
        marker_radius: LINE_MARKER_RADIUS,
    };

    draw_single_chart(&output_file, ChartKind::LinePlot.display_name(), |area| {
        draw_category_line_chart(area, &config)
    })?;
    Ok(output_file)
}

// src/plot_functions/plot_line.rs
