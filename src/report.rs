// src/report.rs

use std::error::Error;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::chart_kinds::{output_filename, ChartKind};
use crate::data_input::measurement_set::MeasurementSet;
use crate::plot_functions::plot_histogram::plot_histogram;
use crate::plot_functions::plot_line::plot_line;
use crate::plot_functions::plot_scatter::plot_scatter;

/// Paths of the three charts written for one measurement set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlots {
    pub scatter: PathBuf,
    pub histogram: PathBuf,
    pub line_plot: PathBuf,
}

/// Shortest round-trip rendering of a real value, with exponents written as
/// `e+16` / `e-07` (explicit sign, at least two digits).
///
/// `{:?}` already switches to exponent form below 1e-4 and from 1e16 upwards,
/// so only the exponent text needs rewriting.
pub fn format_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    let debug = format!("{value:?}");
    match debug.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => debug,
    }
}

fn format_real_list(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|&v| format_real(v)).collect();
    format!("[{}]", items.join(", "))
}

/// Echo of the raw input: label, then each sequence with its unit suffix.
pub fn echo_lines(measurements: &MeasurementSet) -> [String; 4] {
    [
        format!("Plant: {}", measurements.label),
        format!("Height data: {} cm", format_real_list(&measurements.heights)),
        format!("Leaf count data: {:?}", measurements.leaf_counts),
        format!("Dry weight data: {} g", format_real_list(&measurements.dry_weights)),
    ]
}

/// Confirmation listing the label and the three generated file names.
pub fn confirmation_lines(measurements: &MeasurementSet) -> [String; 4] {
    let label = &measurements.label;
    let [scatter, histogram, line_plot] =
        ChartKind::ALL.map(|kind| format!("{} saved as {}", kind.display_name(), output_filename(label, kind)));
    [format!("Generated plots for {label}:"), scatter, histogram, line_plot]
}

/// Writes the scatter, histogram and line charts into `output_dir`, in that order.
///
/// Existing files with the same names are overwritten. If a chart fails, the
/// ones already written are left in place.
pub fn generate_plots(
    measurements: &MeasurementSet,
    output_dir: &Path,
) -> Result<GeneratedPlots, Box<dyn Error>> {
    log::info!(
        "Generating plots for '{}' ({} observation periods) in '{}'",
        measurements.label,
        measurements.period_count(),
        output_dir.display()
    );

    let scatter = plot_scatter(measurements, output_dir)?;
    let histogram = plot_histogram(measurements, output_dir)?;
    let line_plot = plot_line(measurements, output_dir)?;

    Ok(GeneratedPlots {
        scatter,
        histogram,
        line_plot,
    })
}

/// Full report for a validated set: echo block, charts, confirmation block.
pub fn run_report<W: Write>(
    measurements: &MeasurementSet,
    output_dir: &Path,
    out: &mut W,
) -> Result<GeneratedPlots, Box<dyn Error>> {
    for line in echo_lines(measurements) {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    let plots = generate_plots(measurements, output_dir)?;

    for line in confirmation_lines(measurements) {
        writeln!(out, "{line}")?;
    }
    Ok(plots)
}
