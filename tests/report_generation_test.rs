// tests/report_generation_test.rs

use std::fs;
use std::path::Path;

use plant_growth_plots::data_analysis::periods::week_labels;
use plant_growth_plots::data_input::measurement_set::MeasurementSet;
use plant_growth_plots::data_input::validation::validate;
use plant_growth_plots::report::{generate_plots, run_report};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

fn assert_png(path: &Path) {
    let bytes = fs::read(path).unwrap();
    assert!(bytes.len() > PNG_SIGNATURE.len(), "{} is empty", path.display());
    assert_eq!(bytes[..8], PNG_SIGNATURE, "{} is not a PNG", path.display());
}

#[test]
fn generates_three_png_files_named_after_label() {
    let dir = tempfile::tempdir().unwrap();
    let set = validate(MeasurementSet::new(
        "Tomato",
        vec![10.0, 12.5],
        vec![3, 4],
        vec![1.2, 1.5],
    ))
    .unwrap();

    let plots = generate_plots(&set, dir.path()).unwrap();

    assert_eq!(plots.scatter, dir.path().join("Tomato_scatter.png"));
    assert_eq!(plots.histogram, dir.path().join("Tomato_histogram.png"));
    assert_eq!(plots.line_plot, dir.path().join("Tomato_line_plot.png"));
    for path in [&plots.scatter, &plots.histogram, &plots.line_plot] {
        assert_png(path);
    }
    assert_eq!(week_labels(set.period_count()), ["Week 1", "Week 2"]);
}

#[test]
fn report_writes_echo_then_confirmation() {
    let dir = tempfile::tempdir().unwrap();
    let set = validate(MeasurementSet::new(
        "Sunflower",
        vec![4.0, 9.5, 17.25, 30.0],
        vec![2, 4, 7, 11],
        vec![0.4, 0.9, 1.7, 3.2],
    ))
    .unwrap();

    let mut out = Vec::new();
    run_report(&set, dir.path(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "Plant: Sunflower");
    assert_eq!(lines[1], "Height data: [4.0, 9.5, 17.25, 30.0] cm");
    assert_eq!(lines[2], "Leaf count data: [2, 4, 7, 11]");
    assert_eq!(lines[3], "Dry weight data: [0.4, 0.9, 1.7, 3.2] g");
    assert_eq!(lines[4], "Generated plots for Sunflower:");
    assert_eq!(lines[7], "Line plot saved as Sunflower_line_plot.png");
}

#[test]
fn identical_values_still_render() {
    let dir = tempfile::tempdir().unwrap();
    let set = MeasurementSet::new("Moss", vec![2.0, 2.0, 2.0], vec![0, 0, 0], vec![0.1, 0.1, 0.1]);

    let plots = generate_plots(&set, dir.path()).unwrap();

    assert_png(&plots.histogram);
    assert_png(&plots.scatter);
}

#[test]
fn zero_observations_render_empty_charts() {
    // Accepted vacuously by validation; the CLI itself requires at least one value per flag.
    let dir = tempfile::tempdir().unwrap();
    let set = validate(MeasurementSet::new("Bare", vec![], vec![], vec![])).unwrap();

    let plots = generate_plots(&set, dir.path()).unwrap();

    assert_png(&plots.line_plot);
}

#[test]
fn unwritable_output_directory_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does-not-exist");
    let set = MeasurementSet::new("Tomato", vec![1.0], vec![1], vec![1.0]);

    assert!(generate_plots(&set, &missing).is_err());
}

#[test]
fn infinite_dry_weight_fails_histogram() {
    let dir = tempfile::tempdir().unwrap();
    // inf passes the non-negativity check, but has no histogram bin.
    let set = validate(MeasurementSet::new(
        "Inf",
        vec![1.0, 2.0],
        vec![1, 2],
        vec![1.0, f64::INFINITY],
    ))
    .unwrap();

    let err = generate_plots(&set, dir.path()).unwrap_err();

    assert!(err.to_string().contains("Dry weight"), "unexpected error: {err}");
    assert!(!dir.path().join("Inf_histogram.png").exists());
    assert!(!dir.path().join("Inf_line_plot.png").exists());
}

#[test]
fn infinite_height_fails_before_any_chart() {
    let dir = tempfile::tempdir().unwrap();
    let set = MeasurementSet::new("Tall", vec![f64::INFINITY], vec![1], vec![1.0]);

    assert!(generate_plots(&set, dir.path()).is_err());
    assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
}

#[test]
fn heights_near_f64_max_render() {
    let dir = tempfile::tempdir().unwrap();
    let set = MeasurementSet::new("Giant", vec![0.0, 1.7e308], vec![1, 2], vec![1.0, 2.0]);

    let plots = generate_plots(&set, dir.path()).unwrap();

    assert_png(&plots.scatter);
    assert_png(&plots.line_plot);
}
