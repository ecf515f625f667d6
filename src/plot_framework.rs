// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{Circle, Rectangle};
use plotters::prelude::{IntoSegmentedCoord, SegmentValue};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::{Color, RGBColor};

use std::error::Error;
use std::ops::Range;
use std::path::Path;

use crate::constants::{
    CHART_MARGIN, GRID_LINE_OPACITY, LINE_WIDTH_BAR_EDGE, PLOT_HEIGHT, PLOT_WIDTH, X_LABEL_AREA_SIZE,
    X_LABEL_COUNT, Y_LABEL_AREA_SIZE, Y_LABEL_COUNT,
};
use crate::data_analysis::bounds::finite_bounds;
use crate::data_analysis::histogram::HistogramBin;
use crate::font_config::{FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE};

/// Calculate plot range with padding.
/// Adds 15% padding, or a fixed padding for very small ranges.
pub fn calculate_range(min_val: f64, max_val: f64) -> (f64, f64) {
    let (min, max) = if min_val <= max_val {
        (min_val, max_val)
    } else {
        (max_val, min_val)
    };
    let range = (max - min).abs();
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    // Near the f64 limits neither the bounds nor the padded span may overflow to infinity.
    let padding = padding.min(((f64::MAX - range) / 4.0).max(0.0));
    ((min - padding).max(f64::MIN), (max + padding).min(f64::MAX))
}

/// Padded range of a series, or `0..1` when it has no finite values.
pub fn padded_range(values: &[f64]) -> Range<f64> {
    let (min, max) = finite_bounds(values)
        .map(|(min, max)| calculate_range(min, max))
        .unwrap_or((0.0, 1.0));
    min..max
}

/// Frequency axis upper bound: the tallest bar plus headroom, never below 1.
pub fn frequency_axis_max(bins: &[HistogramBin]) -> u32 {
    let tallest = bins.iter().map(|b| b.count).max().unwrap_or(0) as u32;
    tallest + (tallest / 10).max(1)
}

/// Title and axis descriptions shared by every chart.
#[derive(Debug, Clone)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

#[derive(Debug, Clone)]
pub struct ScatterPlotConfig {
    pub labels: ChartLabels,
    pub points: Vec<(f64, f64)>,
    pub color: RGBColor,
    pub point_radius: i32,
}

#[derive(Debug, Clone)]
pub struct HistogramPlotConfig {
    pub labels: ChartLabels,
    pub bins: Vec<HistogramBin>,
    pub color: RGBColor,
    pub edge_color: RGBColor,
}

/// A line over ordinal categories, one value per category, drawn in category order.
#[derive(Debug, Clone)]
pub struct CategoryLinePlotConfig {
    pub labels: ChartLabels,
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker_radius: i32,
}

/// Creates a single-chart PNG at `output_path`, lets `draw_contents` fill it, and writes it out.
pub fn draw_single_chart<F>(
    output_path: &Path,
    chart_type_name: &str,
    draw_contents: F,
) -> Result<(), Box<dyn Error>>
where
    F: FnOnce(&DrawingArea<BitMapBackend, Shift>) -> Result<(), Box<dyn Error>>,
{
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    draw_contents(&root_area)?;
    root_area.present()?;
    log::info!("{} saved as '{}'.", chart_type_name, output_path.display());
    Ok(())
}

/// Draws points without connecting lines. Coordinates must be finite.
pub fn draw_scatter_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    config: &ScatterPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let xs: Vec<f64> = config.points.iter().map(|&(x, _)| x).collect();
    let ys: Vec<f64> = config.points.iter().map(|&(_, y)| y).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&config.labels.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(padded_range(&xs), padded_range(&ys))?;

    chart
        .configure_mesh()
        .x_desc(&config.labels.x_label)
        .y_desc(&config.labels.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .bold_line_style(BLACK.mix(GRID_LINE_OPACITY))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    chart.draw_series(
        config
            .points
            .iter()
            .map(|&(x, y)| Circle::new((x, y), config.point_radius, config.color.filled())),
    )?;

    Ok(())
}

/// Draws filled bars with an outline, one per bin, over a numeric X axis.
pub fn draw_histogram_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    config: &HistogramPlotConfig,
) -> Result<(), Box<dyn Error>> {
    let edges: Vec<f64> = config
        .bins
        .iter()
        .flat_map(|b| [b.lower, b.upper])
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(&config.labels.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(padded_range(&edges), 0u32..frequency_axis_max(&config.bins))?;

    chart
        .configure_mesh()
        .x_desc(&config.labels.x_label)
        .y_desc(&config.labels.y_label)
        .x_labels(X_LABEL_COUNT)
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&|x| format!("{:.2}", x))
        .bold_line_style(BLACK.mix(GRID_LINE_OPACITY))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let occupied = config.bins.iter().filter(|b| b.count > 0);

    chart.draw_series(occupied.clone().map(|b| {
        Rectangle::new(
            [(b.lower, 0u32), (b.upper, b.count as u32)],
            config.color.filled(),
        )
    }))?;
    chart.draw_series(occupied.map(|b| {
        Rectangle::new(
            [(b.lower, 0u32), (b.upper, b.count as u32)],
            config.edge_color.stroke_width(LINE_WIDTH_BAR_EDGE),
        )
    }))?;

    Ok(())
}

/// Draws a marked line over ordinal categories. Category `i` is labelled `categories[i]`.
/// Values must be finite.
pub fn draw_category_line_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    config: &CategoryLinePlotConfig,
) -> Result<(), Box<dyn Error>> {
    let category_count = config.categories.len();
    // Integer ranges are inclusive in plotters, so 0..N-1 gives one segment per category.
    let x_range = (0..category_count.saturating_sub(1)).into_segmented();

    let mut chart = ChartBuilder::on(area)
        .caption(&config.labels.title, FONT_TUPLE_CHART_TITLE)
        .margin(CHART_MARGIN)
        .x_label_area_size(X_LABEL_AREA_SIZE)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(x_range, padded_range(&config.values))?;

    let category_label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) | SegmentValue::Exact(index) => {
            config.categories.get(*index).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .x_desc(&config.labels.x_label)
        .y_desc(&config.labels.y_label)
        .x_labels(category_count.max(1))
        .y_labels(Y_LABEL_COUNT)
        .x_label_formatter(&category_label)
        .bold_line_style(BLACK.mix(GRID_LINE_OPACITY))
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let points: Vec<(SegmentValue<usize>, f64)> = config
        .values
        .iter()
        .enumerate()
        .take(category_count)
        .map(|(index, &value)| (SegmentValue::CenterOf(index), value))
        .collect();

    chart.draw_series(LineSeries::new(
        points.iter().cloned(),
        config.color.stroke_width(config.stroke_width),
    ))?;
    chart.draw_series(
        points
            .iter()
            .map(|point| Circle::new(point.clone(), config.marker_radius, config.color.filled())),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_range_pads_fifteen_percent() {
        let (min, max) = calculate_range(10.0, 20.0);
        assert!((min - 8.5).abs() < 1e-12);
        assert!((max - 21.5).abs() < 1e-12);
    }

    #[test]
    fn test_calculate_range_swaps_and_pads_flat_series() {
        assert_eq!(calculate_range(3.0, 3.0), (2.5, 3.5));
        let (min, max) = calculate_range(20.0, 10.0);
        assert!(min < max);
    }

    #[test]
    fn test_calculate_range_stays_finite_near_f64_max() {
        let (min, max) = calculate_range(0.0, 1.7e308);
        assert!(min.is_finite() && max.is_finite());
        assert!((max - min).is_finite());
        assert!(min < 0.0 && max > 1.7e308);

        let (min, max) = calculate_range(1.0e308, 1.7e308);
        assert_eq!(max, f64::MAX);
        assert!((max - min).is_finite());
    }

    #[test]
    fn test_padded_range_empty_series() {
        assert_eq!(padded_range(&[]), 0.0..1.0);
    }

    #[test]
    fn test_frequency_axis_headroom() {
        let bins = [
            HistogramBin { lower: 0.0, upper: 1.0, count: 0 },
            HistogramBin { lower: 1.0, upper: 2.0, count: 3 },
        ];
        assert_eq!(frequency_axis_max(&bins), 4);
        assert_eq!(frequency_axis_max(&[]), 1);

        let tall = [HistogramBin { lower: 0.0, upper: 1.0, count: 40 }];
        assert_eq!(frequency_axis_max(&tall), 44);
    }
}
