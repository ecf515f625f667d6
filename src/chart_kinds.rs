// src/chart_kinds.rs

/// The three chart artifacts produced for every measurement set.
///
/// `ChartKind::ALL` fixes the order in which they are generated and listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Scatter,
    Histogram,
    LinePlot,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Scatter, ChartKind::Histogram, ChartKind::LinePlot];

    /// Suffix appended to the plant label in the output file name.
    pub fn file_suffix(self) -> &'static str {
        match self {
            ChartKind::Scatter => "scatter",
            ChartKind::Histogram => "histogram",
            ChartKind::LinePlot => "line_plot",
        }
    }

    /// Human readable name used in the confirmation block.
    pub fn display_name(self) -> &'static str {
        match self {
            ChartKind::Scatter => "Scatter plot",
            ChartKind::Histogram => "Histogram",
            ChartKind::LinePlot => "Line plot",
        }
    }
}

/// Output file name for a chart: `{label}_{kind}.png`.
///
/// The label is used verbatim, untrimmed.
pub fn output_filename(label: &str, kind: ChartKind) -> String {
    format!("{}_{}.png", label, kind.file_suffix())
}
