// src/data_input/measurement_set.rs

/// Measurements for one plant across a sequence of observation periods.
/// Index `i` in every sequence belongs to "Week i+1".
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MeasurementSet {
    pub label: String,         // Plant name, used verbatim in output file names.
    pub heights: Vec<f64>,     // Height per period (cm).
    pub leaf_counts: Vec<i64>, // Leaf count per period. Signed so negatives reach validation.
    pub dry_weights: Vec<f64>, // Dry weight per period (g).
}

impl MeasurementSet {
    pub fn new(
        label: impl Into<String>,
        heights: Vec<f64>,
        leaf_counts: Vec<i64>,
        dry_weights: Vec<f64>,
    ) -> Self {
        Self {
            label: label.into(),
            heights,
            leaf_counts,
            dry_weights,
        }
    }

    /// Number of observation periods. Only meaningful once the lengths have been validated.
    pub fn period_count(&self) -> usize {
        self.heights.len()
    }

    /// Leaf counts as plot coordinates.
    pub fn leaf_counts_f64(&self) -> Vec<f64> {
        self.leaf_counts.iter().map(|&c| c as f64).collect()
    }
}

// src/data_input/measurement_set.rs
