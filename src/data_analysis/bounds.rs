// src/data_analysis/bounds.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // Import QuantileExt for .min() and .max() on Array1
use thiserror::Error;

/// A chart series holds a value that cannot be placed on an axis.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{series} value {value} at index {index} is not finite and cannot be plotted")]
pub struct NonFiniteValueError {
    pub series: &'static str,
    pub index: usize,
    pub value: f64,
}

/// Fails on the first infinite or NaN value in `values`.
pub fn ensure_finite(series: &'static str, values: &[f64]) -> Result<(), NonFiniteValueError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(NonFiniteValueError {
            series,
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

/// Minimum and maximum of a series, ignoring non-finite values.
/// Returns `None` when no finite value is present.
pub fn finite_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let finite: Array1<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    match (finite.min(), finite.max()) {
        (Ok(min_val), Ok(max_val)) => Some((*min_val, *max_val)),
        _ => None,
    }
}
