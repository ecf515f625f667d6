// src/data_analysis/histogram.rs

use crate::constants::HISTOGRAM_DEGENERATE_SPAN;
use crate::data_analysis::bounds::{ensure_finite, finite_bounds, NonFiniteValueError};

/// One histogram bin: `[lower, upper)`, except the last bin which also includes `upper`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// `bins + 1` evenly spaced edges from the minimum to the maximum value.
///
/// Identical values get a unit-wide span centred on the value, and an empty
/// (or entirely non-finite) series falls back to `[0, 1]`.
pub fn bin_edges(values: &[f64], bins: usize) -> Vec<f64> {
    let bins = bins.max(1);
    let (mut lower, mut upper) = finite_bounds(values).unwrap_or((0.0, 1.0));
    if upper - lower <= 0.0 {
        lower -= HISTOGRAM_DEGENERATE_SPAN / 2.0;
        upper += HISTOGRAM_DEGENERATE_SPAN / 2.0;
    }
    let width = (upper - lower) / bins as f64;
    (0..=bins)
        .map(|i| if i == bins { upper } else { lower + width * i as f64 })
        .collect()
}

/// Counts values into `bins` equal-width bins spanning the observed range.
///
/// Every value lands in exactly one bin, so the counts sum to `values.len()`.
/// An infinite or NaN value has no bin and is an error.
pub fn histogram_counts(
    values: &[f64],
    bins: usize,
) -> Result<Vec<HistogramBin>, NonFiniteValueError> {
    ensure_finite("Dry weight", values)?;
    let edges = bin_edges(values, bins);
    let bin_count = edges.len() - 1;
    let lower = edges[0];
    let upper = edges[bin_count];
    let width = (upper - lower) / bin_count as f64;

    let mut counts = vec![0usize; bin_count];
    for &value in values {
        // Values on the upper edge belong to the last (closed) bin.
        let index = (((value - lower) / width).floor().max(0.0) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    log::debug!("Histogram edges {:?}, counts {:?}", edges, counts);

    Ok(edges
        .windows(2)
        .zip(counts)
        .map(|(edge, count)| HistogramBin {
            lower: edge[0],
            upper: edge[1],
            count,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(bins: &[HistogramBin]) -> Vec<usize> {
        bins.iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_edges_span_min_to_max() {
        let edges = bin_edges(&[1.0, 2.0, 6.0], 5);
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], 1.0);
        assert_eq!(edges[5], 6.0);
        assert!((edges[1] - 2.0).abs() < 1e-12);
        assert!((edges[4] - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_counts_sum_to_input_length() {
        let values = [1.2, 1.5, 0.3, 2.8, 2.8, 1.9, 0.0];
        let bins = histogram_counts(&values, 5).unwrap();
        assert_eq!(bins.len(), 5);
        assert_eq!(bins.iter().map(|b| b.count).sum::<usize>(), values.len());
    }

    #[test]
    fn test_maximum_lands_in_last_bin() {
        let bins = histogram_counts(&[0.0, 10.0], 5).unwrap();
        assert_eq!(counts_of(&bins), vec![1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_inner_edges_are_half_open() {
        // 2.0 sits exactly on the boundary between the first and second bin.
        let bins = histogram_counts(&[0.0, 2.0, 10.0], 5).unwrap();
        assert_eq!(counts_of(&bins), vec![1, 1, 0, 0, 1]);
    }

    #[test]
    fn test_two_values_scenario() {
        let bins = histogram_counts(&[1.2, 1.5], 5).unwrap();
        assert_eq!(counts_of(&bins), vec![1, 0, 0, 0, 1]);
        assert!((bins[0].lower - 1.2).abs() < 1e-12);
        assert!((bins[4].upper - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_identical_values_use_unit_span() {
        let bins = histogram_counts(&[3.0, 3.0, 3.0], 5).unwrap();
        assert!((bins[0].lower - 2.5).abs() < 1e-12);
        assert!((bins[4].upper - 3.5).abs() < 1e-12);
        assert_eq!(counts_of(&bins), vec![0, 0, 3, 0, 0]);
    }

    #[test]
    fn test_infinite_value_is_an_error() {
        let err = histogram_counts(&[1.0, f64::INFINITY], 5).unwrap_err();
        assert_eq!(err.index, 1);
    }

    #[test]
    fn test_nan_value_is_an_error() {
        assert!(histogram_counts(&[f64::NAN], 5).is_err());
    }

    #[test]
    fn test_empty_input() {
        let bins = histogram_counts(&[], 5).unwrap();
        assert_eq!(bins.len(), 5);
        assert_eq!(bins[0].lower, 0.0);
        assert_eq!(bins[4].upper, 1.0);
        assert!(bins.iter().all(|b| b.count == 0));
    }
}
