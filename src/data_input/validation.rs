// src/data_input/validation.rs

use thiserror::Error;

use crate::data_input::measurement_set::MeasurementSet;

/// Reasons a measurement set is rejected. `Display` is the exact diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Error: The number of height, leaf count, and dry weight values must be the same!")]
    LengthMismatch,
    #[error("Error: Height values must be non-negative!")]
    NegativeHeight,
    #[error("Error: Leaf count values must be non-negative!")]
    NegativeLeafCount,
    #[error("Error: Dry weight values must be non-negative!")]
    NegativeDryWeight,
    #[error("Error: Plant name cannot be empty!")]
    EmptyPlantName,
}

impl ValidationError {
    /// Process exit status for this failure. All validation failures share status 1.
    pub fn exit_code(self) -> i32 {
        1
    }
}

type Check = (ValidationError, fn(&MeasurementSet) -> bool);

/// Checks in priority order. The first failing predicate decides the error.
const CHECKS: [Check; 5] = [
    (ValidationError::LengthMismatch, lengths_match),
    (ValidationError::NegativeHeight, heights_non_negative),
    (ValidationError::NegativeLeafCount, leaf_counts_non_negative),
    (ValidationError::NegativeDryWeight, dry_weights_non_negative),
    (ValidationError::EmptyPlantName, label_present),
];

fn lengths_match(set: &MeasurementSet) -> bool {
    set.heights.len() == set.leaf_counts.len() && set.leaf_counts.len() == set.dry_weights.len()
}

// `>= 0.0` is false for NaN, so NaN is rejected with the negativity message.
fn heights_non_negative(set: &MeasurementSet) -> bool {
    set.heights.iter().all(|&h| h >= 0.0)
}

fn leaf_counts_non_negative(set: &MeasurementSet) -> bool {
    set.leaf_counts.iter().all(|&c| c >= 0)
}

fn dry_weights_non_negative(set: &MeasurementSet) -> bool {
    set.dry_weights.iter().all(|&w| w >= 0.0)
}

fn label_present(set: &MeasurementSet) -> bool {
    !set.label.trim().is_empty()
}

/// Validates a candidate measurement set, returning it unchanged on success.
///
/// An empty set (all three sequences empty) passes the length check vacuously
/// and is accepted as long as the label is present.
pub fn validate(candidate: MeasurementSet) -> Result<MeasurementSet, ValidationError> {
    match CHECKS.iter().find(|(_, passes)| !passes(&candidate)) {
        Some((error, _)) => {
            log::debug!(
                "Rejected '{}' ({} heights, {} leaf counts, {} dry weights): {:?}",
                candidate.label,
                candidate.heights.len(),
                candidate.leaf_counts.len(),
                candidate.dry_weights.len(),
                error
            );
            Err(*error)
        }
        None => Ok(candidate),
    }
}
