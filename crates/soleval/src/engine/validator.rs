//! Input validation for harness configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for datasets and configuration
//! parameters. It checks requirements such as matching lengths, finite
//! labels, and fold-count bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not perform the evaluation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EvalError;
use crate::sinks::visualize::AxisBounds;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for harness configuration and input data.
///
/// Provides static methods returning `Result<(), EvalError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Dataset Validation
    // ========================================================================

    /// Validate an input/label dataset.
    pub fn validate_dataset<X, T: Float>(inputs: &[X], labels: &[T]) -> Result<(), EvalError> {
        // Check 1: Non-empty sequences
        if inputs.is_empty() || labels.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        // Check 2: Matching lengths
        if inputs.len() != labels.len() {
            return Err(EvalError::MismatchedLengths {
                inputs: inputs.len(),
                labels: labels.len(),
            });
        }

        // Check 3: All labels finite
        for (i, &label) in labels.iter().enumerate() {
            if !label.is_finite() {
                return Err(EvalError::InvalidNumericValue(format!(
                    "label[{}]={}",
                    i,
                    label.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a model's prediction sequence against the expected length.
    pub fn validate_predictions(expected: usize, got: usize) -> Result<(), EvalError> {
        if got != expected {
            return Err(EvalError::ModelPredict(format!(
                "prediction length {got} does not match input length {expected}"
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a fold count before the dataset size is known.
    ///
    /// The upper bound is checked against the dataset size at split time.
    pub fn validate_fold_count(folds: usize) -> Result<(), EvalError> {
        if folds < 2 {
            return Err(EvalError::InvalidPartition { folds, items: 0 });
        }
        Ok(())
    }

    /// Validate plot axis bounds.
    pub fn validate_bounds<T: Float>(bounds: &AxisBounds<T>) -> Result<(), EvalError> {
        if !bounds.lower.is_finite() || !bounds.upper.is_finite() || bounds.lower >= bounds.upper {
            return Err(EvalError::InvalidBounds {
                lower: bounds.lower.to_f64().unwrap_or(f64::NAN),
                upper: bounds.upper.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EvalError> {
        if let Some(parameter) = duplicate_param {
            return Err(EvalError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
