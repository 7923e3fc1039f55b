//! Error types for evaluation-harness operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during cross-validation
//! and scoring, including dataset validation, partition constraints, domain
//! errors in the confidence-interval math, and model capability failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., fold count vs. item count).
//! * **Transparent**: Model failures are carried through verbatim; the harness
//!   neither retries nor rewrites them.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Dataset validation**: Empty sequences, mismatched lengths, non-finite labels.
//! 2. **Partition validation**: Fold counts outside the valid range for the dataset.
//! 3. **Domain errors**: Confidence math called with too few samples or a correlation
//!    at the ±1 boundary, where the Fisher transform is undefined.
//! 4. **Capability failures**: Fit/predict errors raised by the concrete model.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for cross-validation and scoring operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Input sequences are empty; evaluation requires at least one pair.
    EmptyInput,

    /// Inputs and labels must have the same number of elements.
    MismatchedLengths {
        /// Number of input representations.
        inputs: usize,
        /// Number of labels.
        labels: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Fold count outside the valid range for the dataset size.
    InvalidPartition {
        /// Requested number of folds.
        folds: usize,
        /// Number of items available for partitioning.
        items: usize,
    },

    /// Too few samples for the requested statistic.
    InsufficientSamples {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// Correlation at or beyond the ±1 boundary, where the Fisher
    /// z-transform is undefined.
    DegenerateCorrelation(f64),

    /// Confidence level must be strictly between 0 and 1.
    InvalidLevel(f64),

    /// Monte-Carlo cycle count must be at least 1.
    InvalidCycles(usize),

    /// Noise standard deviation must be finite and non-negative.
    InvalidNoise(f64),

    /// Axis bounds must be finite with lower strictly below upper.
    InvalidBounds {
        /// Lower bound provided.
        lower: f64,
        /// Upper bound provided.
        upper: f64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Fitting failure raised by the concrete model implementation.
    ModelFit(String),

    /// Prediction failure raised by the concrete model implementation,
    /// including contract violations such as a wrong-length output.
    ModelPredict(String),

    /// Report or persistence file could not be written.
    #[cfg(feature = "std")]
    Io(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EvalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequences are empty"),
            Self::MismatchedLengths { inputs, labels } => {
                write!(
                    f,
                    "Length mismatch: {inputs} inputs paired with {labels} labels"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidPartition { folds, items } => {
                write!(
                    f,
                    "Invalid partition: {folds} folds for {items} items (need 2 <= folds <= items)"
                )
            }
            Self::InsufficientSamples { got, min } => {
                write!(f, "Too few samples: got {got}, need at least {min}")
            }
            Self::DegenerateCorrelation(r) => {
                write!(
                    f,
                    "Degenerate correlation: {r} (Fisher transform is undefined at |r| >= 1)"
                )
            }
            Self::InvalidLevel(level) => {
                write!(f, "Invalid confidence level: {level} (must be > 0 and < 1)")
            }
            Self::InvalidCycles(cycles) => {
                write!(f, "Invalid cycle count: {cycles} (must be at least 1)")
            }
            Self::InvalidNoise(error) => {
                write!(
                    f,
                    "Invalid noise level: {error} (must be finite and >= 0)"
                )
            }
            Self::InvalidBounds { lower, upper } => {
                write!(
                    f,
                    "Invalid axis bounds: [{lower}, {upper}] (lower must be finite and below upper)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::ModelFit(msg) => write!(f, "Model fit failed: {msg}"),
            Self::ModelPredict(msg) => write!(f, "Model predict failed: {msg}"),
            #[cfg(feature = "std")]
            Self::Io(msg) => write!(f, "I/O failure: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EvalError {}

// The error type stays `Clone + PartialEq`, so the rendered message is
// carried instead of the `std::io::Error` itself.
#[cfg(feature = "std")]
impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
