//! The model capability contract consumed by the harness.
//!
//! ## Purpose
//!
//! This module defines the minimal polymorphic interface any concrete
//! regression model must satisfy to be evaluated: fit on labeled data,
//! predict on unlabeled data. Everything else — fold orchestration, scoring,
//! reporting — is built on top of these two operations.
//!
//! ## Design notes
//!
//! * **Two operations only**: The trait carries no shared-state assumptions
//!   beyond what each implementation manages internally.
//! * **Associated types**: `Input` is the model's representation (structure
//!   strings for solubility predictors, but any type works); `Value` is the
//!   numeric label/prediction type.
//! * **Failure transparency**: Errors from `fit`/`predict` propagate through
//!   the harness unchanged; a failed fit aborts the enclosing run.
//!
//! ## Non-goals
//!
//! * This module does not prescribe model architecture or features.
//! * This module does not provide any default implementation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EvalError;

// ============================================================================
// Capability Contract
// ============================================================================

/// Capability contract for a trainable regression model.
pub trait Model {
    /// Input representation consumed by the model (e.g., SMILES strings).
    type Input;

    /// Numeric type of labels and predictions.
    type Value: Float;

    /// Fit the model on the given training data.
    ///
    /// Mutates internal model state; after a successful return the model is
    /// ready to predict. Inputs and labels are index-aligned and have equal
    /// length. Failures surface as [`EvalError::ModelFit`].
    fn fit(&mut self, inputs: &[Self::Input], labels: &[Self::Value]) -> Result<(), EvalError>;

    /// Predict one value per input, in input order.
    ///
    /// Pure with respect to already-fitted state. The returned sequence must
    /// have exactly `inputs.len()` elements; the harness reports a shorter or
    /// longer output as a contract violation. Failures surface as
    /// [`EvalError::ModelPredict`].
    fn predict(&self, inputs: &[Self::Input]) -> Result<Vec<Self::Value>, EvalError>;
}
