//! High-level API for model evaluation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder configuring the cross-validation protocol, ending in a validated
//! [`Harness`] that owns the model under evaluation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked when `.build()` is called; invalid
//!   or doubly-set parameters surface as typed errors before any evaluation
//!   runs.
//! * **Type-Safe**: Generic over `Float` value types; the model's value type
//!   pins the builder's.
//!
//! ## Key concepts
//!
//! * **Configuration Flow**: `Evaluation::new()` → chained setters →
//!   `.build(model)` → [`Harness`].
//! * **Defaults**: 5 folds, no seed (fresh shuffle per call), labels kept in
//!   order, solubility axis bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::{String, ToString};
#[cfg(feature = "std")]
use std::string::{String, ToString};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::EvalError;
use crate::primitives::model::Model;
use crate::sinks::visualize::AxisBounds;

// Publicly re-exported types
pub use crate::engine::harness::Harness;

/// Default number of cross-validation folds.
pub const DEFAULT_FOLDS: usize = 5;

// ============================================================================
// Evaluation Builder
// ============================================================================

/// Fluent builder for configuring a cross-validation harness.
#[derive(Debug, Clone)]
pub struct Evaluation<T> {
    /// Number of folds.
    folds: Option<usize>,

    /// Seed for reproducible shuffling.
    seed: Option<u64>,

    /// Shuffle labels before splitting (y-randomization null baseline).
    randomize_labels: Option<bool>,

    /// Display name for logs and report records.
    name: Option<String>,

    /// Axis bounds handed to visualization sinks.
    bounds: Option<AxisBounds<T>>,

    /// Tracks if any parameter was set multiple times (for validation).
    duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for Evaluation<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Evaluation<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            folds: None,
            seed: None,
            randomize_labels: None,
            name: None,
            bounds: None,
            duplicate_param: None,
        }
    }

    /// Set the number of cross-validation folds (default 5).
    pub fn folds(mut self, folds: usize) -> Self {
        if self.folds.is_some() {
            self.duplicate_param = Some("folds");
        }
        self.folds = Some(folds);
        self
    }

    /// Set the random seed for reproducible fold shuffling and label
    /// permutation. Without a seed, every split draws fresh entropy.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Shuffle the labels before splitting, establishing the y-randomization
    /// null baseline a genuine signal should beat by a wide margin.
    pub fn randomize_labels(mut self, enabled: bool) -> Self {
        if self.randomize_labels.is_some() {
            self.duplicate_param = Some("randomize_labels");
        }
        self.randomize_labels = Some(enabled);
        self
    }

    /// Set the model display name used in logs and report records.
    pub fn name(mut self, name: &str) -> Self {
        if self.name.is_some() {
            self.duplicate_param = Some("name");
        }
        self.name = Some(name.to_string());
        self
    }

    /// Set the axis bounds handed to visualization sinks
    /// (default: the log-solubility range -11 to 3).
    pub fn bounds(mut self, bounds: AxisBounds<T>) -> Self {
        if self.bounds.is_some() {
            self.duplicate_param = Some("bounds");
        }
        self.bounds = Some(bounds);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build a harness owning `model`.
    pub fn build<M>(self, model: M) -> Result<Harness<M>, EvalError>
    where
        M: Model<Value = T>,
    {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        // Validate fold count (the upper bound is checked against the
        // dataset size at split time)
        let folds = self.folds.unwrap_or(DEFAULT_FOLDS);
        Validator::validate_fold_count(folds)?;

        // Validate axis bounds
        let bounds = self.bounds.unwrap_or_default();
        Validator::validate_bounds(&bounds)?;

        let name = self.name.unwrap_or_else(|| String::from("model"));

        Ok(Harness::new(
            model,
            name,
            folds,
            self.seed,
            self.randomize_labels.unwrap_or(false),
            bounds,
        ))
    }
}
