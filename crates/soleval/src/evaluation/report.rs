//! Per-fold metric tuples and their cross-fold aggregation.
//!
//! ## Purpose
//!
//! This module defines the ordered metric triple produced by one
//! fit+evaluate cycle and the summary that aggregates the triples of a full
//! cross-validation run into per-metric mean and standard deviation.
//!
//! ## Design notes
//!
//! * **Fixed order**: The triple is (MSE, MAE, Pearson r²); aggregation and
//!   serialization preserve that order.
//! * **Population deviation**: The standard deviation divides by the fold
//!   count, matching how the score tuples are aggregated upstream.
//! * **Ergonomics**: Implements `Display` for human-readable output and a
//!   tab-separated record for the report file.
//!
//! ## Invariants
//!
//! * Aggregation is elementwise; metric components never mix.
//! * An empty tuple sequence yields a zeroed summary with `folds == 0`.
//!
//! ## Non-goals
//!
//! * This module does not compute the metrics (see `math::metrics`).
//! * This module does not write files (see `sinks::persist`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// ============================================================================
// Metric Tuple
// ============================================================================

/// Ordered metric triple from one fit+evaluate cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricTuple<T> {
    /// Mean squared error.
    pub mse: T,
    /// Mean absolute error.
    pub mae: T,
    /// Squared Pearson correlation.
    pub r2: T,
}

impl<T: Float> MetricTuple<T> {
    /// Create a tuple from its components, in fixed order.
    pub fn new(mse: T, mae: T, r2: T) -> Self {
        Self { mse, mae, r2 }
    }

    /// The components in their fixed order.
    pub fn to_array(self) -> [T; 3] {
        [self.mse, self.mae, self.r2]
    }
}

// ============================================================================
// Evaluation Summary
// ============================================================================

/// Elementwise mean and standard deviation across per-fold metric tuples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationSummary<T> {
    /// Per-metric means.
    pub mean: MetricTuple<T>,
    /// Per-metric population standard deviations.
    pub std: MetricTuple<T>,
    /// Number of folds aggregated.
    pub folds: usize,
}

impl<T: Float> EvaluationSummary<T> {
    /// Aggregate a sequence of per-fold tuples.
    pub fn from_tuples(tuples: &[MetricTuple<T>]) -> Self {
        let n = tuples.len();
        if n == 0 {
            let zero = MetricTuple::new(T::zero(), T::zero(), T::zero());
            return Self {
                mean: zero,
                std: zero,
                folds: 0,
            };
        }

        let n_t = T::from(n).unwrap();

        let mut mean = [T::zero(); 3];
        for tuple in tuples {
            let components = tuple.to_array();
            for (acc, value) in mean.iter_mut().zip(components.iter()) {
                *acc = *acc + *value;
            }
        }
        for acc in mean.iter_mut() {
            *acc = *acc / n_t;
        }

        let mut var = [T::zero(); 3];
        for tuple in tuples {
            let components = tuple.to_array();
            for (acc, (value, center)) in var.iter_mut().zip(components.iter().zip(mean.iter())) {
                let deviation = *value - *center;
                *acc = *acc + deviation * deviation;
            }
        }

        Self {
            mean: MetricTuple::new(mean[0], mean[1], mean[2]),
            std: MetricTuple::new(
                (var[0] / n_t).sqrt(),
                (var[1] / n_t).sqrt(),
                (var[2] / n_t).sqrt(),
            ),
            folds: n,
        }
    }
}

impl<T: Float + Display> EvaluationSummary<T> {
    /// Render the report-file record: model name, then each metric's mean
    /// and standard deviation, tab-separated.
    pub fn tsv_record(&self, name: &str) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            name,
            self.mean.mse,
            self.std.mse,
            self.mean.mae,
            self.std.mae,
            self.mean.r2,
            self.std.r2,
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for EvaluationSummary<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Cross-validation summary ({} folds):", self.folds)?;
        writeln!(f, "  MSE:  {:.6} ± {:.6}", self.mean.mse, self.std.mse)?;
        writeln!(f, "  MAE:  {:.6} ± {:.6}", self.mean.mae, self.std.mae)?;
        writeln!(f, "  r²:   {:.6} ± {:.6}", self.mean.r2, self.std.r2)?;
        Ok(())
    }
}
