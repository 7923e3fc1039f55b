//! Accumulated prediction-vs-truth history.
//!
//! ## Purpose
//!
//! This module stores the (measured, predicted) pairs collected across every
//! persisting score call, so the full evaluation run can later be plotted or
//! written out as raw data.
//!
//! ## Design notes
//!
//! * **Append-only**: Scoring only ever appends; the buffer is reset through
//!   an explicit `clear` rather than by recreating its owner.
//! * **Parallel sequences**: Measured and predicted values are kept as two
//!   vectors aligned by insertion order.
//! * **Capacity reuse**: `clear` preserves capacity for the next run.
//!
//! ## Invariants
//!
//! * Both sequences always have the same length.
//! * Insertion order is preserved; pair i of an append lands at the same
//!   offset on both sides.
//!
//! ## Non-goals
//!
//! * This module does not compute metrics over the stored pairs.
//! * This module does not render or persist the pairs itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Prediction History
// ============================================================================

/// Append-only buffer of (measured, predicted) pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionHistory<T> {
    measured: Vec<T>,
    predicted: Vec<T>,
}

impl<T> Default for PredictionHistory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PredictionHistory<T> {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            measured: Vec::new(),
            predicted: Vec::new(),
        }
    }

    /// Create an empty history with pre-allocated capacity on both sides.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            measured: Vec::with_capacity(capacity),
            predicted: Vec::with_capacity(capacity),
        }
    }

    /// Number of accumulated pairs.
    pub fn len(&self) -> usize {
        self.measured.len()
    }

    /// Whether no pairs have been accumulated yet.
    pub fn is_empty(&self) -> bool {
        self.measured.is_empty()
    }

    /// Accumulated measured values, in insertion order.
    pub fn measured(&self) -> &[T] {
        &self.measured
    }

    /// Accumulated predicted values, in insertion order.
    pub fn predicted(&self) -> &[T] {
        &self.predicted
    }

    /// Drop all accumulated pairs (capacity is preserved).
    pub fn clear(&mut self) {
        self.measured.clear();
        self.predicted.clear();
    }
}

impl<T: Copy> PredictionHistory<T> {
    /// Append aligned measured/predicted slices elementwise.
    ///
    /// Both slices must have the same length.
    pub fn append(&mut self, measured: &[T], predicted: &[T]) {
        debug_assert_eq!(measured.len(), predicted.len());
        self.measured.extend_from_slice(measured);
        self.predicted.extend_from_slice(predicted);
    }

    /// Iterate over the accumulated pairs in insertion order.
    pub fn pairs(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.measured
            .iter()
            .copied()
            .zip(self.predicted.iter().copied())
    }
}
