//! K-fold partitioning of an index range.
//!
//! ## Purpose
//!
//! This module produces the randomized train/validate index partitions the
//! harness iterates over. One split assigns every item to exactly one
//! validate set; the complementary items form that fold's train set.
//!
//! ## Design notes
//!
//! * **Index-based**: The splitter never touches the data itself, only the
//!   index range `0..n`, so any dataset representation can be partitioned.
//! * **Shuffling**: On by default; items are permuted per call. A supplied
//!   seed makes the permutation reproducible, otherwise each call draws a
//!   fresh entropy seed.
//! * **Balance**: The first `n % k` folds take one extra item, so fold sizes
//!   differ by at most one.
//!
//! ## Invariants
//!
//! * Exactly k folds are produced.
//! * Validate sets are mutually disjoint and their union is `0..n`.
//! * Within one fold, train and validate are complementary.
//!
//! ## Non-goals
//!
//! * This module does not fit or score models (harness responsibility).
//! * This module does not sample with replacement or stratify.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::EvalError;
use crate::primitives::rng::SimpleRng;

// ============================================================================
// Fold
// ============================================================================

/// One train/validate index partition of a k-way split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    /// Indices to fit on.
    pub train: Vec<usize>,
    /// Indices to validate on.
    pub validate: Vec<usize>,
}

// ============================================================================
// Fold Splitter
// ============================================================================

/// Produces randomized k-way partitions of an index range.
#[derive(Debug, Clone)]
pub struct FoldSplitter {
    k: usize,
    shuffle: bool,
    seed: Option<u64>,
}

impl FoldSplitter {
    /// Create a splitter producing `k` folds, with shuffling enabled.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            shuffle: true,
            seed: None,
        }
    }

    /// Enable or disable shuffling of the index assignment.
    ///
    /// Without shuffling, validate sets are consecutive index blocks.
    pub fn shuffle(mut self, enabled: bool) -> Self {
        self.shuffle = enabled;
        self
    }

    /// Set the random seed for reproducible shuffling.
    ///
    /// The same seed produces identical fold assignments across calls.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of folds this splitter produces.
    pub fn folds(&self) -> usize {
        self.k
    }

    /// Partition `0..n_items` into k train/validate index pairs.
    pub fn split(&self, n_items: usize) -> Result<Vec<Fold>, EvalError> {
        if self.k < 2 || self.k > n_items {
            return Err(EvalError::InvalidPartition {
                folds: self.k,
                items: n_items,
            });
        }

        let mut indices: Vec<usize> = (0..n_items).collect();
        if self.shuffle {
            let mut rng = match self.seed {
                Some(seed) => SimpleRng::new(seed),
                None => SimpleRng::from_entropy(),
            };
            rng.shuffle(&mut indices);
        }

        let base = n_items / self.k;
        let extra = n_items % self.k;

        let mut folds = Vec::with_capacity(self.k);
        let mut start = 0;
        for fold in 0..self.k {
            let size = base + usize::from(fold < extra);
            let end = start + size;

            let validate = indices[start..end].to_vec();
            let mut train = Vec::with_capacity(n_items - size);
            train.extend_from_slice(&indices[..start]);
            train.extend_from_slice(&indices[end..]);

            folds.push(Fold { train, validate });
            start = end;
        }

        Ok(folds)
    }
}
