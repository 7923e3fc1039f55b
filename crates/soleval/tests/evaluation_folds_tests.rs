//! Tests for k-fold partitioning.
//!
//! These tests verify the fold splitter used by the harness for:
//! - Exact partition coverage (no duplicates, no omissions)
//! - Train/validate complementarity within a fold
//! - Shuffling, seeding, and reproducibility
//! - Invalid fold counts
//!
//! ## Test Organization
//!
//! 1. **Partition Properties** - Coverage, disjointness, balance
//! 2. **Randomization** - Seeded and unseeded shuffling
//! 3. **Error Cases** - Out-of-range fold counts

use soleval::prelude::*;

// ============================================================================
// Partition Property Tests
// ============================================================================

/// Test that validate sets partition the index range exactly once.
///
/// Verifies coverage and disjointness across several (n, k) combinations.
#[test]
fn test_validate_sets_partition_index_range() {
    for &(n, k) in &[(10usize, 2usize), (10, 3), (7, 7), (12, 5), (2, 2)] {
        let folds = FoldSplitter::new(k).seed(99).split(n).expect("valid split");
        assert_eq!(folds.len(), k, "expected {} folds for n={}", k, n);

        let mut seen: Vec<usize> = folds.iter().flat_map(|f| f.validate.clone()).collect();
        seen.sort_unstable();
        let expected: Vec<usize> = (0..n).collect();
        assert_eq!(seen, expected, "validate sets must cover 0..{} once", n);
    }
}

/// Test that train and validate are complementary within each fold.
#[test]
fn test_train_validate_complementary() {
    let n = 11;
    let folds = FoldSplitter::new(4).seed(3).split(n).expect("valid split");

    for fold in &folds {
        assert_eq!(fold.train.len() + fold.validate.len(), n);

        let mut all: Vec<usize> = fold
            .train
            .iter()
            .chain(fold.validate.iter())
            .copied()
            .collect();
        all.sort_unstable();
        let expected: Vec<usize> = (0..n).collect();
        assert_eq!(all, expected, "train and validate must be complementary");
    }
}

/// Test fold size balance.
///
/// Fold sizes differ by at most one; the first n % k folds take the extra.
#[test]
fn test_fold_sizes_balanced() {
    let folds = FoldSplitter::new(4).seed(1).split(10).expect("valid split");

    let sizes: Vec<usize> = folds.iter().map(|f| f.validate.len()).collect();
    assert_eq!(sizes, vec![3, 3, 2, 2]);
}

// ============================================================================
// Randomization Tests
// ============================================================================

/// Test seeded reproducibility.
///
/// The same seed must produce identical fold assignments across calls.
#[test]
fn test_seeded_split_reproducible() {
    let splitter = FoldSplitter::new(5).seed(42);

    let first = splitter.split(50).expect("valid split");
    let second = splitter.split(50).expect("valid split");
    assert_eq!(first, second, "same seed must reproduce the same folds");
}

/// Test that different seeds rearrange the assignment.
#[test]
fn test_different_seeds_differ() {
    let first = FoldSplitter::new(5).seed(1).split(50).expect("valid split");
    let second = FoldSplitter::new(5).seed(2).split(50).expect("valid split");

    assert_ne!(first, second, "different seeds should shuffle differently");
}

/// Test unseeded splits vary across calls.
#[test]
fn test_unseeded_split_varies() {
    let splitter = FoldSplitter::new(5);

    let first = splitter.split(100).expect("valid split");
    let second = splitter.split(100).expect("valid split");
    assert_ne!(
        first, second,
        "unseeded splits should draw fresh entropy per call"
    );
}

/// Test disabled shuffling.
///
/// Without shuffling, validate sets are consecutive index blocks in order.
#[test]
fn test_unshuffled_split_is_ordered() {
    let folds = FoldSplitter::new(3)
        .shuffle(false)
        .split(9)
        .expect("valid split");

    assert_eq!(folds[0].validate, vec![0, 1, 2]);
    assert_eq!(folds[1].validate, vec![3, 4, 5]);
    assert_eq!(folds[2].validate, vec![6, 7, 8]);
}

// ============================================================================
// Error Case Tests
// ============================================================================

/// Test fold count below 2.
#[test]
fn test_split_rejects_k_below_two() {
    for k in [0usize, 1] {
        match FoldSplitter::new(k).split(10) {
            Err(EvalError::InvalidPartition { folds, items }) => {
                assert_eq!(folds, k);
                assert_eq!(items, 10);
            }
            other => panic!("expected InvalidPartition, got {:?}", other),
        }
    }
}

/// Test fold count above the item count.
#[test]
fn test_split_rejects_k_above_n() {
    match FoldSplitter::new(6).split(5) {
        Err(EvalError::InvalidPartition { folds, items }) => {
            assert_eq!(folds, 6);
            assert_eq!(items, 5);
        }
        other => panic!("expected InvalidPartition, got {:?}", other),
    }
}
