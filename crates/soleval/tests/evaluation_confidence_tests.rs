//! Tests for Pearson correlation confidence bounds.
//!
//! These tests verify the Fisher z-transform interval used to qualify an
//! observed correlation:
//! - Containment of the point estimate
//! - Exact agreement with the transform formula
//! - Domain errors at the sample-size and |r| = 1 boundaries
//!
//! ## Test Organization
//!
//! 1. **Containment** - lower <= r <= upper across valid inputs
//! 2. **Formula** - Hand-computed reference values
//! 3. **Domain Errors** - Boundary and argument validation

use approx::assert_relative_eq;

use soleval::prelude::*;

// One-sided 95% standard normal quantile.
const Z_95: f64 = 1.6448536269514722;

// ============================================================================
// Containment Tests
// ============================================================================

/// Test that the interval contains the point estimate.
///
/// Verifies lower <= r <= upper for a grid of valid r and num values.
#[test]
fn test_interval_contains_point_estimate() {
    for &r in &[-0.95, -0.5, 0.0, 0.3, 0.7, 0.99] {
        for &num in &[4usize, 10, 25, 500] {
            let (lower, upper) =
                pearson_confidence(r, num, 0.95).expect("valid confidence input");
            assert!(
                lower <= r && r <= upper,
                "interval [{}, {}] must contain r = {} (num = {})",
                lower,
                upper,
                r,
                num
            );
            assert!(lower > -1.0 && upper < 1.0, "bounds stay inside (-1, 1)");
        }
    }
}

/// Test that more samples tighten the interval.
#[test]
fn test_interval_narrows_with_samples() {
    let (lo_small, hi_small) = pearson_confidence(0.8, 10, 0.95).expect("valid input");
    let (lo_large, hi_large) = pearson_confidence(0.8, 1000, 0.95).expect("valid input");

    assert!(hi_large - lo_large < hi_small - lo_small);
}

// ============================================================================
// Formula Tests
// ============================================================================

/// Test exact agreement with the Fisher transform.
///
/// Bounds are tanh(atanh(r) ± z / sqrt(num - 3)) with the one-sided
/// 95% quantile.
#[test]
fn test_fisher_transform_reference_values() {
    let r = 0.9f64;
    let num = 25usize;

    let stderr = 1.0 / ((num - 3) as f64).sqrt();
    let delta = Z_95 * stderr;
    let expected_lower = (r.atanh() - delta).tanh();
    let expected_upper = (r.atanh() + delta).tanh();

    let (lower, upper) = pearson_confidence(r, num, 0.95).expect("valid input");
    assert_relative_eq!(lower, expected_lower, epsilon = 1e-12);
    assert_relative_eq!(upper, expected_upper, epsilon = 1e-12);
}

/// Test an interval level off the fast paths.
#[test]
fn test_arbitrary_interval_level() {
    let (lower, upper): (f64, f64) = pearson_confidence(0.5, 30, 0.87).expect("valid input");

    assert!(lower < 0.5 && 0.5 < upper);
    assert!(lower.is_finite() && upper.is_finite());
}

// ============================================================================
// Domain Error Tests
// ============================================================================

/// Test the sample-size boundary.
///
/// num <= 3 leaves the standard error undefined.
#[test]
fn test_insufficient_samples() {
    for num in 0..=3usize {
        match pearson_confidence(0.5, num, 0.95) {
            Err(EvalError::InsufficientSamples { got, min }) => {
                assert_eq!(got, num);
                assert_eq!(min, 4);
            }
            other => panic!("expected InsufficientSamples, got {:?}", other),
        }
    }
}

/// Test the |r| = 1 boundary.
///
/// A perfect inverse correlation computed by the metric suite must be
/// rejected by the transform, not silently mapped to NaN.
#[test]
fn test_degenerate_correlation_boundary() {
    let measured = vec![1.0, 2.0, 3.0];
    let predicted = vec![3.0, 2.0, 1.0];
    let r = pearson_r(&measured, &predicted);
    assert_eq!(r, -1.0);

    match pearson_confidence(r, 25, 0.95) {
        Err(EvalError::DegenerateCorrelation(value)) => assert_eq!(value, -1.0),
        other => panic!("expected DegenerateCorrelation, got {:?}", other),
    }

    assert!(matches!(
        pearson_confidence(1.0, 25, 0.95),
        Err(EvalError::DegenerateCorrelation(_))
    ));
}

/// Test interval level validation.
#[test]
fn test_invalid_interval_level() {
    for &level in &[0.0, 1.0, -0.5, 1.5, f64::NAN] {
        assert!(matches!(
            pearson_confidence(0.5, 25, level),
            Err(EvalError::InvalidLevel(_))
        ));
    }
}
