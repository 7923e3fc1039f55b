//! Confidence bounds for a Pearson correlation coefficient.
//!
//! ## Purpose
//!
//! This module converts an observed Pearson r into a confidence interval via
//! the Fisher z-transform, quantifying how much a correlation measured on a
//! finite sample can be trusted.
//!
//! ## Design notes
//!
//! * **Fisher transform**: z = atanh(r) is approximately normal with standard
//!   error 1/sqrt(n - 3); bounds are mapped back through tanh.
//! * **One-sided quantile**: The z-score is Φ⁻¹(interval) of the requested
//!   level directly.
//! * **Explicit boundaries**: The transform is undefined at |r| = 1 and the
//!   standard error at n <= 3; both fail with a typed error instead of a
//!   silent NaN.
//!
//! ## Invariants
//!
//! * For valid inputs, `lower <= r <= upper`.
//! * Bounds lie strictly within (-1, 1).
//!
//! ## Non-goals
//!
//! * This module does not compute the correlation itself (see `math::metrics`).
//! * This module does not provide p-values or hypothesis tests.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::normal::normal_quantile;
use crate::primitives::errors::EvalError;

/// Samples below this leave the Fisher standard error undefined.
const MIN_CONFIDENCE_SAMPLES: usize = 4;

// ============================================================================
// Confidence Interval
// ============================================================================

/// Confidence bounds (lower, upper) for a Pearson r observed on `num` samples.
///
/// `interval` is the confidence level, e.g. 0.95.
pub fn pearson_confidence<T: Float>(r: T, num: usize, interval: T) -> Result<(T, T), EvalError> {
    if !interval.is_finite() || interval <= T::zero() || interval >= T::one() {
        return Err(EvalError::InvalidLevel(
            interval.to_f64().unwrap_or(f64::NAN),
        ));
    }
    if num < MIN_CONFIDENCE_SAMPLES {
        return Err(EvalError::InsufficientSamples {
            got: num,
            min: MIN_CONFIDENCE_SAMPLES,
        });
    }
    if !r.is_finite() {
        return Err(EvalError::DegenerateCorrelation(
            r.to_f64().unwrap_or(f64::NAN),
        ));
    }
    if r.abs() >= T::one() {
        return Err(EvalError::DegenerateCorrelation(r.to_f64().unwrap_or(1.0)));
    }

    let stderr = T::one() / T::from(num - 3).unwrap().sqrt();
    let delta = normal_quantile(interval) * stderr;
    let z = r.atanh();

    Ok(((z - delta).tanh(), (z + delta).tanh()))
}
