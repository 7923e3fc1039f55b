//! Noise-ceiling correlation estimation.
//!
//! ## Purpose
//!
//! This module estimates the maximum correlation any model could achieve
//! against reference values that carry a known measurement error. Repeatedly
//! corrupting the reference with synthetic noise of that magnitude and
//! correlating the corrupted copy against the original yields the ceiling —
//! a calibration bound, not a model score.
//!
//! ## Design notes
//!
//! * **Monte Carlo**: Each cycle adds independent Gaussian noise (mean 0,
//!   standard deviation `error`) to every value; the result is the mean of
//!   the per-cycle correlations.
//! * **Pluggable correlation**: The correlation function is passed in, so the
//!   ceiling can be computed for Pearson r, r², or any other association
//!   measure over two slices.
//! * **Seedable**: A pinned seed makes the estimate bit-reproducible.
//!
//! ## Invariants
//!
//! * With `error == 0`, every cycle correlates the values against an exact
//!   copy, so the Pearson ceiling is exactly 1 for non-constant data.
//! * The noisy copy is synthesized per cycle; the input slice is never
//!   modified.
//!
//! ## Non-goals
//!
//! * This module does not estimate the measurement error itself.
//! * This module does not score model predictions.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EvalError;
use crate::primitives::rng::SimpleRng;

/// Default number of Monte-Carlo cycles.
pub const DEFAULT_NOISE_CYCLES: usize = 1000;

// ============================================================================
// Noise Ceiling
// ============================================================================

/// Estimate the maximum possible correlation given measurement noise.
///
/// `values` are the reference measurements (log scale for solubility data),
/// `error` the experimental standard deviation, `cycles` the number of noise
/// draws, and `method` the correlation function to average.
pub fn max_possible_correlation<T, F>(
    values: &[T],
    error: T,
    cycles: usize,
    seed: Option<u64>,
    method: F,
) -> Result<T, EvalError>
where
    T: Float,
    F: Fn(&[T], &[T]) -> T,
{
    if values.len() < 2 {
        return Err(EvalError::InsufficientSamples {
            got: values.len(),
            min: 2,
        });
    }
    if !error.is_finite() || error < T::zero() {
        return Err(EvalError::InvalidNoise(error.to_f64().unwrap_or(f64::NAN)));
    }
    if cycles == 0 {
        return Err(EvalError::InvalidCycles(cycles));
    }

    let mut rng = match seed {
        Some(seed) => SimpleRng::new(seed),
        None => SimpleRng::from_entropy(),
    };

    let mut noisy: Vec<T> = Vec::with_capacity(values.len());
    let mut total = T::zero();
    for _ in 0..cycles {
        noisy.clear();
        for &value in values {
            noisy.push(value + rng.next_gaussian::<T>() * error);
        }
        total = total + method(values, &noisy);
    }

    Ok(total / T::from(cycles).unwrap())
}
