//! Regression error and correlation metrics.
//!
//! ## Purpose
//!
//! This module provides the pure metric functions used to score predictions
//! against measured reference values: squared/absolute error metrics, the
//! coefficient of determination, and Pearson correlation.
//!
//! ## Design notes
//!
//! * **Pure and stateless**: Every function maps two equal-length slices to a
//!   single value; no allocation, no shared state.
//! * **Generics**: All computations are generic over `Float` types.
//! * **NaN-free**: Degenerate inputs (empty or zero-variance sequences) map
//!   to defined values instead of propagating NaN.
//!
//! ## Key concepts
//!
//! * **Error metrics**: MSE, RMSE, and MAE measure prediction error.
//! * **R²**: Variance explained relative to the mean of the measured values;
//!   sensitive to scale and offset bias.
//! * **Pearson r**: Linear association irrespective of scale/offset; its
//!   square is the harness's third scoring metric.
//!
//! ## Invariants
//!
//! * `mean_squared_error`, `rmse`, and `mean_absolute_error` are non-negative.
//! * `pearson_r` lies in [-1, 1]; `pearson_r_squared` lies in [0, 1].
//!
//! ## Non-goals
//!
//! * This module does not validate input finiteness (engine responsibility).
//! * This module does not compute confidence bounds (see `evaluation`).

// External dependencies
use num_traits::Float;

// ============================================================================
// Error Metrics
// ============================================================================

/// Mean squared error: (1/n) * sum (measured_i - predicted_i)^2.
pub fn mean_squared_error<T: Float>(measured: &[T], predicted: &[T]) -> T {
    debug_assert_eq!(measured.len(), predicted.len());
    if measured.is_empty() {
        return T::zero();
    }

    let n_t = T::from(measured.len()).unwrap();
    let rss = measured
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&m, &p)| {
            let r = m - p;
            acc + r * r
        });

    rss / n_t
}

/// Root mean squared error: sqrt(MSE).
pub fn rmse<T: Float>(measured: &[T], predicted: &[T]) -> T {
    mean_squared_error(measured, predicted).sqrt()
}

/// Mean absolute error: (1/n) * sum |measured_i - predicted_i|.
pub fn mean_absolute_error<T: Float>(measured: &[T], predicted: &[T]) -> T {
    debug_assert_eq!(measured.len(), predicted.len());
    if measured.is_empty() {
        return T::zero();
    }

    let n_t = T::from(measured.len()).unwrap();
    let sum = measured
        .iter()
        .zip(predicted.iter())
        .fold(T::zero(), |acc, (&m, &p)| acc + (m - p).abs());

    sum / n_t
}

// ============================================================================
// Goodness-of-Fit Metrics
// ============================================================================

/// Coefficient of determination.
///
/// R² = 1 - SS_res / SS_tot, where SS_tot is taken relative to the mean of
/// the measured values. When all measured values are identical, a perfect
/// residual vector scores 1 and anything else scores 0.
pub fn r_squared<T: Float>(measured: &[T], predicted: &[T]) -> T {
    debug_assert_eq!(measured.len(), predicted.len());
    let n = measured.len();
    if n == 0 {
        return T::zero();
    }
    if n == 1 {
        return T::one();
    }

    let n_t = T::from(n).unwrap();
    let sum = measured.iter().copied().fold(T::zero(), |acc, v| acc + v);
    let mean = sum / n_t;

    // SS_tot and SS_res in one pass
    let (ss_tot, ss_res) = measured.iter().zip(predicted.iter()).fold(
        (T::zero(), T::zero()),
        |(tot, res), (&m, &p)| {
            let deviation = m - mean;
            let residual = m - p;
            (tot + deviation * deviation, res + residual * residual)
        },
    );

    if ss_tot == T::zero() {
        if ss_res == T::zero() {
            T::one()
        } else {
            T::zero()
        }
    } else {
        T::one() - ss_res / ss_tot
    }
}

// ============================================================================
// Correlation Metrics
// ============================================================================

/// Pearson linear correlation coefficient.
///
/// Returns 0 when either sequence has zero variance (no linear association
/// is defined there). The result is clamped to [-1, 1] against rounding
/// drift so downstream squares stay within [0, 1].
pub fn pearson_r<T: Float>(measured: &[T], predicted: &[T]) -> T {
    debug_assert_eq!(measured.len(), predicted.len());
    let n = measured.len();
    if n == 0 {
        return T::zero();
    }

    let n_t = T::from(n).unwrap();
    let mean_m = measured.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;
    let mean_p = predicted.iter().copied().fold(T::zero(), |acc, v| acc + v) / n_t;

    let mut cov = T::zero();
    let mut var_m = T::zero();
    let mut var_p = T::zero();
    for (&m, &p) in measured.iter().zip(predicted.iter()) {
        let dm = m - mean_m;
        let dp = p - mean_p;
        cov = cov + dm * dp;
        var_m = var_m + dm * dm;
        var_p = var_p + dp * dp;
    }

    let denom = (var_m * var_p).sqrt();
    if denom == T::zero() {
        return T::zero();
    }

    (cov / denom).max(-T::one()).min(T::one())
}

/// Squared Pearson correlation coefficient.
pub fn pearson_r_squared<T: Float>(measured: &[T], predicted: &[T]) -> T {
    let r = pearson_r(measured, predicted);
    r * r
}
