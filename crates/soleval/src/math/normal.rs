//! Standard normal quantile approximation.
//!
//! ## Purpose
//!
//! This module approximates the inverse standard normal CDF, used to convert
//! a confidence level into the z-score that scales the Fisher-transform
//! standard error.
//!
//! ## Design notes
//!
//! * **One-sided**: `normal_quantile(p)` is Φ⁻¹(p) directly; callers supply
//!   the cumulative probability they need.
//! * **Approximation**: Acklam's rational approximation, with fast paths for
//!   the common confidence levels.
//!
//! ## Invariants
//!
//! * Monotonically increasing over (0, 1); antisymmetric around p = 0.5.
//! * Out-of-range probabilities map to 0 (callers validate levels upstream).
//!
//! ## Non-goals
//!
//! * This module does not compute the forward normal CDF.
//! * This module does not validate the confidence level (engine responsibility).

// External dependencies
use num_traits::Float;

// ============================================================================
// Quantile Function
// ============================================================================

/// Approximate the standard normal quantile Φ⁻¹(p).
pub fn normal_quantile<T: Float>(p: T) -> T {
    let pf = p.to_f64().unwrap_or(f64::NAN);

    // Fast paths for common one-sided levels
    let z = if (pf - 0.95).abs() < 1e-9 {
        1.6448536269514722
    } else if (pf - 0.975).abs() < 1e-9 {
        1.959963984540054
    } else if (pf - 0.99).abs() < 1e-9 {
        2.3263478740408408
    } else if (pf - 0.995).abs() < 1e-9 {
        2.5758293035489004
    } else {
        acklam_inverse_cdf(pf)
    };

    T::from(z).unwrap_or_else(T::zero)
}

/// Rational approximation of the inverse standard normal CDF.
fn acklam_inverse_cdf(p: f64) -> f64 {
    if p <= 0.0 || p >= 1.0 {
        return 0.0;
    }

    // Coefficients for central region
    const A: [f64; 6] = [
        -3.969_683_028_665_376e1,
        2.209_460_984_245_205e2,
        -2.759_285_104_469_687e2,
        1.383_577_518_672_69e2,
        -3.066_479_806_614_716e1,
        2.506_628_277_459_239e0,
    ];
    const B: [f64; 5] = [
        -5.447_609_879_822_406e1,
        1.615_858_368_580_409e2,
        -1.556_989_798_598_866e2,
        6.680_131_188_771_972e1,
        -1.328_068_155_288_572e1,
    ];

    // Coefficients for tail regions
    const C: [f64; 6] = [
        -7.784_894_002_430_293e-3,
        -3.223_964_580_411_365e-1,
        -2.400_758_277_161_838e0,
        -2.549_732_539_343_734e0,
        4.374_664_141_464_968e0,
        2.938_163_982_698_783e0,
    ];
    const D: [f64; 4] = [
        7.784_695_709_041_462e-3,
        3.224_671_290_700_398e-1,
        2.445_134_137_142_996e0,
        3.754_408_661_907_416e0,
    ];

    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 0.97575;

    if p < P_LOW {
        // Lower tail
        let q = Float::sqrt(-2.0 * Float::ln(p));
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        num / den
    } else if p > P_HIGH {
        // Upper tail
        let q = Float::sqrt(-2.0 * Float::ln(1.0 - p));
        let num = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
        let den = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
        -(num / den)
    } else {
        // Central region
        let q = p - 0.5;
        let r = q * q;
        let num = (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q;
        let den = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
        num / den
    }
}
