//! Seeded pseudo-random generation for shuffling and noise injection.
//!
//! ## Purpose
//!
//! This module provides the minimal random source used by fold shuffling,
//! label randomization, and Gaussian noise synthesis. Randomness is always
//! routed through an explicitly constructed generator so every randomized
//! operation is independently reproducible from a seed.
//!
//! ## Design notes
//!
//! * **LCG core**: A 64-bit linear congruential generator; small, allocation-free,
//!   and available under `no_std`.
//! * **Gaussian sampling**: Box–Muller on top of the uniform stream, computed
//!   through `Float` ops so it works without the standard library.
//! * **Entropy**: `from_entropy` derives a fresh seed per call, making unseeded
//!   shuffles vary run-to-run while seeded ones stay bit-reproducible.
//!
//! ## Invariants
//!
//! * The same seed always produces the same stream.
//! * `next_unit` values lie in [0, 1).
//!
//! ## Non-goals
//!
//! * This module does not provide cryptographic randomness.
//! * This module does not manage global random state.

// External dependencies
use core::sync::atomic::{AtomicU64, Ordering};
use num_traits::Float;

// ============================================================================
// Entropy Source
// ============================================================================

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0x9E37_79B9_7F4A_7C15);

/// Derive a fresh seed for unseeded (per-call random) operation.
#[cfg(feature = "std")]
pub fn entropy_seed() -> u64 {
    use std::collections::hash_map::RandomState;
    use std::hash::{BuildHasher, Hasher};

    let tick = SEED_COUNTER.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed);
    RandomState::new().build_hasher().finish() ^ tick
}

/// Derive a fresh seed for unseeded operation.
///
/// Without an operating system there is no entropy source; a mixed monotonic
/// counter still makes successive unseeded calls differ within a process.
#[cfg(not(feature = "std"))]
pub fn entropy_seed() -> u64 {
    // splitmix64 finalizer over the counter
    let mut z = SEED_COUNTER.fetch_add(0x9E37_79B9_7F4A_7C15, Ordering::Relaxed);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

// ============================================================================
// Generator
// ============================================================================

/// Minimal seeded PRNG.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from an explicit seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Create a generator from a fresh entropy-derived seed.
    pub fn from_entropy() -> Self {
        Self::new(entropy_seed())
    }

    /// Next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Next uniform value in [0, 1).
    ///
    /// Uses 24 random bits so the value stays strictly below 1 even in f32.
    pub fn next_unit<T: Float>(&mut self) -> T {
        let raw = T::from(self.next_u32() >> 8).unwrap();
        raw / T::from(16_777_216.0).unwrap()
    }

    /// Next standard-normal value (mean 0, standard deviation 1).
    ///
    /// Box–Muller transform; the uniform draw is re-sampled away from zero
    /// so the logarithm stays finite.
    pub fn next_gaussian<T: Float>(&mut self) -> T {
        let mut u = self.next_unit::<T>();
        while u <= T::zero() {
            u = self.next_unit::<T>();
        }
        let v = self.next_unit::<T>();

        let minus_two = T::from(-2.0).unwrap();
        let tau = T::from(core::f64::consts::TAU).unwrap();
        (minus_two * u.ln()).sqrt() * (tau * v).cos()
    }

    /// Shuffle a slice in place (Fisher–Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let n = items.len();
        for i in (1..n).rev() {
            let j = (self.next_u32() as usize) % (i + 1);
            items.swap(i, j);
        }
    }
}
