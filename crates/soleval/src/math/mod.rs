//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the
//! harness:
//! - Regression error and correlation metrics
//! - The standard normal quantile approximation
//!
//! These are reusable building blocks with no orchestration-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Sinks
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Error and correlation metrics.
pub mod metrics;

/// Standard normal quantile approximation.
pub mod normal;
