//! Layer 4: Sinks
//!
//! # Purpose
//!
//! This layer carries evaluation results out of the harness:
//! - The visualization seam handed the accumulated prediction history
//! - Tab-separated persistence of summaries and raw prediction pairs
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Sinks ← You are here
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Tab-separated file persistence.
#[cfg(feature = "std")]
pub mod persist;

/// Visualization seam.
pub mod visualize;
