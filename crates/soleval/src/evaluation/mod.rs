//! Layer 3: Evaluation
//!
//! # Purpose
//!
//! This layer provides the statistical machinery of the harness:
//! - K-fold partitioning of the dataset index range
//! - Confidence bounds for observed correlations
//! - Noise-ceiling correlation estimation
//! - Per-fold metric aggregation and report records
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
//! Layer 3: Evaluation ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Noise-ceiling correlation estimation.
pub mod calibration;

/// Confidence bounds for a Pearson correlation.
pub mod confidence;

/// K-fold partitioning.
pub mod folds;

/// Metric tuples and cross-fold aggregation.
pub mod report;
