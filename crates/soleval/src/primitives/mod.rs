//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions and data structures used
//! throughout the crate: error types, the random source, the accumulated
//! prediction history, and the model capability contract. It has zero
//! internal dependencies within the crate apart from the error type.
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Accumulated prediction-vs-truth history.
pub mod history;

/// Model capability contract.
pub mod model;

/// Seeded pseudo-random generation.
pub mod rng;
