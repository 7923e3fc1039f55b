//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the evaluation protocol:
//! - Input and parameter validation
//! - The cross-validation harness driving fit/score cycles over a model
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Sinks
//!   ↓
//! Layer 3: Evaluation
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Cross-validation orchestration.
pub mod harness;

/// Input and parameter validation.
pub mod validator;
