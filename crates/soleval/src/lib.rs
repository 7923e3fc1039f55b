//! # soleval — cross-validation and evaluation for solubility predictors
//!
//! A harness that standardizes how regression-style predictive models (here,
//! molecular solubility predictors driven by chemical structure strings) are
//! trained, validated, tested against held-out data, scored with multiple
//! statistical metrics, and have their predictions visualized and persisted.
//!
//! ## What it does
//!
//! The core is the k-fold cross-validation and scoring protocol: the dataset
//! index range is partitioned k ways, the model under evaluation is fitted
//! and scored once per fold, and the per-fold (MSE, MAE, Pearson r²) triples
//! are aggregated into mean/standard-deviation summaries. Around that core
//! sit confidence bounds for observed correlations (Fisher z-transform), a
//! Monte-Carlo noise-ceiling estimate of the best correlation achievable
//! given experimental error, a y-randomization null baseline, and sinks for
//! plotting and tab-separated persistence.
//!
//! Any concrete model plugs in through the two-operation [`prelude::Model`]
//! capability contract — `fit` on labeled data, `predict` on unlabeled data.
//!
//! ## Quick Start
//!
//! ```rust
//! use soleval::prelude::*;
//!
//! // A minimal concrete model: predicts the mean training label.
//! struct MeanModel {
//!     mean: f64,
//! }
//!
//! impl Model for MeanModel {
//!     type Input = String;
//!     type Value = f64;
//!
//!     fn fit(&mut self, _inputs: &[String], labels: &[f64]) -> Result<(), EvalError> {
//!         self.mean = labels.iter().sum::<f64>() / labels.len() as f64;
//!         Ok(())
//!     }
//!
//!     fn predict(&self, inputs: &[String]) -> Result<Vec<f64>, EvalError> {
//!         Ok(vec![self.mean; inputs.len()])
//!     }
//! }
//!
//! let smiles: Vec<String> = ["CCO", "CCC", "CCN", "CCCl", "CCBr", "CCI", "CCF", "CC=O", "CC#N"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let log_s = vec![-0.2, -1.4, -0.9, -2.1, -2.6, -3.0, -0.5, -0.7, -1.1];
//!
//! // Build the harness
//! let mut harness = Evaluation::new()
//!     .folds(3)           // 3-fold cross-validation
//!     .seed(42)           // reproducible splits
//!     .name("mean")       // name used in logs and reports
//!     .build(MeanModel { mean: 0.0 })?;
//!
//! // Cross-validate
//! let summary = harness.train(&smiles, &log_s)?;
//! assert_eq!(summary.folds, 3);
//! assert!(summary.mean.mse >= 0.0);
//!
//! // Every validate-slice prediction was accumulated for plotting
//! assert_eq!(harness.history().len(), smiles.len());
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ## Metrics and calibration
//!
//! The metric functions are pure and usable on their own, and the
//! noise-ceiling estimate bounds what any model could achieve given the
//! measurement error of the reference labels:
//!
//! ```rust
//! use soleval::prelude::*;
//!
//! let measured: Vec<f64> = vec![1.0, 2.0, 3.0, 4.0];
//! let predicted = vec![1.1, 1.9, 3.2, 3.8];
//!
//! let r = pearson_r(&measured, &predicted);
//! let (lower, upper) = pearson_confidence(r, 25, 0.95)?;
//! assert!(lower <= r && r <= upper);
//!
//! // With no experimental noise the achievable correlation is perfect.
//! let ceiling = max_possible_correlation(&measured, 0.0, 100, Some(7), pearson_r)?;
//! assert!((ceiling - 1.0).abs() < 1e-12);
//! # Result::<(), EvalError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Every fallible operation returns `Result<_, EvalError>`; the `?` operator
//! is idiomatic. Failures raised by the concrete model's `fit`/`predict`
//! propagate unchanged — a failed fit aborts the enclosing run, since the
//! harness cannot meaningfully recover from a defective model.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency; the file sinks (report and
//! raw-pair persistence) are unavailable there, everything else works:
//!
//! ```toml
//! [dependencies]
//! soleval = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - errors, random source, history, model contract.
mod primitives;

// Layer 2: Math - pure metric and quantile functions.
mod math;

// Layer 3: Evaluation - folds, confidence, calibration, aggregation.
mod evaluation;

// Layer 4: Sinks - visualization seam and file persistence.
mod sinks;

// Layer 5: Engine - validation and cross-validation orchestration.
mod engine;

// High-level fluent API for configuring evaluations.
mod api;

// Standard evaluation prelude.
pub mod prelude {
    pub use crate::api::{Evaluation, Harness, DEFAULT_FOLDS};
    pub use crate::evaluation::calibration::{max_possible_correlation, DEFAULT_NOISE_CYCLES};
    pub use crate::evaluation::confidence::pearson_confidence;
    pub use crate::evaluation::folds::{Fold, FoldSplitter};
    pub use crate::evaluation::report::{EvaluationSummary, MetricTuple};
    pub use crate::math::metrics::{
        mean_absolute_error, mean_squared_error, pearson_r, pearson_r_squared, r_squared, rmse,
    };
    pub use crate::primitives::errors::EvalError;
    pub use crate::primitives::history::PredictionHistory;
    pub use crate::primitives::model::Model;
    pub use crate::sinks::visualize::{AxisBounds, VisualizationSink};

    #[cfg(feature = "std")]
    pub use crate::sinks::persist::{append_summary, write_pairs};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod sinks {
        pub use crate::sinks::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
