//! Cross-validation orchestration over a model capability.
//!
//! ## Purpose
//!
//! This module drives the fit/evaluate protocol: it partitions the dataset,
//! repeatedly fits the owned model, scores held-out slices, accumulates the
//! prediction history, and aggregates per-fold metrics into a summary. All
//! orchestration is expressed purely in terms of the model's two capability
//! operations plus the fold splitter and the metric functions.
//!
//! ## Design notes
//!
//! * **Sequential folds**: Each fold's fit mutates the same model instance,
//!   so fold iteration is strictly serialized.
//! * **Failure transparency**: Fit/predict errors propagate unchanged and
//!   abort the enclosing run; the harness neither retries nor suppresses.
//! * **Null baseline**: Label randomization shuffles a copy of the labels
//!   before splitting, so a real signal can be compared against chance.
//!   The caller's label slice is never modified.
//! * **Ensemble testing**: `test` refits on k random train partitions and
//!   predicts a fixed external test set after each; the per-fold validate
//!   slice stays unused, which preserves the statistical meaning of the
//!   produced prediction ensemble.
//!
//! ## Key concepts
//!
//! * **Scoring triple**: (MSE, MAE, Pearson r²); the squared correlation
//!   measures linear association irrespective of scale or offset bias.
//! * **History persistence**: Every persisting score appends its aligned
//!   (truths, predictions) pairs to the harness-owned history.
//!
//! ## Invariants
//!
//! * The history grows only through persisting scores and resets only via
//!   `clear_history`.
//! * Seeded runs are bit-reproducible; fold shuffling and label permutation
//!   draw from independently salted generators.
//!
//! ## Non-goals
//!
//! * This module does not implement any concrete model.
//! * This module does not parallelize folds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::path::Path;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
#[cfg(feature = "std")]
use core::fmt::Display;
use log::info;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::folds::FoldSplitter;
use crate::evaluation::report::{EvaluationSummary, MetricTuple};
use crate::math::metrics;
use crate::primitives::errors::EvalError;
use crate::primitives::history::PredictionHistory;
use crate::primitives::model::Model;
use crate::primitives::rng::SimpleRng;
#[cfg(feature = "std")]
use crate::sinks::persist;
use crate::sinks::visualize::{AxisBounds, VisualizationSink};

/// Salt separating the label-permutation stream from fold shuffling, so both
/// are independently reproducible from one configured seed.
const LABEL_SHUFFLE_SALT: u64 = 0x6C61_6265_6C73;

// ============================================================================
// Harness
// ============================================================================

/// Cross-validation harness owning a model and its prediction history.
#[derive(Debug)]
pub struct Harness<M: Model> {
    model: M,
    name: String,
    folds: usize,
    seed: Option<u64>,
    randomize_labels: bool,
    bounds: AxisBounds<M::Value>,
    history: PredictionHistory<M::Value>,
}

impl<M: Model> Harness<M> {
    /// Assemble a harness from validated configuration (see `api::Evaluation`).
    pub(crate) fn new(
        model: M,
        name: String,
        folds: usize,
        seed: Option<u64>,
        randomize_labels: bool,
        bounds: AxisBounds<M::Value>,
    ) -> Self {
        Self {
            model,
            name,
            folds,
            seed,
            randomize_labels,
            bounds,
            history: PredictionHistory::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Display name used in logs and report records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Borrow the owned model.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Mutably borrow the owned model.
    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Consume the harness, returning the owned model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Accumulated prediction-vs-truth history.
    pub fn history(&self) -> &PredictionHistory<M::Value> {
        &self.history
    }

    /// Drop all accumulated history pairs.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Score the fitted model against measured truths.
    ///
    /// Returns the (MSE, MAE, Pearson r²) triple. With `persist`, the
    /// aligned (truths, predictions) pairs are appended to the history.
    pub fn score(
        &mut self,
        inputs: &[M::Input],
        truths: &[M::Value],
        persist: bool,
    ) -> Result<MetricTuple<M::Value>, EvalError> {
        Validator::validate_dataset(inputs, truths)?;

        let predicted = self.model.predict(inputs)?;
        Validator::validate_predictions(inputs.len(), predicted.len())?;

        let tuple = MetricTuple::new(
            metrics::mean_squared_error(truths, &predicted),
            metrics::mean_absolute_error(truths, &predicted),
            metrics::pearson_r_squared(truths, &predicted),
        );

        if persist {
            self.history.append(truths, &predicted);
        }

        Ok(tuple)
    }

    // ========================================================================
    // Cross-Validation
    // ========================================================================

    /// Cross-validate the model over k random train/validate partitions.
    ///
    /// Each fold fits on its train slice and scores the held-out validate
    /// slice (persisting to the history); the per-fold triples are
    /// aggregated into elementwise mean and standard deviation.
    pub fn train(
        &mut self,
        inputs: &[M::Input],
        labels: &[M::Value],
    ) -> Result<EvaluationSummary<M::Value>, EvalError>
    where
        M::Input: Clone,
    {
        Validator::validate_dataset(inputs, labels)?;

        let shuffled;
        let labels: &[M::Value] = if self.randomize_labels {
            shuffled = self.shuffled_labels(labels);
            &shuffled
        } else {
            labels
        };

        let folds = self.splitter().split(inputs.len())?;
        let mut tuples = Vec::with_capacity(folds.len());
        for (fold, partition) in folds.iter().enumerate() {
            info!(
                "model '{}' training fold {}/{}",
                self.name,
                fold + 1,
                folds.len()
            );
            let (train_inputs, train_labels) = gather(inputs, labels, &partition.train);
            self.model.fit(&train_inputs, &train_labels)?;

            let (validate_inputs, validate_labels) = gather(inputs, labels, &partition.validate);
            tuples.push(self.score(&validate_inputs, &validate_labels, true)?);
        }

        Ok(EvaluationSummary::from_tuples(&tuples))
    }

    /// Cross-validate and append the summary record to a report file.
    #[cfg(feature = "std")]
    pub fn train_with_report<P: AsRef<Path>>(
        &mut self,
        inputs: &[M::Input],
        labels: &[M::Value],
        report_path: P,
    ) -> Result<EvaluationSummary<M::Value>, EvalError>
    where
        M::Input: Clone,
        M::Value: Display,
    {
        let summary = self.train(inputs, labels)?;
        persist::append_summary(report_path, &self.name, &summary)?;
        Ok(summary)
    }

    /// Produce an ensemble of predictions for a fixed external test set.
    ///
    /// For each of k random partitions, the model is refitted on the train
    /// slice and then predicts `test_inputs` in full. The validate slice of
    /// each partition stays unused: every refit is judged against the same
    /// held-out test set, yielding k prediction sequences for downstream
    /// uncertainty estimation.
    pub fn test(
        &mut self,
        inputs: &[M::Input],
        labels: &[M::Value],
        test_inputs: &[M::Input],
    ) -> Result<Vec<Vec<M::Value>>, EvalError>
    where
        M::Input: Clone,
    {
        Validator::validate_dataset(inputs, labels)?;
        if test_inputs.is_empty() {
            return Err(EvalError::EmptyInput);
        }

        let folds = self.splitter().split(inputs.len())?;
        let mut ensemble = Vec::with_capacity(folds.len());
        for (fold, partition) in folds.iter().enumerate() {
            info!(
                "model '{}' refitting fold {}/{}",
                self.name,
                fold + 1,
                folds.len()
            );
            let (train_inputs, train_labels) = gather(inputs, labels, &partition.train);
            self.model.fit(&train_inputs, &train_labels)?;

            let predicted = self.model.predict(test_inputs)?;
            Validator::validate_predictions(test_inputs.len(), predicted.len())?;
            ensemble.push(predicted);
        }

        Ok(ensemble)
    }

    // ========================================================================
    // Visualization & Persistence
    // ========================================================================

    /// Hand the accumulated history to a visualization sink.
    pub fn render<S: VisualizationSink<M::Value>>(&self, sink: &mut S) -> Result<(), EvalError> {
        sink.render(
            &self.name,
            self.history.measured(),
            self.history.predicted(),
            &self.bounds,
        )
    }

    /// Render the history and optionally write each (measured, predicted)
    /// pair as a tab-separated line to `out_file`.
    #[cfg(feature = "std")]
    pub fn plot<S: VisualizationSink<M::Value>>(
        &self,
        sink: &mut S,
        out_file: Option<&Path>,
    ) -> Result<(), EvalError>
    where
        M::Value: Display,
    {
        self.render(sink)?;
        if let Some(path) = out_file {
            persist::write_pairs(path, &self.history)?;
        }
        Ok(())
    }

    // ========================================================================
    // Internal Helpers
    // ========================================================================

    fn splitter(&self) -> FoldSplitter {
        let splitter = FoldSplitter::new(self.folds);
        match self.seed {
            Some(seed) => splitter.seed(seed),
            None => splitter,
        }
    }

    /// Permuted copy of the labels for the y-randomization null baseline.
    fn shuffled_labels(&self, labels: &[M::Value]) -> Vec<M::Value> {
        let mut owned = labels.to_vec();
        let mut rng = match self.seed {
            Some(seed) => SimpleRng::new(seed ^ LABEL_SHUFFLE_SALT),
            None => SimpleRng::from_entropy(),
        };
        rng.shuffle(&mut owned);
        owned
    }
}

/// Build index-selected input/label subsets for one fold.
fn gather<X: Clone, T: Float>(
    inputs: &[X],
    labels: &[T],
    indices: &[usize],
) -> (Vec<X>, Vec<T>) {
    let mut xs = Vec::with_capacity(indices.len());
    let mut ys = Vec::with_capacity(indices.len());
    for &idx in indices {
        xs.push(inputs[idx].clone());
        ys.push(labels[idx]);
    }
    (xs, ys)
}
