//! Tests for the visualization seam and tab-separated persistence.
//!
//! These tests verify the data handed across the sink boundary and the two
//! file formats the harness produces:
//! - The visualization sink receives the full aligned history and bounds
//! - Pair files hold one `measured\tpredicted` line per accumulated pair
//! - Report files collect one summary record per training run
//!
//! ## Test Organization
//!
//! 1. **Visualization** - Recording sink, axis bounds
//! 2. **Pair Persistence** - Raw-data file layout
//! 3. **Report Persistence** - Summary record appending

use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;

use soleval::prelude::*;

// ============================================================================
// Helpers
// ============================================================================

/// Sink that records everything handed across the boundary.
#[derive(Default)]
struct RecordingSink {
    name: String,
    measured: Vec<f64>,
    predicted: Vec<f64>,
    bounds: Option<AxisBounds<f64>>,
    calls: usize,
}

impl VisualizationSink<f64> for RecordingSink {
    fn render(
        &mut self,
        name: &str,
        measured: &[f64],
        predicted: &[f64],
        bounds: &AxisBounds<f64>,
    ) -> Result<(), EvalError> {
        self.name = name.to_string();
        self.measured = measured.to_vec();
        self.predicted = predicted.to_vec();
        self.bounds = Some(*bounds);
        self.calls += 1;
        Ok(())
    }
}

/// Identity model over f64 inputs.
struct EchoModel;

impl Model for EchoModel {
    type Input = f64;
    type Value = f64;

    fn fit(&mut self, _inputs: &[f64], _labels: &[f64]) -> Result<(), EvalError> {
        Ok(())
    }

    fn predict(&self, inputs: &[f64]) -> Result<Vec<f64>, EvalError> {
        Ok(inputs.to_vec())
    }
}

fn temp_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!("soleval_{}_{}.tsv", tag, std::process::id()))
}

// ============================================================================
// Visualization Tests
// ============================================================================

/// Test the default axis bounds.
///
/// Plot bounds default to the representative log-solubility range.
#[test]
fn test_default_bounds_are_solubility_range() {
    let bounds = AxisBounds::<f64>::default();

    assert_relative_eq!(bounds.lower, -11.0, epsilon = 1e-12);
    assert_relative_eq!(bounds.upper, 3.0, epsilon = 1e-12);
    assert_relative_eq!(bounds.span(), 14.0, epsilon = 1e-12);
}

/// Test that rendering hands the full aligned history to the sink.
#[test]
fn test_render_delivers_history() {
    let mut harness = Evaluation::new()
        .name("echo")
        .build(EchoModel)
        .expect("valid config");

    harness
        .score(&[1.0, 2.0, 3.0], &[1.5, 2.5, 3.5], true)
        .expect("score");

    let mut sink = RecordingSink::default();
    harness.render(&mut sink).expect("render");

    assert_eq!(sink.calls, 1);
    assert_eq!(sink.name, "echo");
    assert_eq!(sink.measured, vec![1.5, 2.5, 3.5]);
    assert_eq!(sink.predicted, vec![1.0, 2.0, 3.0]);
    assert_eq!(sink.bounds, Some(AxisBounds::default()));
}

/// Test custom bounds flowing through to the sink.
#[test]
fn test_custom_bounds_reach_sink() {
    let mut harness = Evaluation::new()
        .bounds(AxisBounds::new(-5.0, 5.0))
        .build(EchoModel)
        .expect("valid config");

    let mut sink = RecordingSink::default();
    harness.render(&mut sink).expect("render");
    assert_eq!(sink.bounds, Some(AxisBounds::new(-5.0, 5.0)));
}

// ============================================================================
// Pair Persistence Tests
// ============================================================================

/// Test the raw-pair file layout.
///
/// One tab-separated line per accumulated pair, in insertion order.
#[test]
fn test_write_pairs_layout() {
    let mut history = PredictionHistory::new();
    history.append(&[1.5, -2.25], &[1.0, -2.0]);
    history.append(&[0.5], &[0.75]);

    let path = temp_path("pairs");
    write_pairs(&path, &history).expect("write pairs");

    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines, vec!["1.5\t1", "-2.25\t-2", "0.5\t0.75"]);

    fs::remove_file(&path).expect("cleanup");
}

/// Test plotting with a persistence file.
///
/// `plot` renders to the sink and dumps the same pairs to disk.
#[test]
fn test_plot_with_out_file() {
    let mut harness = Evaluation::new().build(EchoModel).expect("valid config");
    harness.score(&[2.0, 4.0], &[2.5, 4.5], true).expect("score");

    let path = temp_path("plot");
    let mut sink = RecordingSink::default();
    harness.plot(&mut sink, Some(&path)).expect("plot");

    assert_eq!(sink.calls, 1);
    let contents = fs::read_to_string(&path).expect("read back");
    assert_eq!(contents.lines().count(), harness.history().len());

    fs::remove_file(&path).expect("cleanup");
}

// ============================================================================
// Report Persistence Tests
// ============================================================================

/// Test that summary records append across runs.
#[test]
fn test_append_summary_collects_lines() {
    let path = temp_path("report");
    let _ = fs::remove_file(&path);

    let summary = EvaluationSummary::from_tuples(&[
        MetricTuple::new(1.0, 2.0, 3.0),
        MetricTuple::new(3.0, 4.0, 5.0),
    ]);

    append_summary(&path, "first", &summary).expect("append");
    append_summary(&path, "second", &summary).expect("append");

    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "first\t2\t1\t3\t1\t4\t1");
    assert_eq!(lines[1], "second\t2\t1\t3\t1\t4\t1");
    for line in &lines {
        assert_eq!(line.split('\t').count(), 7);
    }

    fs::remove_file(&path).expect("cleanup");
}

/// Test the report path wired through training.
#[test]
fn test_train_with_report() {
    let data: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let path = temp_path("train_report");
    let _ = fs::remove_file(&path);

    let mut harness = Evaluation::new()
        .folds(5)
        .seed(17)
        .name("echo")
        .build(EchoModel)
        .expect("valid config");

    let summary = harness
        .train_with_report(&data, &data, &path)
        .expect("train with report");

    let contents = fs::read_to_string(&path).expect("read back");
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0], summary.tsv_record("echo"));

    fs::remove_file(&path).expect("cleanup");
}
