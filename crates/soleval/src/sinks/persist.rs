//! Tab-separated persistence of summaries and raw prediction pairs.
//!
//! ## Purpose
//!
//! This module writes the two file formats the harness produces: the report
//! file collecting one summary line per training run, and the raw-data file
//! holding every accumulated (measured, predicted) pair.
//!
//! ## Design notes
//!
//! * **Append vs. create**: Summary lines append, so successive training runs
//!   collect in one report; pair dumps recreate their file per call.
//! * **Scoped handles**: Files are opened in function scope and closed on all
//!   exit paths, including write errors; no partial-file cleanup beyond that.
//!
//! ## Invariants
//!
//! * Report lines follow the fixed record layout of
//!   [`EvaluationSummary::tsv_record`].
//! * Pair files contain exactly one `measured\tpredicted` line per
//!   accumulated pair, in insertion order.
//!
//! ## Non-goals
//!
//! * This module does not parse the files back.
//! * This module does not buffer across calls or rotate files.

// External dependencies
use core::fmt::Display;
use num_traits::Float;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

// Internal dependencies
use crate::evaluation::report::EvaluationSummary;
use crate::primitives::errors::EvalError;
use crate::primitives::history::PredictionHistory;

// ============================================================================
// Report File
// ============================================================================

/// Append one summary record for the named model to the report file.
///
/// The file is created if missing.
pub fn append_summary<P, T>(
    path: P,
    name: &str,
    summary: &EvaluationSummary<T>,
) -> Result<(), EvalError>
where
    P: AsRef<Path>,
    T: Float + Display,
{
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{}", summary.tsv_record(name))?;
    out.flush()?;
    Ok(())
}

// ============================================================================
// Raw Pair File
// ============================================================================

/// Write every accumulated (measured, predicted) pair as a tab-separated line.
///
/// An existing file at `path` is replaced.
pub fn write_pairs<P, T>(path: P, history: &PredictionHistory<T>) -> Result<(), EvalError>
where
    P: AsRef<Path>,
    T: Float + Display,
{
    let mut out = BufWriter::new(File::create(path)?);
    for (measured, predicted) in history.pairs() {
        writeln!(out, "{measured}\t{predicted}")?;
    }
    out.flush()?;
    Ok(())
}
