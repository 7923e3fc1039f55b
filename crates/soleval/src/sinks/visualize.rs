//! Visualization seam for accumulated prediction history.
//!
//! ## Purpose
//!
//! This module defines the contract a plotting backend must satisfy to
//! receive an evaluation run's accumulated (measured, predicted) pairs,
//! together with the axis bounds the scatter should span. The harness only
//! hands data across this seam; rendering itself lives outside the crate.
//!
//! ## Design notes
//!
//! * **Data-only contract**: A sink receives the model name, two aligned
//!   numeric sequences, and the axis bounds — nothing else.
//! * **Reference line**: The intended rendering is a measured-vs-predicted
//!   scatter with the diagonal identity line marking perfect prediction.
//! * **Domain default**: Bounds default to the representative log-solubility
//!   range (-11, 3); deployments plot other quantities by overriding them.
//!
//! ## Invariants
//!
//! * Measured and predicted slices passed to a sink have equal length and
//!   are aligned by insertion order.
//!
//! ## Non-goals
//!
//! * This module does not render anything.
//! * This module does not persist raw data (see `persist`).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EvalError;

// ============================================================================
// Axis Bounds
// ============================================================================

/// Square axis range for the measured-vs-predicted scatter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds<T> {
    /// Lower bound of both axes.
    pub lower: T,
    /// Upper bound of both axes.
    pub upper: T,
}

impl<T: Float> AxisBounds<T> {
    /// Create bounds spanning `lower..upper` on both axes.
    pub fn new(lower: T, upper: T) -> Self {
        Self { lower, upper }
    }

    /// Representative log-solubility range: -11 to 3 mol/L on both axes.
    pub fn solubility() -> Self {
        Self::new(T::from(-11.0).unwrap(), T::from(3.0).unwrap())
    }

    /// Width of the range.
    pub fn span(&self) -> T {
        self.upper - self.lower
    }
}

impl<T: Float> Default for AxisBounds<T> {
    fn default() -> Self {
        Self::solubility()
    }
}

// ============================================================================
// Visualization Sink
// ============================================================================

/// Consumer of the accumulated prediction history.
pub trait VisualizationSink<T> {
    /// Render the measured-vs-predicted scatter for the named model.
    ///
    /// `measured` and `predicted` are aligned elementwise; `bounds` gives the
    /// square range both axes should span, with the diagonal identity line
    /// denoting perfect prediction.
    fn render(
        &mut self,
        name: &str,
        measured: &[T],
        predicted: &[T],
        bounds: &AxisBounds<T>,
    ) -> Result<(), EvalError>;
}
