//! Shared execution drivers for the estimator contracts.
//!
//! ## Purpose
//!
//! This module orchestrates a compute/fit call end to end: dataset-kind
//! resolution, validation, the pre-flight cancellation check, dispatch into
//! the method core, and assembly of the public result (R² and elapsed time
//! for regression).
//!
//! ## Design notes
//!
//! * **One driver per contract**: [`run_location`] implements the scalar
//!   contract, [`run_regression`] the regression contract. The algorithm
//!   cores stay free of validation and timing concerns.
//! * **Timing scope**: Only the variant core is measured; validation and R²
//!   assembly happen outside the timed closure.
//! * **Pre-flight checkpoint**: A pre-cancelled token aborts before any
//!   work, so even loop-free methods honor cancellation.
//!
//! ## Invariants
//!
//! * Cores only ever see non-empty, finite input of the right kind.
//! * No diagnostics are produced for a cancelled or failed run.
//!
//! ## Non-goals
//!
//! * This module does not implement the estimation math.
//! * This module does not cache diagnostics (the API layer owns that).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::location::LocationMethod;
use crate::algorithms::regression::RegressionMethod;
use crate::engine::control::Control;
use crate::engine::output::{LocationEstimate, RegressionFit};
use crate::engine::timing::timed;
use crate::engine::validator::Validator;
use crate::evaluation::diagnostics::r_squared;
use crate::primitives::dataset::Dataset;
use crate::primitives::errors::EstimateError;

// ============================================================================
// Scalar Driver
// ============================================================================

/// Validate a scalar dataset and run a location method core over it.
pub(crate) fn run_location<T: Float>(
    method: LocationMethod,
    delta: T,
    trim_fraction: T,
    dataset: &Dataset<T>,
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let values = dataset.as_scalars().ok_or_else(|| {
        EstimateError::InvalidInput("expected a scalar dataset, got coordinate pairs".into())
    })?;

    Validator::validate_scalars(values)?;

    // A pre-cancelled token must abort before any work is done.
    control.checkpoint()?;

    method.compute_core(values, delta, trim_fraction, control)
}

// ============================================================================
// Regression Driver
// ============================================================================

/// Validate a point dataset, time the method core, and assemble the fit.
///
/// Returns the public fit together with the core's diagnostic sequence for
/// the caller to cache.
pub(crate) fn run_regression<T: Float>(
    method: RegressionMethod,
    delta: T,
    dataset: &Dataset<T>,
    control: &Control<'_>,
) -> Result<(RegressionFit<T>, Option<Vec<T>>), EstimateError> {
    let pts = dataset.as_points().ok_or_else(|| {
        EstimateError::InvalidInput("expected a point dataset, got scalar samples".into())
    })?;

    Validator::validate_points(pts)?;

    // A pre-cancelled token must abort before any work is done.
    control.checkpoint()?;

    // Elapsed time wraps the variant core only.
    let core = timed(|| method.fit_core(pts, delta, control))?;

    let fit = RegressionFit {
        slope: core.value.slope,
        intercept: core.value.intercept,
        median_squared_residual: core.value.median_squared_residual,
        r_squared: r_squared(pts, core.value.slope, core.value.intercept),
        elapsed: core.elapsed,
    };

    Ok((fit, core.value.processed))
}
