//! Robust line-fitting estimators.
//!
//! ## Purpose
//!
//! This module implements the three robust regression methods: Huber
//! iteratively-reweighted least squares, exact least median of squares over
//! exhaustive point pairs, and the Theil-Sen pairwise-slope fit. Each
//! consumes an ordered point sequence and produces a line plus its median
//! squared residual; the engine layers R² and timing on top.
//!
//! ## Design notes
//!
//! * **Sum-type dispatch**: [`RegressionMethod`] is a tagged variant per
//!   algorithm; `fit_core` dispatches by matching on the variant.
//! * **Fixed IRLS schedule**: The Huber fit runs exactly 20 reweighting
//!   iterations with no convergence check, so outputs are reproducible
//!   run-to-run.
//! * **Exhaustive LMS**: Every point pair is a candidate line, scored by the
//!   median of squared residuals over all points. O(n³ log n), and
//!   impractical beyond a few hundred points, kept deliberately.
//! * **Degenerate pairs**: Pairs sharing an x-coordinate define no slope and
//!   are skipped deterministically; the progress counter still advances.
//!   Only when no valid pair exists at all does the fit fail with
//!   [`EstimateError::DegenerateGeometry`].
//!
//! ## Key concepts
//!
//! * **Tie conventions**: The Theil-Sen regression slope and intercept use
//!   the true median (average of the two central elements on even counts),
//!   unlike the scalar Theil-Sen mode; the median squared residual uses the
//!   element at index `len/2`. Both rules are deliberate.
//!
//! ## Invariants
//!
//! * Inputs hold at least 2 finite points (validated by the engine).
//! * Cancellation is polled once per pair or per IRLS iteration.
//!
//! ## Non-goals
//!
//! * This module does not compute R² or measure elapsed time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::control::Control;
use crate::evaluation::diagnostics::{median_squared_residual, squared_residuals};
use crate::math::linalg::{ols_line, weighted_line};
use crate::math::median::{median_sorted, sort_ascending};
use crate::primitives::dataset::Point;
use crate::primitives::errors::EstimateError;

// ============================================================================
// Regression Method
// ============================================================================

/// Robust line-fitting method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegressionMethod {
    /// Huber IRLS - M-estimator fit, default.
    #[default]
    Huber,

    /// Exact least median of squares over exhaustive point pairs.
    Lms,

    /// Theil-Sen - median of pairwise slopes.
    TheilSen,
}

// ============================================================================
// Core Output
// ============================================================================

/// Raw output of a regression core, before R² and timing are layered on.
#[derive(Debug, Clone)]
pub(crate) struct RegressionCore<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Median of the squared residuals against the fitted line.
    pub median_squared_residual: T,

    /// Method-specific diagnostic sequence: sorted pairwise slopes
    /// (TheilSen) or best-line squared residuals in point order (LMS).
    pub processed: Option<Vec<T>>,
}

// ============================================================================
// Implementation
// ============================================================================

impl RegressionMethod {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Default Huber tuning constant (95% efficiency threshold).
    pub const DEFAULT_DELTA: f64 = 1.345;

    /// Fixed number of IRLS reweighting iterations.
    pub const IRLS_ITERATIONS: usize = 20;

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run the method core over validated points.
    ///
    /// `delta` applies to [`RegressionMethod::Huber`]; the other methods
    /// ignore it.
    pub(crate) fn fit_core<T: Float>(
        &self,
        pts: &[Point<T>],
        delta: T,
        control: &Control<'_>,
    ) -> Result<RegressionCore<T>, EstimateError> {
        match self {
            Self::Huber => huber_core(pts, delta, control),
            Self::Lms => lms_core(pts, control),
            Self::TheilSen => theil_sen_core(pts, control),
        }
    }
}

// ============================================================================
// Huber IRLS
// ============================================================================

/// OLS seed refined by 20 rounds of Huber-weighted least squares.
fn huber_core<T: Float>(
    pts: &[Point<T>],
    delta: T,
    control: &Control<'_>,
) -> Result<RegressionCore<T>, EstimateError> {
    let degenerate = || EstimateError::DegenerateGeometry("all x-coordinates coincide".into());

    // Step 1: Initial guess via ordinary least squares.
    let (mut slope, mut intercept) = ols_line(pts).ok_or_else(degenerate)?;

    // Step 2: Fixed IRLS schedule, one cancellation check per iteration.
    let mut weights = Vec::with_capacity(pts.len());
    for iter in 0..RegressionMethod::IRLS_ITERATIONS {
        control.checkpoint()?;

        weights.clear();
        for p in pts {
            let r = p.y - (slope * p.x + intercept);
            let abs = r.abs();
            let w = if abs <= delta { T::one() } else { delta / abs };
            weights.push(w);
        }

        let (s, b) = weighted_line(pts, &weights).ok_or_else(degenerate)?;
        slope = s;
        intercept = b;

        control.report((iter * 100 / RegressionMethod::IRLS_ITERATIONS) as u8);
    }

    // Step 3: Median squared residual of the final line.
    let med_sq = median_squared_residual(pts, slope, intercept);

    Ok(RegressionCore {
        slope,
        intercept,
        median_squared_residual: med_sq,
        processed: None,
    })
}

// ============================================================================
// Exact Least Median of Squares
// ============================================================================

/// Best two-point candidate line by median squared residual.
fn lms_core<T: Float>(
    pts: &[Point<T>],
    control: &Control<'_>,
) -> Result<RegressionCore<T>, EstimateError> {
    let n = pts.len();
    let total = n * (n - 1) / 2;
    let mut done = 0usize;

    let mut best: Option<(T, T)> = None;
    let mut best_med = T::infinity();
    let mut processed = Vec::new();

    for i in 0..n {
        for j in i + 1..n {
            control.checkpoint()?;
            done += 1;

            // A vertical candidate has no slope; skip but keep the pair in
            // the progress denominator.
            if pts[i].x == pts[j].x {
                control.report((done * 100 / total) as u8);
                continue;
            }

            let slope = (pts[j].y - pts[i].y) / (pts[j].x - pts[i].x);
            let intercept = pts[i].y - slope * pts[i].x;

            let med_sq = median_squared_residual(pts, slope, intercept);
            if med_sq < best_med {
                best_med = med_sq;
                best = Some((slope, intercept));
                processed = squared_residuals(pts, slope, intercept);
            }

            control.report((done * 100 / total) as u8);
        }
    }

    let (slope, intercept) = best.ok_or_else(|| {
        EstimateError::DegenerateGeometry("no candidate line: all x-coordinates coincide".into())
    })?;

    Ok(RegressionCore {
        slope,
        intercept,
        median_squared_residual: best_med,
        processed: Some(processed),
    })
}

// ============================================================================
// Theil-Sen
// ============================================================================

/// True median of pairwise slopes, then true median of per-point intercepts.
fn theil_sen_core<T: Float>(
    pts: &[Point<T>],
    control: &Control<'_>,
) -> Result<RegressionCore<T>, EstimateError> {
    let n = pts.len();
    let total = n * (n - 1) / 2;
    let mut done = 0usize;
    let mut slopes = Vec::with_capacity(total);

    // Step 1: Collect all pairwise slopes, skipping vertical pairs.
    for i in 0..n {
        for j in i + 1..n {
            control.checkpoint()?;
            done += 1;

            if pts[i].x == pts[j].x {
                control.report((done * 100 / total) as u8);
                continue;
            }

            slopes.push((pts[j].y - pts[i].y) / (pts[j].x - pts[i].x));
            control.report((done * 100 / total) as u8);
        }
    }

    if slopes.is_empty() {
        return Err(EstimateError::DegenerateGeometry(
            "no pairwise slope: all x-coordinates coincide".into(),
        ));
    }

    sort_ascending(&mut slopes);
    let slope = median_sorted(&slopes);

    // Step 2: Intercept as the true median of per-point intercepts.
    let mut intercepts: Vec<T> = pts.iter().map(|p| p.y - slope * p.x).collect();
    sort_ascending(&mut intercepts);
    let intercept = median_sorted(&intercepts);

    // Step 3: Median squared residual of the resulting line.
    let med_sq = median_squared_residual(pts, slope, intercept);

    Ok(RegressionCore {
        slope,
        intercept,
        median_squared_residual: med_sq,
        processed: Some(slopes),
    })
}
