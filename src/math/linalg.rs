//! Closed-form line solves for ordinary and weighted least squares.
//!
//! ## Purpose
//!
//! This module solves the only linear systems the crate needs: fitting a
//! straight line `y = slope·x + intercept` to a point set, unweighted or with
//! per-point weights. Both use the explicit normal-equation closed form, so
//! results are reproducible term-for-term.
//!
//! ## Design notes
//!
//! * **Accumulate, then solve**: A single pass accumulates the weighted sums
//!   `Σw`, `Σwx`, `Σwy`, `Σwx²`, `Σwxy`; the slope follows from the 2×2
//!   normal-equation determinant.
//! * **Degeneracy is explicit**: A vanishing determinant (all x-coordinates
//!   coincide, up to weighting) yields `None` instead of a NaN line; the
//!   caller maps this to a geometry error.
//!
//! ## Invariants
//!
//! * `weights` and `pts` have equal lengths in the weighted form.
//! * A `Some` result always holds finite slope and intercept.
//!
//! ## Non-goals
//!
//! * This module does not compute residuals or fit diagnostics.
//! * This module does not iterate; reweighting loops live in the algorithms.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Point;

// ============================================================================
// Ordinary Least Squares
// ============================================================================

/// Fit `y = slope·x + intercept` by ordinary least squares.
///
/// Returns `None` when the normal-equation determinant vanishes or the
/// solution is non-finite (all x-coordinates coincide).
#[inline]
pub fn ols_line<T: Float>(pts: &[Point<T>]) -> Option<(T, T)> {
    let n = T::from(pts.len()).unwrap();

    let mut sum_x = T::zero();
    let mut sum_y = T::zero();
    let mut sum_xy = T::zero();
    let mut sum_xx = T::zero();
    for p in pts {
        sum_x = sum_x + p.x;
        sum_y = sum_y + p.y;
        sum_xy = sum_xy + p.x * p.y;
        sum_xx = sum_xx + p.x * p.x;
    }

    let denom = n * sum_xx - sum_x * sum_x;
    if denom == T::zero() {
        return None;
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denom;
    let intercept = (sum_y - slope * sum_x) / n;
    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }

    Some((slope, intercept))
}

// ============================================================================
// Weighted Least Squares
// ============================================================================

/// Fit `y = slope·x + intercept` by weighted least squares.
///
/// Returns `None` when the weighted normal-equation determinant vanishes or
/// the solution is non-finite.
#[inline]
pub fn weighted_line<T: Float>(pts: &[Point<T>], weights: &[T]) -> Option<(T, T)> {
    let mut sw = T::zero();
    let mut swx = T::zero();
    let mut swy = T::zero();
    let mut swxx = T::zero();
    let mut swxy = T::zero();
    for (p, &w) in pts.iter().zip(weights.iter()) {
        sw = sw + w;
        swx = swx + w * p.x;
        swy = swy + w * p.y;
        swxx = swxx + w * p.x * p.x;
        swxy = swxy + w * p.x * p.y;
    }

    let denom = sw * swxx - swx * swx;
    if denom == T::zero() {
        return None;
    }

    let slope = (sw * swxy - swx * swy) / denom;
    let intercept = (swy - slope * swx) / sw;
    if !slope.is_finite() || !intercept.is_finite() {
        return None;
    }

    Some((slope, intercept))
}
