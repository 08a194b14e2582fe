//! Fit-quality diagnostics for regression results.
//!
//! ## Purpose
//!
//! This module computes the shared diagnostics every regression variant
//! reports: the coefficient of determination and the median squared residual
//! of a fitted line.
//!
//! ## Design notes
//!
//! * **Constant-y invariant**: When the total sum of squares is zero the fit
//!   explains everything there is to explain, so R² is defined as 1.0.
//! * **Residual median convention**: The median squared residual is the
//!   element at index `len/2` of the sorted squared residuals, the rule all
//!   three regression cores share.
//!
//! ## Non-goals
//!
//! * This module does not fit lines; it only scores them.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::median::{median_element_sorted, sort_ascending};
use crate::primitives::dataset::Point;

// ============================================================================
// Coefficient of Determination
// ============================================================================

/// R² of a fitted line over a point set.
///
/// # Formula
///
/// ```text
/// ss_tot = Σ(y - mean(y))²
/// ss_res = Σ(y - (slope·x + intercept))²
/// r²     = 1 - ss_res / ss_tot    (1.0 when ss_tot == 0)
/// ```
pub fn r_squared<T: Float>(pts: &[Point<T>], slope: T, intercept: T) -> T {
    let n = T::from(pts.len()).unwrap();

    let mut sum_y = T::zero();
    for p in pts {
        sum_y = sum_y + p.y;
    }
    let mean_y = sum_y / n;

    let mut ss_tot = T::zero();
    let mut ss_res = T::zero();
    for p in pts {
        let dt = p.y - mean_y;
        ss_tot = ss_tot + dt * dt;

        let dr = p.y - (slope * p.x + intercept);
        ss_res = ss_res + dr * dr;
    }

    if ss_tot > T::zero() {
        T::one() - ss_res / ss_tot
    } else {
        T::one()
    }
}

// ============================================================================
// Residuals
// ============================================================================

/// Squared residuals of every point against a line, in point order.
pub fn squared_residuals<T: Float>(pts: &[Point<T>], slope: T, intercept: T) -> Vec<T> {
    pts.iter()
        .map(|p| {
            let r = p.y - (slope * p.x + intercept);
            r * r
        })
        .collect()
}

/// Median squared residual of a line: element at index `len/2` of the sorted
/// squared residuals.
pub fn median_squared_residual<T: Float>(pts: &[Point<T>], slope: T, intercept: T) -> T {
    let mut sq = squared_residuals(pts, slope, intercept);
    sort_ascending(&mut sq);
    median_element_sorted(&sq)
}
