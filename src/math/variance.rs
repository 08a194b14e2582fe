//! Variance estimates backing the 1×1 covariance diagnostics.
//!
//! ## Purpose
//!
//! This module provides the two variance formulas the location estimators
//! expose as covariance diagnostics: the unbiased sample variance and the
//! bias-corrected weighted variance of the Huber estimate.
//!
//! ## Design notes
//!
//! * **Degenerate inputs**: Fewer than two samples yield a variance of zero
//!   rather than a division by zero.
//! * **Weighted correction**: The weighted form divides by `S1 - S2/S1`
//!   (with `S1 = Σw`, `S2 = Σw²`) and falls back to dividing by `S1` when
//!   that denominator is not positive.
//!
//! ## Invariants
//!
//! * Both estimates are non-negative for finite inputs.
//! * `weights` and `vals` have equal lengths in the weighted form.
//!
//! ## Non-goals
//!
//! * This module does not decide which estimator exposes which variance.

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample Variance
// ============================================================================

/// Unbiased sample variance around a known mean (divide by `n - 1`).
///
/// Returns zero when fewer than two samples are present.
#[inline]
pub fn sample_variance<T: Float>(vals: &[T], mean: T) -> T {
    let n = vals.len();
    if n < 2 {
        return T::zero();
    }

    let mut sum_sq = T::zero();
    for &v in vals {
        let d = v - mean;
        sum_sq = sum_sq + d * d;
    }

    sum_sq / T::from(n - 1).unwrap()
}

// ============================================================================
// Weighted Variance
// ============================================================================

/// Bias-corrected weighted variance around a known weighted mean.
///
/// With `S1 = Σw`, `S2 = Σw²`, and `Q = Σ w·(v - mean)²`, the estimate is
/// `Q / (S1 - S2/S1)` when that denominator is positive and `Q / S1`
/// otherwise. Returns zero when fewer than two samples are present.
#[inline]
pub fn weighted_variance<T: Float>(vals: &[T], weights: &[T], mean: T) -> T {
    let n = vals.len();
    if n < 2 {
        return T::zero();
    }

    let mut w_sum = T::zero();
    let mut w_sq_sum = T::zero();
    let mut num = T::zero();
    for (&v, &w) in vals.iter().zip(weights.iter()) {
        let d = v - mean;
        w_sum = w_sum + w;
        w_sq_sum = w_sq_sum + w * w;
        num = num + w * d * d;
    }

    let denom = w_sum - w_sq_sum / w_sum;
    if denom > T::zero() {
        num / denom
    } else {
        num / w_sum
    }
}
