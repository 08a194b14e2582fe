//! Median computation with both tie-break conventions.
//!
//! ## Purpose
//!
//! This module provides the median primitives the estimators are built on:
//! an in-place quickselect median for internal centering steps, an ascending
//! sort helper, and the two sorted-sequence median conventions used by the
//! pairwise-slope methods.
//!
//! ## Design notes
//!
//! * **Algorithm**: `median_inplace` uses Quickselect for O(n) selection;
//!   the sorted variants assume an already-sorted slice and are O(1).
//! * **Two conventions**: [`median_sorted`] averages the two central elements
//!   on even counts; [`median_element_sorted`] returns the single element at
//!   index `len/2`. The scalar Theil-Sen path and the regression Theil-Sen
//!   path deliberately use different conventions and must not be unified.
//!
//! ## Invariants
//!
//! * Handles even and odd population sizes correctly.
//! * The input slice of the sorted variants must be ascending.
//!
//! ## Non-goals
//!
//! * This module does not handle non-finite values (NaN/Inf).
//! * This module does not provide weighted medians.

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Sorting
// ============================================================================

/// Sort a slice of floats ascending.
///
/// NaN values compare as equal; callers validate finiteness beforehand.
#[inline]
pub fn sort_ascending<T: Float>(vals: &mut [T]) {
    vals.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Equal));
}

// ============================================================================
// Median Conventions
// ============================================================================

/// True median of an ascending slice: average of the two central elements
/// for even counts, the central element otherwise.
///
/// Returns zero for an empty slice.
#[inline]
pub fn median_sorted<T: Float>(vals: &[T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;
    if n % 2 == 0 {
        (vals[mid - 1] + vals[mid]) / T::from(2.0).unwrap()
    } else {
        vals[mid]
    }
}

/// Single-element median of an ascending slice: the element at index `len/2`.
///
/// For even counts this is the upper of the two central elements, with no
/// averaging. The scalar Theil-Sen estimator pins this exact tie rule.
///
/// Returns zero for an empty slice.
#[inline]
pub fn median_element_sorted<T: Float>(vals: &[T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    vals[n / 2]
}

// ============================================================================
// In-place Median
// ============================================================================

/// Compute the true median in-place using Quickselect, avoiding a full sort.
///
/// # Safety
///
/// This function reorders the provided `vals` slice.
#[inline]
pub fn median_inplace<T: Float>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n % 2 == 0 {
        // Even length: average of two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        let upper = vals[mid];

        // Find the largest value in the lower half
        let lower = vals[..mid].iter().copied().fold(T::neg_infinity(), T::max);

        (lower + upper) / T::from(2.0).unwrap()
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.partial_cmp(b).unwrap_or(Equal));
        vals[mid]
    }
}
