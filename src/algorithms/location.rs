//! Scalar location estimators.
//!
//! ## Purpose
//!
//! This module implements the five robust location methods: the median, the
//! Huber M-estimator, the trimmed mean, the scalar Theil-Sen slope, and the
//! scalar least-median-of-squares estimate. Each consumes an ordered scalar
//! sample sequence and produces one estimate plus method-specific
//! diagnostics.
//!
//! ## Design notes
//!
//! * **Sum-type dispatch**: [`LocationMethod`] is a tagged variant per
//!   algorithm; `compute_core` dispatches by matching on the variant.
//! * **Cooperative cancellation**: Every per-sample or per-pair loop polls
//!   the control's token once per iteration and unwinds without writing
//!   diagnostics.
//! * **Progress cadence**: Sort-only methods jump straight to 100; the
//!   looping methods report percent processed per sample or pair.
//!
//! ## Key concepts
//!
//! * **Huber weighting**: `w = 1` inside the delta band, `delta/|r|` outside,
//!   pulling outliers toward the center instead of discarding them.
//! * **Tie conventions**: The scalar Theil-Sen result is the single sorted
//!   slope at index `count/2` (no averaging for even counts); the LMS result
//!   is the true median of the sorted squared deviations. The two rules are
//!   deliberate and must not be unified.
//!
//! ## Invariants
//!
//! * Inputs are non-empty and finite (validated by the engine).
//! * Diagnostics describe the most recent successful call only.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs or parameters.
//! * This module does not measure elapsed time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::control::Control;
use crate::engine::output::{Covariance, LocationEstimate};
use crate::math::median::{median_element_sorted, median_inplace, median_sorted, sort_ascending};
use crate::math::variance::{sample_variance, weighted_variance};
use crate::primitives::errors::EstimateError;

// ============================================================================
// Location Method
// ============================================================================

/// Robust scalar location method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationMethod {
    /// Sample median - default and cheapest.
    #[default]
    Median,

    /// Huber M-estimator - weighted mean with outliers pulled inward.
    Huber,

    /// Trimmed mean - mean after discarding a fraction from each end.
    TrimmedMean,

    /// Theil-Sen slope over sample index - robust trend of a sequence.
    TheilSen,

    /// Least median of squares - median of squared deviations.
    Lms,
}

// ============================================================================
// Implementation
// ============================================================================

impl LocationMethod {
    // ========================================================================
    // Constants
    // ========================================================================

    /// Default Huber tuning constant for the scalar estimator.
    pub const DEFAULT_DELTA: f64 = 1.5;

    /// Default fraction trimmed from each end of the sorted samples.
    pub const DEFAULT_TRIM_FRACTION: f64 = 0.1;

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Run the method core over validated samples.
    ///
    /// `delta` applies to [`LocationMethod::Huber`] and `trim_fraction` to
    /// [`LocationMethod::TrimmedMean`]; the other methods ignore both.
    pub(crate) fn compute_core<T: Float>(
        &self,
        values: &[T],
        delta: T,
        trim_fraction: T,
        control: &Control<'_>,
    ) -> Result<LocationEstimate<T>, EstimateError> {
        match self {
            Self::Median => median_core(values, control),
            Self::Huber => huber_core(values, delta, control),
            Self::TrimmedMean => trimmed_mean_core(values, trim_fraction, control),
            Self::TheilSen => theil_sen_core(values, control),
            Self::Lms => lms_core(values, control),
        }
    }
}

// ============================================================================
// Median
// ============================================================================

/// Sort ascending and take the true median.
fn median_core<T: Float>(
    values: &[T],
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let mut sorted = values.to_vec();
    sort_ascending(&mut sorted);

    // No incremental work beyond the sort.
    control.report(100);

    Ok(LocationEstimate {
        value: median_sorted(&sorted),
        processed: None,
        covariance: None,
    })
}

// ============================================================================
// Huber
// ============================================================================

/// Weighted mean of delta-adjusted values around the median.
fn huber_core<T: Float>(
    values: &[T],
    delta: T,
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let n = values.len();

    let mut scratch = values.to_vec();
    let median = median_inplace(&mut scratch);

    let mut weights = Vec::with_capacity(n);
    let mut adjusted = Vec::with_capacity(n);
    let mut w_sum = T::zero();
    let mut wa_sum = T::zero();

    for (i, &x) in values.iter().enumerate() {
        control.checkpoint()?;

        let r = x - median;
        let abs = r.abs();
        let w = if abs <= delta { T::one() } else { delta / abs };
        weights.push(w);

        let adj = median + w * r;
        adjusted.push(adj);

        w_sum = w_sum + w;
        wa_sum = wa_sum + w * adj;

        control.report(((i + 1) * 100 / n) as u8);
    }

    let value = wa_sum / w_sum;

    let variance = if n < 2 {
        T::zero()
    } else {
        weighted_variance(values, &weights, value)
    };

    Ok(LocationEstimate {
        value,
        processed: Some(adjusted),
        covariance: Some(Covariance::new(variance)),
    })
}

// ============================================================================
// Trimmed Mean
// ============================================================================

/// Mean of the sorted samples after dropping a fraction from each end.
fn trimmed_mean_core<T: Float>(
    values: &[T],
    trim_fraction: T,
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let n = values.len();

    let mut sorted = values.to_vec();
    sort_ascending(&mut sorted);

    let trim_count = (T::from(n).unwrap() * trim_fraction)
        .round()
        .to_usize()
        .unwrap_or(0);

    if 2 * trim_count >= n {
        return Err(EstimateError::InvalidInput(format!(
            "trimming removed all samples ({n} samples, {trim_count} trimmed per end)"
        )));
    }

    let remainder = &sorted[trim_count..n - trim_count];

    let mut sum = T::zero();
    for &v in remainder {
        sum = sum + v;
    }
    let value = sum / T::from(remainder.len()).unwrap();

    let variance = sample_variance(remainder, value);

    control.report(100);

    Ok(LocationEstimate {
        value,
        processed: Some(remainder.to_vec()),
        covariance: Some(Covariance::new(variance)),
    })
}

// ============================================================================
// Theil-Sen (scalar mode)
// ============================================================================

/// Sorted-slope element at index `count/2` over all index-based pairs.
fn theil_sen_core<T: Float>(
    values: &[T],
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let n = values.len();
    if n < 2 {
        return Err(EstimateError::TooFewPoints { got: n, min: 2 });
    }

    let total = n * (n - 1) / 2;
    let mut done = 0usize;
    let mut slopes = Vec::with_capacity(total);

    // All pairwise slopes (v_j - v_i) / (j - i), the index acting as x.
    for i in 0..n - 1 {
        for j in i + 1..n {
            control.checkpoint()?;

            let slope = (values[j] - values[i]) / T::from(j - i).unwrap();
            slopes.push(slope);

            done += 1;
            control.report((done * 100 / total) as u8);
        }
    }

    sort_ascending(&mut slopes);
    let value = median_element_sorted(&slopes);

    Ok(LocationEstimate {
        value,
        processed: Some(slopes),
        covariance: None,
    })
}

// ============================================================================
// Least Median of Squares
// ============================================================================

/// True median of the sorted squared deviations from the sample median.
fn lms_core<T: Float>(
    values: &[T],
    control: &Control<'_>,
) -> Result<LocationEstimate<T>, EstimateError> {
    let n = values.len();

    let mut scratch = values.to_vec();
    let median = median_inplace(&mut scratch);

    let mut squared = Vec::with_capacity(n);
    for (i, &x) in values.iter().enumerate() {
        control.checkpoint()?;

        let d = x - median;
        squared.push(d * d);

        control.report(((i + 1) * 100 / n) as u8);
    }

    sort_ascending(&mut squared);
    let value = median_sorted(&squared);

    let mut sum = T::zero();
    for &s in &squared {
        sum = sum + s;
    }
    let mean = sum / T::from(n).unwrap();
    let variance = sample_variance(&squared, mean);

    Ok(LocationEstimate {
        value,
        processed: Some(squared),
        covariance: Some(Covariance::new(variance)),
    })
}
