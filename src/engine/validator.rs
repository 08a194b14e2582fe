//! Input validation for estimator configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for estimator parameters and
//! input datasets. It checks requirements such as non-empty input, finite
//! values, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like trim fraction in [0, 0.5].
//! * **Finite Checks**: Ensures all inputs are finite (no NaN/Inf).
//! * **Pairwise Requirements**: At least 2 samples for pairwise-slope methods
//!   and 2 points for any regression.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the estimation itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::dataset::Point;
use crate::primitives::errors::EstimateError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for estimator configuration and input data.
///
/// Provides static methods returning `Result<(), EstimateError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a scalar sample sequence.
    pub fn validate_scalars<T: Float>(values: &[T]) -> Result<(), EstimateError> {
        // Check 1: Non-empty input
        if values.is_empty() {
            return Err(EstimateError::EmptyInput);
        }

        // Check 2: All values finite
        for (i, &val) in values.iter().enumerate() {
            if !val.is_finite() {
                return Err(EstimateError::InvalidNumericValue(format!(
                    "values[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a point sequence for regression.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), EstimateError> {
        // Check 1: Non-empty input
        if points.is_empty() {
            return Err(EstimateError::EmptyInput);
        }

        // Check 2: Sufficient points for a line
        if points.len() < 2 {
            return Err(EstimateError::TooFewPoints {
                got: points.len(),
                min: 2,
            });
        }

        // Check 3: All coordinates finite
        for (i, p) in points.iter().enumerate() {
            if !p.x.is_finite() {
                return Err(EstimateError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    p.x.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !p.y.is_finite() {
                return Err(EstimateError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    p.y.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the trimmed-mean trim fraction.
    pub fn validate_trim_fraction<T: Float>(fraction: T) -> Result<(), EstimateError> {
        if !fraction.is_finite()
            || fraction < T::zero()
            || fraction > T::from(0.5).unwrap()
        {
            return Err(EstimateError::InvalidTrimFraction(
                fraction.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the Huber tuning constant.
    pub fn validate_delta<T: Float>(delta: T) -> Result<(), EstimateError> {
        if !delta.is_finite() || delta <= T::zero() {
            return Err(EstimateError::InvalidDelta(
                delta.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), EstimateError> {
        if let Some(param) = duplicate_param {
            return Err(EstimateError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
