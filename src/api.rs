//! High-level API for robust estimation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: fluent
//! builders for configuring a location or regression estimator, and the
//! estimator types exposing the compute/fit contract.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   setting a parameter twice is an error surfaced at the same point.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Configuration flow**: `LocationBuilder::new()` (or
//!   `RegressionBuilder::new()`) → chain configuration methods →
//!   `.build()` → call `compute`/`fit` as often as needed.
//! * **Cached diagnostics**: Each estimator keeps the method-specific
//!   diagnostics of its most recent successful call, overwritten on the
//!   next; a cancelled run leaves them untouched.
//!
//! ### Example
//!
//! ```
//! use robust_rs::prelude::*;
//!
//! let dataset = Dataset::from_scalars(vec![10.0, 10.0, 10.0, 100.0]);
//!
//! let mut estimator = Location::new()
//!     .method(LocationMethod::Huber)
//!     .delta(1.5)
//!     .build()?;
//!
//! let estimate = estimator.compute(&dataset, &Control::new())?;
//! assert!(estimate.value < 32.5);
//! # Ok::<(), EstimateError>(())
//! ```

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{run_location, run_regression};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::location::LocationMethod;
pub use crate::algorithms::regression::RegressionMethod;
pub use crate::engine::control::{CancelSource, CancelToken, Control, ProgressSink};
pub use crate::engine::output::{Covariance, LocationEstimate, RegressionFit};
pub use crate::engine::timing::{timed, Timed};
pub use crate::primitives::dataset::{Dataset, Point};
pub use crate::primitives::errors::EstimateError;

// ============================================================================
// Location Builder
// ============================================================================

/// Fluent builder for configuring a scalar location estimator.
#[derive(Debug, Clone)]
pub struct LocationBuilder<T: Float> {
    /// Location method to run.
    pub method: Option<LocationMethod>,

    /// Huber tuning constant (Huber only).
    pub delta: Option<T>,

    /// Fraction trimmed from each end (TrimmedMean only).
    pub trim_fraction: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LocationBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LocationBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            delta: None,
            trim_fraction: None,
            duplicate_param: None,
        }
    }

    /// Set the location method (default: Median).
    pub fn method(mut self, method: LocationMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the Huber tuning constant (Huber only, default: 1.5).
    pub fn delta(mut self, delta: T) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Set the fraction trimmed from each end (TrimmedMean only,
    /// default: 0.1, valid range [0, 0.5]).
    pub fn trim_fraction(mut self, fraction: T) -> Self {
        if self.trim_fraction.is_some() {
            self.duplicate_param = Some("trim_fraction");
        }
        self.trim_fraction = Some(fraction);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<LocationEstimator<T>, EstimateError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let delta = self
            .delta
            .unwrap_or_else(|| T::from(LocationMethod::DEFAULT_DELTA).unwrap());
        Validator::validate_delta(delta)?;

        let trim_fraction = self
            .trim_fraction
            .unwrap_or_else(|| T::from(LocationMethod::DEFAULT_TRIM_FRACTION).unwrap());
        Validator::validate_trim_fraction(trim_fraction)?;

        Ok(LocationEstimator {
            method: self.method.unwrap_or_default(),
            delta,
            trim_fraction,
            processed: None,
            covariance: None,
        })
    }
}

// ============================================================================
// Location Estimator
// ============================================================================

/// Configured scalar location estimator.
///
/// Holds the method and tuning constants plus the cached diagnostics of the
/// most recent successful compute call. Only one computation per instance is
/// live at a time; starting a new one implies the caller has replaced the
/// cancellation source of any prior in-flight call.
#[derive(Debug, Clone)]
pub struct LocationEstimator<T: Float> {
    method: LocationMethod,
    delta: T,
    trim_fraction: T,
    processed: Option<Vec<T>>,
    covariance: Option<Covariance<T>>,
}

impl<T: Float> LocationEstimator<T> {
    // ========================================================================
    // Main API
    // ========================================================================

    /// Compute the location estimate for a scalar dataset.
    ///
    /// Fails with [`EstimateError::EmptyInput`] on an empty sequence and
    /// with [`EstimateError::Cancelled`] once the control's token is
    /// observed; cached diagnostics are only overwritten on success.
    pub fn compute(
        &mut self,
        dataset: &Dataset<T>,
        control: &Control<'_>,
    ) -> Result<LocationEstimate<T>, EstimateError> {
        let estimate = run_location(
            self.method,
            self.delta,
            self.trim_fraction,
            dataset,
            control,
        )?;

        self.processed = estimate.processed.clone();
        self.covariance = estimate.covariance;

        Ok(estimate)
    }

    /// Compute with elapsed-time measurement around the call.
    pub fn compute_timed(
        &mut self,
        dataset: &Dataset<T>,
        control: &Control<'_>,
    ) -> Result<Timed<LocationEstimate<T>>, EstimateError> {
        let method = self.method;
        let delta = self.delta;
        let trim_fraction = self.trim_fraction;

        let timed_estimate =
            timed(|| run_location(method, delta, trim_fraction, dataset, control))?;

        self.processed = timed_estimate.value.processed.clone();
        self.covariance = timed_estimate.value.covariance;

        Ok(timed_estimate)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The configured method.
    pub fn method(&self) -> LocationMethod {
        self.method
    }

    /// The configured Huber tuning constant.
    pub fn delta(&self) -> T {
        self.delta
    }

    /// The configured trim fraction.
    pub fn trim_fraction(&self) -> T {
        self.trim_fraction
    }

    /// Method-specific diagnostics of the most recent successful call.
    pub fn processed(&self) -> Option<&[T]> {
        self.processed.as_deref()
    }

    /// Covariance diagnostic of the most recent successful call.
    pub fn covariance(&self) -> Option<&Covariance<T>> {
        self.covariance.as_ref()
    }
}

// ============================================================================
// Regression Builder
// ============================================================================

/// Fluent builder for configuring a regression estimator.
#[derive(Debug, Clone)]
pub struct RegressionBuilder<T: Float> {
    /// Regression method to run.
    pub method: Option<RegressionMethod>,

    /// Huber tuning constant (Huber only).
    pub delta: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for RegressionBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RegressionBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            method: None,
            delta: None,
            duplicate_param: None,
        }
    }

    /// Set the regression method (default: Huber).
    pub fn method(mut self, method: RegressionMethod) -> Self {
        if self.method.is_some() {
            self.duplicate_param = Some("method");
        }
        self.method = Some(method);
        self
    }

    /// Set the Huber tuning constant (Huber only, default: 1.345).
    pub fn delta(mut self, delta: T) -> Self {
        if self.delta.is_some() {
            self.duplicate_param = Some("delta");
        }
        self.delta = Some(delta);
        self
    }

    /// Validate the configuration and build the estimator.
    pub fn build(self) -> Result<RegressionEstimator<T>, EstimateError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let delta = self
            .delta
            .unwrap_or_else(|| T::from(RegressionMethod::DEFAULT_DELTA).unwrap());
        Validator::validate_delta(delta)?;

        Ok(RegressionEstimator {
            method: self.method.unwrap_or_default(),
            delta,
            processed: None,
        })
    }
}

// ============================================================================
// Regression Estimator
// ============================================================================

/// Configured regression estimator.
///
/// Holds the method and tuning constant plus the cached diagnostic sequence
/// of the most recent successful fit.
#[derive(Debug, Clone)]
pub struct RegressionEstimator<T: Float> {
    method: RegressionMethod,
    delta: T,
    processed: Option<Vec<T>>,
}

impl<T: Float> RegressionEstimator<T> {
    // ========================================================================
    // Main API
    // ========================================================================

    /// Fit a line to a point dataset.
    ///
    /// Fails with [`EstimateError::TooFewPoints`] below two points and with
    /// [`EstimateError::Cancelled`] once the control's token is observed.
    /// The returned fit's `elapsed` covers the variant core only.
    pub fn fit(
        &mut self,
        dataset: &Dataset<T>,
        control: &Control<'_>,
    ) -> Result<RegressionFit<T>, EstimateError> {
        let (fit, processed) = run_regression(self.method, self.delta, dataset, control)?;

        if processed.is_some() {
            self.processed = processed;
        }

        Ok(fit)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The configured method.
    pub fn method(&self) -> RegressionMethod {
        self.method
    }

    /// The configured Huber tuning constant.
    pub fn delta(&self) -> T {
        self.delta
    }

    /// Diagnostic sequence of the most recent successful fit: sorted
    /// pairwise slopes (TheilSen) or best-line squared residuals (LMS).
    pub fn processed(&self) -> Option<&[T]> {
        self.processed.as_deref()
    }
}
