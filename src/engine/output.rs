//! Output types and result structures for estimation operations.
//!
//! ## Purpose
//!
//! This module defines the result structures handed back by the estimators:
//! [`LocationEstimate`] for the scalar methods, [`RegressionFit`] for the
//! line-fitting methods, and the [`Covariance`] diagnostic wrapper.
//!
//! ## Design notes
//!
//! * **Owned by the caller**: Results are created fresh on each call; the
//!   crate never hands out references into estimator state.
//! * **Optional diagnostics**: Method-specific outputs use `Option`, so a
//!   result only carries what its method actually produced.
//! * **Ergonomics**: Both result types implement `Display` for
//!   human-readable summaries.
//!
//! ## Invariants
//!
//! * `RegressionFit::r_squared` is 1.0 whenever the total sum of squares of
//!   the fitted data is zero.
//! * `elapsed` covers the variant core only, not validation or assembly.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use core::time::Duration;
use num_traits::Float;

// ============================================================================
// Covariance
// ============================================================================

/// The 1×1 covariance matrix of a scalar estimate.
///
/// A location estimate is a single number, so its covariance collapses to one
/// entry: the variance of the estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Covariance<T> {
    variance: T,
}

impl<T: Float> Covariance<T> {
    /// Wrap a variance as a 1×1 covariance.
    pub(crate) fn new(variance: T) -> Self {
        Self { variance }
    }

    /// The single matrix entry.
    pub fn variance(&self) -> T {
        self.variance
    }

    /// The covariance as an explicit 1×1 matrix.
    pub fn as_matrix(&self) -> [[T; 1]; 1] {
        [[self.variance]]
    }
}

// ============================================================================
// Location Estimate
// ============================================================================

/// Output of a scalar location estimator.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationEstimate<T> {
    /// The robust location estimate.
    pub value: T,

    /// Method-specific transformed data: adjusted values (Huber), trimmed
    /// remainder (TrimmedMean), sorted pairwise slopes (TheilSen), or sorted
    /// squared deviations (LMS). `None` for the plain median.
    pub processed: Option<Vec<T>>,

    /// Variance of the estimate as a 1×1 covariance, where the method
    /// defines one.
    pub covariance: Option<Covariance<T>>,
}

impl<T: Float + Display> Display for LocationEstimate<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Location estimate:")?;
        writeln!(f, "  Value: {}", self.value)?;

        if let Some(cov) = &self.covariance {
            writeln!(f, "  Variance: {}", cov.variance())?;
        }
        if let Some(processed) = &self.processed {
            writeln!(f, "  Processed values: {}", processed.len())?;
        }

        Ok(())
    }
}

// ============================================================================
// Regression Fit
// ============================================================================

/// Output of a regression estimator: the fitted line and its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionFit<T> {
    /// Slope of the fitted line.
    pub slope: T,

    /// Intercept of the fitted line.
    pub intercept: T,

    /// Median of the squared residuals against the fitted line.
    pub median_squared_residual: T,

    /// Coefficient of determination; 1.0 for a constant-y dataset.
    pub r_squared: T,

    /// Wall time of the variant core (zero without the `std` feature).
    pub elapsed: Duration,
}

impl<T: Float> RegressionFit<T> {
    /// Evaluate the fitted line at `x`.
    pub fn predict(&self, x: T) -> T {
        self.slope * x + self.intercept
    }
}

impl<T: Float + Display> Display for RegressionFit<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Regression fit:")?;
        writeln!(f, "  Slope:     {}", self.slope)?;
        writeln!(f, "  Intercept: {}", self.intercept)?;
        writeln!(f, "  R^2:       {}", self.r_squared)?;
        writeln!(
            f,
            "  Median squared residual: {}",
            self.median_squared_residual
        )?;
        writeln!(f, "  Elapsed: {:?}", self.elapsed)?;

        Ok(())
    }
}
