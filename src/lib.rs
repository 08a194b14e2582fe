//! # robust-rs - Outlier-Resistant Estimation for Rust
//!
//! Robust statistical estimation: central location and straight-line fits
//! that resist distortion by outliers, with progress reporting, cooperative
//! cancellation, and elapsed-time measurement built into every estimator.
//!
//! ## Why robust estimation?
//!
//! The arithmetic mean and the ordinary least-squares line are optimal for
//! clean Gaussian data and terrible for everything else: a single corrupted
//! sample can drag both arbitrarily far. Robust estimators bound that
//! influence. The median ignores extreme values entirely; the Huber
//! M-estimator pulls them toward the center; trimming discards them; the
//! Theil-Sen and least-median-of-squares families survive even when a large
//! fraction of the data is contaminated.
//!
//! ## Quick Start
//!
//! ### Location estimation
//!
//! ```rust
//! use robust_rs::prelude::*;
//!
//! let dataset = Dataset::from_scalars(vec![1.0, 2.0, 3.0, 4.0]);
//!
//! let mut estimator = Location::new().build()?;
//! let estimate = estimator.compute(&dataset, &Control::new())?;
//!
//! assert_eq!(estimate.value, 2.5);
//! # Ok::<(), EstimateError>(())
//! ```
//!
//! ### Robust line fitting
//!
//! ```rust
//! use robust_rs::prelude::*;
//!
//! // Points lying exactly on y = 2x + 1.
//! let dataset = Dataset::from_points(vec![
//!     (0.0, 1.0),
//!     (1.0, 3.0),
//!     (2.0, 5.0),
//!     (3.0, 7.0),
//! ]);
//!
//! let mut estimator = Regression::<f64>::new()
//!     .method(RegressionMethod::TheilSen)
//!     .build()?;
//! let fit = estimator.fit(&dataset, &Control::new())?;
//!
//! assert!((fit.slope - 2.0).abs() < 1e-12);
//! assert!((fit.intercept - 1.0).abs() < 1e-12);
//! assert!((fit.r_squared - 1.0).abs() < 1e-12);
//! # Ok::<(), EstimateError>(())
//! ```
//!
//! ### Progress and cancellation
//!
//! ```rust
//! use robust_rs::prelude::*;
//!
//! let dataset = Dataset::from_scalars(vec![10.0, 10.0, 10.0, 100.0]);
//!
//! let source = CancelSource::new();
//! let sink = |percent: u8| {
//!     let _ = percent; // forward to a UI, a log, a channel, ...
//! };
//! let control = Control::new()
//!     .with_progress(&sink)
//!     .with_cancel(source.token());
//!
//! let mut estimator = Location::new()
//!     .method(LocationMethod::Huber)
//!     .delta(1.5)
//!     .build()?;
//!
//! // A worker thread would call `source.cancel()` to abort; the estimator
//! // polls the token once per sample and unwinds with a distinct error.
//! let estimate = estimator.compute(&dataset, &control)?;
//! assert!(estimate.value < 32.5); // far below the naive mean
//! # Ok::<(), EstimateError>(())
//! ```
//!
//! ## Methods
//!
//! | Method | Kind | Cost | Notes |
//! |---|---|---|---|
//! | `Median` | location | O(n log n) | true median; no diagnostics |
//! | `Huber` | location | O(n) + median | weighted mean, variance diagnostic |
//! | `TrimmedMean` | location | O(n log n) | trim fraction in [0, 0.5] |
//! | `TheilSen` | location | O(n²) | index-based pairwise slopes |
//! | `Lms` | location | O(n log n) | median of squared deviations |
//! | `Huber` | regression | O(n) × 20 | fixed IRLS schedule |
//! | `Lms` | regression | O(n³ log n) | exhaustive pairs; a few hundred points at most |
//! | `TheilSen` | regression | O(n² log n) | median slope and intercept |
//!
//! ## Execution contract
//!
//! Every estimator honors the same contract:
//!
//! * **Progress**: a [`ProgressSink`](prelude::ProgressSink) receives
//!   monotonically non-decreasing percentages in [0, 100], at the
//!   algorithm's natural granularity (per sample, per pair, per iteration).
//! * **Cancellation**: a [`CancelToken`](prelude::CancelToken) is polled at
//!   least once per outer loop iteration; once observed, the call unwinds
//!   with a [`Cancelled`](prelude::EstimateError::Cancelled) error and
//!   partial work is discarded. `EstimateError::is_cancelled` separates this
//!   expected outcome from genuine failures.
//! * **Timing**: regression fits report the wall time of the variant core;
//!   [`timed`](prelude::timed) wraps any other closure the same way.
//! * **Determinism**: repeated calls over an unchanged dataset return
//!   bit-identical results.
//!
//! Each compute/fit call is single-threaded and allocation-light; run it on
//! whatever worker thread suits the application. One computation per
//! estimator instance is live at a time; starting a new one implies the
//! caller replaced the cancellation source of the previous one.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments (with `alloc`):
//!
//! ```toml
//! [dependencies]
//! robust-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without the `std` feature, elapsed times are reported as zero durations;
//! everything else is unchanged.
//!
//! ## References
//!
//! - Huber, P. J. (1964). "Robust Estimation of a Location Parameter"
//! - Rousseeuw, P. J. (1984). "Least Median of Squares Regression"
//! - Sen, P. K. (1968). "Estimates of the Regression Coefficient Based on Kendall's Tau"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the `Dataset` container, the `Point` observation type, and the
// crate-wide error enum.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains median computation under both tie-break conventions, variance
// estimates, and the closed-form line solves.
mod math;

// Layer 3: Algorithms - the estimation cores.
//
// Contains the five scalar location methods and the three regression
// methods, dispatched over tagged method enums.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
//
// Contains R² and the residual diagnostics shared by the regression
// variants.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains progress/cancellation control, the timing decorator, input
// validation, the compute/fit drivers, and the result structures.
mod engine;

// High-level fluent API for robust estimation.
//
// Provides the `Location` and `Regression` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard robust-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use robust_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        timed, CancelSource, CancelToken, Control, Covariance, Dataset, EstimateError,
        LocationBuilder as Location, LocationEstimate, LocationEstimator, LocationMethod, Point,
        ProgressSink, RegressionBuilder as Regression, RegressionEstimator, RegressionFit,
        RegressionMethod, Timed,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
