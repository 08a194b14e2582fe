//! Error types for robust estimation operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building an
//! estimator or running a compute/fit call, including input validation,
//! parameter constraints, degenerate geometry, and cooperative cancellation.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught and stored, then surfaced at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty datasets, mismatched lengths, non-finite values.
//! 2. **Parameter validation**: Invalid trim fraction or Huber delta.
//! 3. **Cancellation**: A cooperative abort is an expected outcome, not a failure,
//!    and is distinguishable through [`EstimateError::is_cancelled`].
//! 4. **Degenerate geometry**: Pairwise-slope methods with no non-vertical candidate.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for robust estimation operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimateError {
    /// Input dataset is empty; every estimator requires at least 1 sample.
    EmptyInput,

    /// Generic invalid input error with a descriptive message.
    InvalidInput(String),

    /// `x` and `y` slices must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` slice.
        x_len: usize,
        /// Number of elements in the `y` slice.
        y_len: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Number of samples/points is below the minimum for the selected method.
    TooFewPoints {
        /// Number of samples provided.
        got: usize,
        /// Minimum required samples.
        min: usize,
    },

    /// Trim fraction must be in the range [0, 0.5].
    InvalidTrimFraction(f64),

    /// Huber delta must be positive and finite.
    InvalidDelta(f64),

    /// No non-vertical candidate line exists (all x-coordinates coincide).
    DegenerateGeometry(String),

    /// The computation was cancelled through its cancellation token.
    Cancelled,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

impl EstimateError {
    /// Whether this error is a cooperative cancellation rather than a failure.
    ///
    /// Callers that race user-driven cancellation against computation use this
    /// to separate the expected abort path from genuine errors.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for EstimateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input dataset is empty"),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidTrimFraction(frac) => {
                write!(f, "Invalid trim fraction: {frac} (must be in [0, 0.5])")
            }
            Self::InvalidDelta(delta) => {
                write!(f, "Invalid delta: {delta} (must be positive and finite)")
            }
            Self::DegenerateGeometry(msg) => write!(f, "Degenerate geometry: {msg}"),
            Self::Cancelled => write!(f, "Computation was cancelled"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for EstimateError {}
