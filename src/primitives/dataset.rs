//! Dataset container for scalar samples and coordinate pairs.
//!
//! ## Purpose
//!
//! This module defines the [`Dataset`] tagged union consumed by every
//! estimator: either an ordered sequence of scalar samples or an ordered
//! sequence of 2-D points, never both at once.
//!
//! ## Design notes
//!
//! * **Exclusive**: The two payload kinds are enum variants, so a dataset can
//!   never hold scalars and points simultaneously.
//! * **Order-preserving**: Sample order is significant; the scalar Theil-Sen
//!   method treats position as the x-coordinate.
//! * **Read-only per call**: Estimators borrow the dataset immutably for the
//!   duration of a compute/fit call and never mutate it.
//!
//! ## Key concepts
//!
//! * **Kind accessors**: `as_scalars`/`as_points` return `None` on a kind
//!   mismatch; the executor turns that into a contextual error.
//! * **Paired-slice input**: `from_xy` accepts separate x/y slices and
//!   rejects mismatched lengths.
//!
//! ## Non-goals
//!
//! * This module does not validate finiteness or emptiness (see `Validator`).
//! * This module does not notify observers of changes; recomputation after a
//!   dataset is rebuilt is the caller's decision.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::EstimateError;

// ============================================================================
// Point
// ============================================================================

/// A 2-D observation used by the regression estimators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    /// Predictor coordinate.
    pub x: T,
    /// Response coordinate.
    pub y: T,
}

impl<T> Point<T> {
    /// Create a point from its coordinates.
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

// ============================================================================
// Dataset
// ============================================================================

/// Input container holding either scalar samples or coordinate pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Dataset<T> {
    /// Ordered scalar samples for the location estimators.
    Scalars(Vec<T>),

    /// Ordered 2-D observations for the regression estimators.
    Points(Vec<Point<T>>),
}

impl<T: Float> Dataset<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Build a scalar dataset from a sample sequence.
    pub fn from_scalars(values: Vec<T>) -> Self {
        Self::Scalars(values)
    }

    /// Build a point dataset from `(x, y)` tuples.
    pub fn from_points(points: Vec<(T, T)>) -> Self {
        Self::Points(points.into_iter().map(Point::from).collect())
    }

    /// Build a point dataset from paired `x`/`y` slices.
    ///
    /// Fails with [`EstimateError::MismatchedInputs`] when the slices differ
    /// in length.
    pub fn from_xy(x: &[T], y: &[T]) -> Result<Self, EstimateError> {
        if x.len() != y.len() {
            return Err(EstimateError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        Ok(Self::Points(
            x.iter()
                .zip(y.iter())
                .map(|(&x, &y)| Point::new(x, y))
                .collect(),
        ))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Scalar samples, or `None` when this dataset holds points.
    pub fn as_scalars(&self) -> Option<&[T]> {
        match self {
            Self::Scalars(values) => Some(values),
            Self::Points(_) => None,
        }
    }

    /// Coordinate pairs, or `None` when this dataset holds scalars.
    pub fn as_points(&self) -> Option<&[Point<T>]> {
        match self {
            Self::Scalars(_) => None,
            Self::Points(points) => Some(points),
        }
    }

    /// Number of samples or points.
    pub fn len(&self) -> usize {
        match self {
            Self::Scalars(values) => values.len(),
            Self::Points(points) => points.len(),
        }
    }

    /// Whether the dataset holds no samples or points.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
