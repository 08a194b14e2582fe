//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures shared by every other
//! layer:
//! - The [`Dataset`](dataset::Dataset) tagged union of scalar samples or
//!   coordinate pairs
//! - The crate-wide [`EstimateError`](errors::EstimateError) type
//!
//! These carry no algorithmic logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Dataset container and the `Point` observation type.
pub mod dataset;

/// Error types for estimation operations.
pub mod errors;
