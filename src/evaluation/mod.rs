//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides post-processing diagnostics computed on top of the
//! algorithm outputs:
//! - Coefficient of determination (R²)
//! - Squared-residual sequences and the median squared residual
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit-quality diagnostics.
pub mod diagnostics;
