//! Elapsed-time measurement as a decorator.
//!
//! ## Purpose
//!
//! This module provides [`timed`], a higher-order wrapper measuring the wall
//! time of any compute/fit closure. Timing stays orthogonal to the algorithm:
//! an estimator core never touches a clock.
//!
//! ## Design notes
//!
//! * **Strict scope**: Only the wrapped closure is measured; validation and
//!   result assembly outside the closure are not.
//! * **No-std**: `Duration` comes from `core::time` and is always available;
//!   measurement itself needs `std::time::Instant`, so without the `std`
//!   feature the elapsed time is reported as zero.
//!
//! ## Non-goals
//!
//! * This module does not retry, schedule, or run work on other threads.

// External dependencies
use core::time::Duration;

// ============================================================================
// Timed Value
// ============================================================================

/// A computation result together with the wall time the computation took.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timed<V> {
    /// The wrapped computation's output.
    pub value: V,

    /// Wall time measured strictly around the computation.
    pub elapsed: Duration,
}

// ============================================================================
// Decorator
// ============================================================================

/// Run a fallible closure and measure its wall time.
///
/// Errors pass through unmeasured; a result is only timed when the closure
/// succeeds.
#[cfg(feature = "std")]
pub fn timed<V, E, F>(f: F) -> Result<Timed<V>, E>
where
    F: FnOnce() -> Result<V, E>,
{
    let start = std::time::Instant::now();
    let value = f()?;
    Ok(Timed {
        value,
        elapsed: start.elapsed(),
    })
}

/// Run a fallible closure; without `std` the elapsed time is zero.
#[cfg(not(feature = "std"))]
pub fn timed<V, E, F>(f: F) -> Result<Timed<V>, E>
where
    F: FnOnce() -> Result<V, E>,
{
    let value = f()?;
    Ok(Timed {
        value,
        elapsed: Duration::new(0, 0),
    })
}
