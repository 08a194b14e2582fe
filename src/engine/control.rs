//! Progress reporting and cooperative cancellation.
//!
//! ## Purpose
//!
//! This module models the execution contract every estimator honors: a
//! progress sink receiving monotonically non-decreasing percentages, and a
//! poll-able cancellation token that aborts a computation cooperatively.
//!
//! ## Design notes
//!
//! * **Capabilities, not inheritance**: Progress and cancellation are two
//!   passed-in capabilities bundled in [`Control`]; estimators carry no
//!   callback state of their own.
//! * **Shareable sinks**: [`ProgressSink::report`] takes `&self`, so a sink
//!   can be invoked from the computation thread and marshalled wherever the
//!   caller prefers. Any `Fn(u8)` closure is a sink via the blanket impl.
//! * **Replaceable source**: A [`CancelSource`] hands out cheap token clones
//!   backed by one atomic flag. Starting a new computation on an estimator
//!   means the caller replaces the source; the estimator holds no queue.
//!
//! ## Key concepts
//!
//! * **Checkpoint**: Algorithms call [`Control::checkpoint`] once per outer
//!   loop iteration; an observed cancellation unwinds as
//!   [`EstimateError::Cancelled`] with partial work discarded.
//!
//! ## Invariants
//!
//! * Reported percentages are in [0, 100].
//! * A cancelled source stays cancelled; tokens never reset.
//!
//! ## Non-goals
//!
//! * This module does not spawn threads or marshal callbacks to other
//!   execution contexts.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

// External dependencies
use core::sync::atomic::{AtomicBool, Ordering};

// Internal dependencies
use crate::primitives::errors::EstimateError;

// ============================================================================
// Progress Sink
// ============================================================================

/// Receiver for progress percentages in [0, 100].
///
/// Implemented for any `Fn(u8)` closure, so a caller can pass
/// `&|pct| { .. }` directly.
pub trait ProgressSink {
    /// Receive a progress update.
    fn report(&self, percent: u8);
}

impl<F: Fn(u8)> ProgressSink for F {
    fn report(&self, percent: u8) {
        self(percent)
    }
}

// ============================================================================
// Cancellation
// ============================================================================

/// Owner side of a cancellation flag.
///
/// The source is kept by the orchestrating caller; estimators only ever see
/// tokens. Cancelling is sticky and thread-safe.
#[derive(Debug, Default)]
pub struct CancelSource {
    flag: Arc<AtomicBool>,
}

impl CancelSource {
    /// Create a fresh, uncancelled source.
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Hand out a token observing this source.
    pub fn token(&self) -> CancelToken {
        CancelToken {
            flag: Some(Arc::clone(&self.flag)),
        }
    }

    /// Request cancellation of every computation holding a token.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

/// Poll-able view of a [`CancelSource`].
///
/// The default token is never cancelled, so estimators can treat "no token"
/// and "token" uniformly.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Option<Arc<AtomicBool>>,
}

impl CancelToken {
    /// A token that never reports cancellation.
    pub fn none() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested on the owning source.
    pub fn is_cancelled(&self) -> bool {
        self.flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}

// ============================================================================
// Control
// ============================================================================

/// Execution control handed to every compute/fit call.
///
/// Bundles an optional progress sink with a cancellation token. The default
/// control reports nowhere and never cancels.
#[derive(Default)]
pub struct Control<'a> {
    progress: Option<&'a dyn ProgressSink>,
    cancel: CancelToken,
}

impl<'a> Control<'a> {
    /// Control with no progress sink and no cancellation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a progress sink.
    pub fn with_progress(mut self, sink: &'a dyn ProgressSink) -> Self {
        self.progress = Some(sink);
        self
    }

    /// Attach a cancellation token.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    /// Forward a progress percentage to the sink, if any.
    pub fn report(&self, percent: u8) {
        if let Some(sink) = self.progress {
            sink.report(percent);
        }
    }

    /// Poll the cancellation token, unwinding with
    /// [`EstimateError::Cancelled`] once cancellation is observed.
    pub fn checkpoint(&self) -> Result<(), EstimateError> {
        if self.cancel.is_cancelled() {
            return Err(EstimateError::Cancelled);
        }
        Ok(())
    }
}
