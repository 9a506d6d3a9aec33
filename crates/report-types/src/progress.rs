//! Progress reporting for long-running stages.
//!
//! Stages report progress through an injected sink rather than calling an
//! ambient progress function from inside algorithm loops. Implementations
//! must tolerate concurrent `advance` calls, so both methods take `&self`
//! and the provided implementations use atomics.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sink for incremental progress updates.
///
/// The orchestrating stage calls `set_total` once up front and `advance`
/// once per completed unit of work.
pub trait ProgressSink: Send + Sync {
    /// Declare the total number of work units for this stage.
    fn set_total(&self, total: u64);

    /// Record `delta` completed work units.
    fn advance(&self, delta: u64);
}

/// Sink that discards all updates.
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn set_total(&self, _total: u64) {}
    fn advance(&self, _delta: u64) {}
}

/// Sink that logs progress through `tracing`.
pub struct LogProgress {
    stage: String,
    total: AtomicU64,
    done: AtomicU64,
}

impl LogProgress {
    /// Create a logging sink labeled with the stage name.
    pub fn new(stage: impl Into<String>) -> Self {
        Self {
            stage: stage.into(),
            total: AtomicU64::new(0),
            done: AtomicU64::new(0),
        }
    }
}

impl ProgressSink for LogProgress {
    fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::SeqCst);
        self.done.store(0, Ordering::SeqCst);
        tracing::info!(stage = %self.stage, total, "Stage started");
    }

    fn advance(&self, delta: u64) {
        let done = self.done.fetch_add(delta, Ordering::SeqCst) + delta;
        let total = self.total.load(Ordering::SeqCst);
        tracing::debug!(stage = %self.stage, done, total, "Progress");
        if total > 0 && done >= total {
            tracing::info!(stage = %self.stage, total, "Stage complete");
        }
    }
}

/// Sink that counts updates, for assertions in tests.
pub struct CountingProgress {
    total: AtomicU64,
    done: AtomicU64,
}

impl CountingProgress {
    /// Create a counting sink with no total declared yet.
    pub fn new() -> Self {
        Self {
            total: AtomicU64::new(0),
            done: AtomicU64::new(0),
        }
    }

    /// Most recently declared total.
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }

    /// Sum of all advances since the last `set_total`.
    pub fn done(&self) -> u64 {
        self.done.load(Ordering::SeqCst)
    }
}

impl Default for CountingProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressSink for CountingProgress {
    fn set_total(&self, total: u64) {
        self.total.store(total, Ordering::SeqCst);
        self.done.store(0, Ordering::SeqCst);
    }

    fn advance(&self, delta: u64) {
        self.done.fetch_add(delta, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counting_progress() {
        let sink = CountingProgress::new();
        sink.set_total(5);
        sink.advance(1);
        sink.advance(2);
        assert_eq!(sink.total(), 5);
        assert_eq!(sink.done(), 3);
    }

    #[test]
    fn test_set_total_resets_done() {
        let sink = CountingProgress::new();
        sink.set_total(2);
        sink.advance(2);
        sink.set_total(4);
        assert_eq!(sink.done(), 0);
        assert_eq!(sink.total(), 4);
    }

    #[test]
    fn test_no_progress_is_silent() {
        let sink = NoProgress;
        sink.set_total(10);
        sink.advance(10);
    }
}
