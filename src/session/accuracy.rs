//! Accuracy tracking
//!
//! Counts correctly typed characters and mistakes across the whole session.

/// Highest miss count the header has room for
const MAX_DISPLAYED_MISSES: u32 = 999;

/// Session-wide keystroke counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccuracyTracker {
    /// Characters typed correctly
    success: u32,
    /// Mapped keys pressed at the wrong position
    failed: u32,
}

impl AccuracyTracker {
    /// Create new accuracy tracker
    pub fn new() -> Self {
        AccuracyTracker::default()
    }

    pub fn record_success(&mut self) {
        self.success += 1;
    }

    pub fn record_failure(&mut self) {
        self.failed += 1;
    }

    pub fn success_count(&self) -> u32 {
        self.success
    }

    pub fn fail_count(&self) -> u32 {
        self.failed
    }

    /// Mistake count clamped for the three-digit header field
    pub fn miss(&self) -> u32 {
        self.failed.min(MAX_DISPLAYED_MISSES)
    }

    /// Accuracy in percent (0.0 before any keystroke)
    pub fn accuracy(&self) -> f64 {
        accuracy_percent(self.success, self.failed)
    }
}

/// `100 * success / (success + failed)`, or 0.0 when both are zero
pub fn accuracy_percent(success: u32, failed: u32) -> f64 {
    let total = u64::from(success) + u64::from(failed);
    if total == 0 {
        0.0
    } else {
        100.0 * f64::from(success) / total as f64
    }
}
