//! Session state tracking
//!
//! Maintains:
//! - Completed rounds
//! - Whether the session was cancelled
//! - Session timing (start/end)

use super::accuracy::AccuracyTracker;
use super::errors::ErrorDetector;
use std::time::{Duration, Instant};

/// Confusion pairs reported in the result
const REPORTED_MISTAKES: usize = 5;

/// Complete session state
#[derive(Clone, Debug)]
pub struct SessionState {
    /// Rounds the session was configured for
    pub rounds_total: u32,
    /// Rounds typed to the end
    pub rounds_completed: u32,
    /// Set when escape ended the session
    pub cancelled: bool,
    /// Session start time
    pub start_time: Option<Instant>,
    /// Session end time
    pub end_time: Option<Instant>,
}

impl SessionState {
    /// Create new session state for `rounds_total` rounds
    pub fn new(rounds_total: u32) -> Self {
        SessionState {
            rounds_total,
            rounds_completed: 0,
            cancelled: false,
            start_time: None,
            end_time: None,
        }
    }

    /// Start the session timer
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
        self.end_time = None;
    }

    pub fn complete_round(&mut self) {
        self.rounds_completed += 1;
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Time between start and end (or now, while running)
    pub fn duration(&self) -> Duration {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => end.saturating_duration_since(start),
            (Some(start), None) => start.elapsed(),
            _ => Duration::ZERO,
        }
    }

    /// Stop the timer and summarize the session
    pub fn finish(&mut self, stats: &AccuracyTracker, errors: &ErrorDetector) -> SessionResult {
        if self.start_time.is_some() && self.end_time.is_none() {
            self.end_time = Some(Instant::now());
        }

        SessionResult {
            rounds_completed: self.rounds_completed,
            rounds_total: self.rounds_total,
            success_count: stats.success_count(),
            fail_count: stats.fail_count(),
            accuracy: stats.accuracy(),
            cancelled: self.cancelled,
            elapsed: self.duration(),
            frequent_mistakes: errors.top_error_pairs(REPORTED_MISTAKES),
            persistent_mistakes: errors.problematic_chars(),
        }
    }
}

/// Final statistics of a session
#[derive(Clone, Debug, PartialEq)]
pub struct SessionResult {
    pub rounds_completed: u32,
    pub rounds_total: u32,
    pub success_count: u32,
    pub fail_count: u32,
    /// Percent, 0.0 when nothing was typed
    pub accuracy: f64,
    pub cancelled: bool,
    pub elapsed: Duration,
    /// ((expected, typed), count), most frequent first
    pub frequent_mistakes: Vec<((char, char), u32)>,
    /// Expected kana mistyped as the same other kana 3+ times, sorted
    pub persistent_mistakes: Vec<char>,
}

impl SessionResult {
    /// Correct keystrokes per minute
    pub fn keystrokes_per_minute(&self) -> f64 {
        let mins = self.elapsed.as_secs_f64() / 60.0;
        if mins > 0.0 {
            f64::from(self.success_count) / mins
        } else {
            0.0
        }
    }
}
