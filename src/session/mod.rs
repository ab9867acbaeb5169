//! Session Management: judging, state tracking, accuracy and error detection
//!
//! # Components
//! - `judge.rs`: JudgeEngine and per-keystroke verdicts
//! - `state.rs`: SessionState and the final SessionResult
//! - `accuracy.rs`: success/mistake counters
//! - `errors.rs`: confused kana pairs
//! - `runner.rs`: Session loop and its KeySource/Presenter collaborators

pub mod accuracy;
pub mod errors;
pub mod judge;
pub mod runner;
pub mod state;

pub use accuracy::AccuracyTracker;
pub use errors::ErrorDetector;
pub use judge::{JudgeEngine, JudgeState, Verdict};
pub use runner::{KeySource, Presenter, ProgressView, Session};
pub use state::{SessionResult, SessionState};

/// Rounds per session unless configured otherwise
pub const DEFAULT_ROUNDS: u32 = 8;
