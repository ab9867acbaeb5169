//! Session orchestration
//!
//! Runs a fixed number of rounds. Each round picks a random target from the
//! pool (with replacement) and feeds keystrokes to the judge until the target
//! is typed or escape is pressed.

use super::accuracy::AccuracyTracker;
use super::errors::ErrorDetector;
use super::judge::{JudgeEngine, JudgeState, Verdict};
use super::state::{SessionResult, SessionState};
use crate::error::TrainerError;
use crate::kana::{KeyCode, KeyKanaTable, Target};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{info, trace};

/// Blocking source of keystrokes
pub trait KeySource {
    /// Wait for the next key
    fn next_key(&mut self) -> Result<KeyCode, TrainerError>;
}

/// Everything a renderer needs after a keystroke
#[derive(Clone, Copy, Debug)]
pub struct ProgressView<'a> {
    pub target: &'a Target,
    pub cursor: usize,
    /// None right after a round starts
    pub verdict: Option<Verdict>,
    pub stats: &'a AccuracyTracker,
}

/// Receives session progress for display
pub trait Presenter {
    fn round_started(&mut self, round: u32, total: u32, target: &Target) -> Result<(), TrainerError>;

    fn progress(&mut self, view: &ProgressView<'_>) -> Result<(), TrainerError>;

    fn finished(&mut self, result: &SessionResult) -> Result<(), TrainerError>;
}

/// A configured typing session
pub struct Session<'t> {
    engine: JudgeEngine<'t>,
    pool: Vec<Target>,
    rounds: u32,
}

impl<'t> Session<'t> {
    /// Create a session over a non-empty pool of targets
    pub fn new(table: &'t KeyKanaTable, pool: Vec<Target>, rounds: u32) -> Result<Self, TrainerError> {
        if pool.is_empty() {
            return Err(TrainerError::EmptySentencePool);
        }

        Ok(Session {
            engine: JudgeEngine::new(table),
            pool,
            rounds,
        })
    }

    /// Run all rounds, or until cancelled
    pub fn run<K, P, R>(&self, keys: &mut K, presenter: &mut P, rng: &mut R) -> Result<SessionResult, TrainerError>
    where
        K: KeySource + ?Sized,
        P: Presenter + ?Sized,
        R: Rng + ?Sized,
    {
        let mut state = SessionState::new(self.rounds);
        let mut stats = AccuracyTracker::new();
        let mut errors = ErrorDetector::new();
        state.start();

        'session: for round in 1..=self.rounds {
            let Some(target) = self.pool.choose(rng) else {
                break;
            };

            info!(round, total = self.rounds, sentence = target.original(), "round started");
            presenter.round_started(round, self.rounds, target)?;

            let mut judge = JudgeState::begin(&self.engine, target);
            presenter.progress(&ProgressView {
                target,
                cursor: judge.cursor(),
                verdict: None,
                stats: &stats,
            })?;

            while !judge.is_complete() {
                let key = keys.next_key()?;
                let cursor = judge.cursor();
                let verdict = judge.advance(&self.engine, target, key);

                match verdict {
                    Verdict::Correct => stats.record_success(),
                    Verdict::Mistake { typed } => {
                        stats.record_failure();
                        if let Some(expected) = target.char_at(cursor) {
                            errors.record_error(expected, typed);
                        }
                    }
                    Verdict::Cancelled => {}
                    Verdict::Ignored => {
                        trace!(key, "ignored key");
                        continue;
                    }
                }

                presenter.progress(&ProgressView {
                    target,
                    cursor: judge.cursor(),
                    verdict: Some(verdict),
                    stats: &stats,
                })?;

                if verdict == Verdict::Cancelled {
                    info!(round, "session cancelled");
                    state.cancel();
                    break 'session;
                }
            }

            state.complete_round();
        }

        let result = state.finish(&stats, &errors);
        info!(
            rounds = result.rounds_completed,
            success = result.success_count,
            failed = result.fail_count,
            accuracy = result.accuracy,
            "session finished"
        );
        presenter.finished(&result)?;
        Ok(result)
    }
}
