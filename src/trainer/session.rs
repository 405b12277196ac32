//! Trainer session state machine.
//!
//! The trainer shows a target square name ("e4") and the player clicks where
//! they think it is. A session tracks score, attempts, and a countdown clock.
//! The clock is pure state: the hosting environment calls `tick` once per
//! second — there are no internal timers or background work.
//!
//! ## Modes
//!
//! - **Timed**: `start` arms the countdown; `tick` drives it; the session
//!   stops itself at zero.
//! - **Practice** (not running): clicks still score and correct answers still
//!   advance the target, just without a clock.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rng::{TrainerRng, TrainerRngState};
use crate::board::Coord;

/// Default countdown length in seconds.
pub const DEFAULT_DURATION_SECS: u32 = 60;

/// Feedback for the most recent click, for UI highlighting.
///
/// Stays set until the hosting layer calls `clear_feedback`, typically after
/// a short highlight delay of its own choosing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickFeedback {
    /// The square that was clicked.
    pub coord: Coord,
    /// Whether it matched the target.
    pub correct: bool,
}

/// Serializable session snapshot for save/restore.
///
/// Captures everything a session needs to resume exactly where it left off,
/// including the RNG position, so the target sequence continues unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    pub size: usize,
    pub duration_secs: u32,
    pub time_remaining: u32,
    pub target: Coord,
    pub last_click: Option<ClickFeedback>,
    pub score: u32,
    pub attempts: u32,
    pub running: bool,
    pub rng: TrainerRngState,
}

/// A coordinate-identification training session.
///
/// ## Example
///
/// ```
/// use chess_drills::TrainerSession;
///
/// let mut session = TrainerSession::new(8, 60, 42);
/// session.start();
///
/// let target = session.target();
/// assert!(session.click(target));
/// assert_eq!(session.score(), 1);
/// assert_eq!(session.accuracy(), 100);
/// ```
#[derive(Clone, Debug)]
pub struct TrainerSession {
    size: usize,
    duration_secs: u32,
    time_remaining: u32,
    target: Coord,
    last_click: Option<ClickFeedback>,
    score: u32,
    attempts: u32,
    running: bool,
    rng: TrainerRng,
}

impl TrainerSession {
    /// Create a session for a `size`×`size` board with the given countdown
    /// length. A first target is drawn immediately.
    #[must_use]
    pub fn new(size: usize, duration_secs: u32, seed: u64) -> Self {
        assert!(size >= 1, "Board size must be at least 1");
        let mut rng = TrainerRng::new(seed);
        let target = rng.gen_coord(size);
        Self {
            size,
            duration_secs,
            time_remaining: duration_secs,
            target,
            last_click: None,
            score: 0,
            attempts: 0,
            running: false,
            rng,
        }
    }

    /// Standard session: 8×8 board, 60-second clock.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(8, DEFAULT_DURATION_SECS, seed)
    }

    // === Accessors ===

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The square the player should find.
    #[must_use]
    pub fn target(&self) -> Coord {
        self.target
    }

    /// Target in algebraic form, as shown to the player.
    #[must_use]
    pub fn target_name(&self) -> String {
        self.target.algebraic(self.size)
    }

    /// Correct clicks this session.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total clicks this session.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether the timed countdown is running.
    #[must_use]
    pub fn running(&self) -> bool {
        self.running
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Feedback for the most recent click, if not yet cleared.
    #[must_use]
    pub fn last_click(&self) -> Option<ClickFeedback> {
        self.last_click
    }

    /// Hit percentage, rounded to the nearest whole percent. 0 with no
    /// attempts.
    #[must_use]
    pub fn accuracy(&self) -> u32 {
        if self.attempts == 0 {
            return 0;
        }
        ((self.score as f64 / self.attempts as f64) * 100.0).round() as u32
    }

    // === Session control ===

    /// Arm the countdown and zero the counters. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.time_remaining = self.duration_secs;
        self.score = 0;
        self.attempts = 0;
        self.last_click = None;
        self.next_target();
        debug!(duration_secs = self.duration_secs, "trainer session started");
    }

    /// Stop the countdown. Score and attempts are preserved.
    pub fn stop(&mut self) {
        if self.running {
            debug!(
                score = self.score,
                attempts = self.attempts,
                "trainer session stopped"
            );
        }
        self.running = false;
    }

    /// Advance the clock by one second. Stops the session when it reaches
    /// zero. No-op while not running.
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.stop();
        }
    }

    /// Stop and restore the initial idle state, with a fresh target.
    pub fn reset(&mut self) {
        self.stop();
        self.time_remaining = self.duration_secs;
        self.score = 0;
        self.attempts = 0;
        self.last_click = None;
        self.next_target();
    }

    // === Gameplay ===

    /// Record a click on `coord`. Returns whether it hit the target.
    ///
    /// Counts an attempt either way; a hit also scores and draws the next
    /// target. Scoring applies in practice mode too (clock stopped).
    pub fn click(&mut self, coord: Coord) -> bool {
        let correct = coord == self.target;
        self.last_click = Some(ClickFeedback { coord, correct });
        self.attempts += 1;
        if correct {
            self.score += 1;
            self.next_target();
        }
        correct
    }

    /// Clear the last-click highlight.
    pub fn clear_feedback(&mut self) {
        self.last_click = None;
    }

    fn next_target(&mut self) {
        self.target = self.rng.gen_coord(self.size);
    }

    // === Snapshot ===

    /// Capture the session for serialization.
    #[must_use]
    pub fn state(&self) -> SessionState {
        SessionState {
            size: self.size,
            duration_secs: self.duration_secs,
            time_remaining: self.time_remaining,
            target: self.target,
            last_click: self.last_click,
            score: self.score,
            attempts: self.attempts,
            running: self.running,
            rng: self.rng.state(),
        }
    }

    /// Restore a session from a saved state.
    #[must_use]
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            size: state.size,
            duration_secs: state.duration_secs,
            time_remaining: state.time_remaining,
            target: state.target,
            last_click: state.last_click,
            score: state.score,
            attempts: state.attempts,
            running: state.running,
            rng: TrainerRng::from_state(&state.rng),
        }
    }
}
