//! Knight's Tour engine.
//!
//! Tracks a knight traversing an N×N board: legal L-shaped moves only, each
//! square visited at most once, completion when every square is covered,
//! stuck when squares remain but no legal destination does.
//!
//! ## State Machine
//!
//! ```text
//! NotStarted --apply_move--> InProgress --apply_move--> Complete | Stuck
//!      ^                                                    |
//!      +--------------------- reset ------------------------+
//! ```
//!
//! The first placement is unconstrained: any unvisited square seats the
//! knight. Every move after that must be a knight offset from the current
//! position. The engine judges legality only; it never searches for a tour.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::status::TourStatus;
use crate::board::{Board, Coord};

/// The eight knight offsets, in the fixed enumeration order used by
/// `valid_moves`. Absolute row/col deltas are always the unordered pair
/// {1, 2}.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// In-memory Knight's Tour state machine over an N×N board.
///
/// ## Example
///
/// ```
/// use chess_drills::{Coord, TourEngine, TourStatus};
///
/// let mut engine = TourEngine::default(); // 8x8
/// assert_eq!(engine.status(), TourStatus::NotStarted);
///
/// // First placement is free
/// assert!(engine.apply_move(Coord::new(0, 0)));
/// assert_eq!(engine.move_count(), 1);
///
/// // Only knight offsets after that
/// assert!(!engine.apply_move(Coord::new(0, 1)));
/// assert!(engine.apply_move(Coord::new(2, 1)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TourEngine {
    board: Board,
    position: Option<Coord>,
    move_count: u32,
    started: bool,
}

impl Default for TourEngine {
    /// A standard 8×8 tour.
    fn default() -> Self {
        Self::new(8)
    }
}

impl TourEngine {
    /// Create an engine over an empty `size`×`size` board.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            position: None,
            move_count: 0,
            started: false,
        }
    }

    // === Accessors (read-only view for rendering) ===

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Current knight position, `None` before the first placement.
    #[must_use]
    pub fn position(&self) -> Option<Coord> {
        self.position
    }

    /// Number of squares visited so far. Also the order value of the most
    /// recently placed square.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the knight has been placed at least once since the last reset.
    #[must_use]
    pub fn started(&self) -> bool {
        self.started
    }

    /// Alias for `move_count`, in UI progress terms.
    #[must_use]
    pub fn squares_visited(&self) -> u32 {
        self.move_count
    }

    /// Total squares on the board.
    #[must_use]
    pub fn total_squares(&self) -> usize {
        self.board.total_squares()
    }

    // === Move validation ===

    /// Whether moving (or first-placing) the knight to `target` is legal.
    ///
    /// Checks, in order: bounds (fails closed), occupancy, then the knight
    /// offset rule — except that before the first placement any in-bounds
    /// unvisited square is legal. Pure; callable at any time.
    #[must_use]
    pub fn is_valid_move(&self, target: Coord) -> bool {
        // Bounds: out-of-range targets are illegal, not errors
        let Ok(square) = self.board.get(target) else {
            return false;
        };

        if square.visited {
            return false;
        }

        let Some(pos) = self.position else {
            // No knight placed yet: any unvisited square seats it
            return true;
        };

        let dr = (target.row as i64 - pos.row as i64).unsigned_abs();
        let dc = (target.col as i64 - pos.col as i64).unsigned_abs();
        (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
    }

    /// Legal destinations from the current position, in `KNIGHT_OFFSETS`
    /// order. Empty before the first placement.
    #[must_use]
    pub fn valid_moves(&self) -> SmallVec<[Coord; 8]> {
        let mut moves = SmallVec::new();
        let Some(pos) = self.position else {
            return moves;
        };

        for (dr, dc) in KNIGHT_OFFSETS {
            if let Some(dest) = pos.offset(dr, dc, self.board.size()) {
                if self.is_valid_move(dest) {
                    moves.push(dest);
                }
            }
        }

        moves
    }

    // === Move application ===

    /// Move the knight to `target` if legal.
    ///
    /// Returns `false` and mutates nothing on an illegal target — clicking an
    /// unreachable square is routine gameplay, not an error. On success the
    /// target square is marked with the new move count and the knight moves.
    pub fn apply_move(&mut self, target: Coord) -> bool {
        if !self.is_valid_move(target) {
            return false;
        }

        self.move_count += 1;
        self.board.mark(target, self.move_count);
        self.position = Some(target);
        self.started = true;

        debug!(
            row = target.row,
            col = target.col,
            move_count = self.move_count,
            "knight moved"
        );

        true
    }

    /// Discard all progress and return to the initial empty state.
    pub fn reset(&mut self) {
        debug!(size = self.board.size(), "tour reset");
        *self = Self::new(self.board.size());
    }

    // === Derived queries (recomputed each call, never cached) ===

    /// Whether every square has been visited.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.move_count as usize == self.board.total_squares()
    }

    /// Whether a legal move exists.
    ///
    /// Before the first placement this is unconditionally true: the board is
    /// always empty when no knight is placed (reset clears both together),
    /// so a first placement always exists.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        if self.position.is_none() {
            return true;
        }
        !self.valid_moves().is_empty()
    }

    /// Whether the tour has failed: started, squares remain, no legal move.
    ///
    /// A complete tour is never stuck, even though it too has no moves left.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.started && !self.is_complete() && !self.has_valid_moves()
    }

    /// Current status, derived from the queries above.
    #[must_use]
    pub fn status(&self) -> TourStatus {
        if !self.started {
            TourStatus::NotStarted
        } else if self.is_complete() {
            TourStatus::Complete
        } else if self.is_stuck() {
            TourStatus::Stuck
        } else {
            TourStatus::InProgress
        }
    }
}
