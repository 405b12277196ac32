//! # chess-drills
//!
//! Game-logic cores for two chess training mini-games, kept strictly free of
//! presentation concerns.
//!
//! ## Design Principles
//!
//! 1. **Engine-Only**: No rendering, timers, or input plumbing. A UI layer
//!    forwards square selections in and polls read-only state back out.
//!
//! 2. **Derived, Not Cached**: Status queries (`is_complete`, `is_stuck`,
//!    `has_valid_moves`) are recomputed from primary state on every call.
//!    There are no redundant flags to drift out of sync.
//!
//! 3. **Illegal Input Is Routine**: Clicking an unreachable square is normal
//!    gameplay, not a fault. `apply_move` rejects it as a no-op; errors are
//!    reserved for out-of-range coordinate access.
//!
//! ## Modules
//!
//! - `board`: Coordinates, per-square visited/order state, the N×N grid
//! - `tour`: The Knight's Tour state machine (`TourEngine`)
//! - `pieces`: Static chess piece metadata (symbols, names, puzzle counts)
//! - `trainer`: Coordinate-identification trainer session logic

pub mod board;
pub mod pieces;
pub mod tour;
pub mod trainer;

// Re-export commonly used types
pub use crate::board::{Board, BoardError, Coord, Square};

pub use crate::pieces::PieceType;

pub use crate::tour::{TourEngine, TourStatus, KNIGHT_OFFSETS};

pub use crate::trainer::{
    ClickFeedback, SessionState, TrainerRng, TrainerRngState, TrainerSession,
};
