//! Derived tour status.

use serde::{Deserialize, Serialize};

/// Where a tour stands, derived from engine state on demand.
///
/// `Complete` and `Stuck` are terminal: no `apply_move` can leave them, only
/// `reset`. Completion takes precedence over being stuck — a knight that has
/// covered the whole board is complete even though it has no moves left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TourStatus {
    /// No knight placed yet.
    NotStarted,
    /// Knight placed, squares remain, and a legal move exists.
    InProgress,
    /// Every square visited.
    Complete,
    /// Squares remain but the knight has no legal destination.
    Stuck,
}

impl TourStatus {
    /// Whether the tour can still accept moves.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, TourStatus::Complete | TourStatus::Stuck)
    }
}
