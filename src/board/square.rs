//! Per-square tour state.

use serde::{Deserialize, Serialize};

/// Visited/order state of a single board square.
///
/// `order` is the 1-based sequence number at which the knight landed here;
/// 0 means unvisited. The two fields are kept consistent by the marking
/// caller: `visited == false` iff `order == 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Square {
    /// Whether the knight has landed on this square.
    pub visited: bool,
    /// Visit sequence number, 1-based; 0 when unvisited.
    pub order: u32,
}

impl Square {
    /// The unvisited square.
    #[must_use]
    pub const fn unvisited() -> Self {
        Self {
            visited: false,
            order: 0,
        }
    }
}
