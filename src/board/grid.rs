//! The N×N grid of squares.
//!
//! The board holds per-square state and nothing else: shape is fixed at
//! construction, contents are mutated through `mark`. Move legality lives in
//! the tour engine, which validates before touching the board.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::coord::Coord;
use super::square::Square;

/// Board access errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Coordinate outside `[0, size)` in either axis.
    #[error("coordinate ({row}, {col}) is out of range for a {size}x{size} board")]
    OutOfRange {
        row: usize,
        col: usize,
        size: usize,
    },
}

/// An N×N grid of squares, row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    squares: Vec<Square>,
}

impl Board {
    /// Create a board with every square unvisited.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "Board size must be at least 1");
        Self {
            size,
            squares: vec![Square::unvisited(); size * size],
        }
    }

    /// Board side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of squares.
    #[must_use]
    pub fn total_squares(&self) -> usize {
        self.size * self.size
    }

    /// Check whether a coordinate is on the board.
    #[must_use]
    pub fn is_in_bounds(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Get the square at a coordinate.
    ///
    /// Fails with `OutOfRange` for coordinates off the board.
    pub fn get(&self, coord: Coord) -> Result<&Square, BoardError> {
        if !self.is_in_bounds(coord) {
            return Err(BoardError::OutOfRange {
                row: coord.row,
                col: coord.col,
                size: self.size,
            });
        }
        Ok(&self.squares[self.index(coord)])
    }

    /// Mark a square visited with the given visit order.
    ///
    /// The caller guarantees the coordinate is in bounds, the square was
    /// previously unvisited, and `order` is the next sequence number. The
    /// board performs no validation of its own.
    pub fn mark(&mut self, coord: Coord, order: u32) {
        debug_assert!(self.is_in_bounds(coord));
        let idx = self.index(coord);
        debug_assert!(!self.squares[idx].visited);
        self.squares[idx] = Square {
            visited: true,
            order,
        };
    }

    /// Number of visited squares.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.squares.iter().filter(|sq| sq.visited).count()
    }

    /// Iterate over all squares in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Square)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .map(move |(i, sq)| (Coord::new(i / self.size, i % self.size), sq))
    }

    fn index(&self, coord: Coord) -> usize {
        coord.row * self.size + coord.col
    }
}
