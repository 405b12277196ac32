//! Board representation: coordinates, squares, and the N×N grid.

mod coord;
mod grid;
mod square;

pub use coord::Coord;
pub use grid::{Board, BoardError};
pub use square::Square;
