//! Board coordinates.
//!
//! `(row, col)` with row 0 at the top, as rendered. Algebraic naming follows
//! chess convention: files run 'a'.. left to right (by column), ranks count
//! down from the board size (row 0 is the highest rank).

use serde::{Deserialize, Serialize};

/// A square position on an N×N board.
///
/// ## Example
///
/// ```
/// use chess_drills::Coord;
///
/// let a8 = Coord::new(0, 0);
/// assert_eq!(a8.algebraic(8), "a8");
/// assert!(a8.is_light());
///
/// // Offsets that leave the board return None
/// assert_eq!(a8.offset(-1, 0, 8), None);
/// assert_eq!(a8.offset(2, 1, 8), Some(Coord::new(2, 1)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Row index, 0-based from the top.
    pub row: usize,
    /// Column index, 0-based from the left.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed offset, returning `None` if the result leaves
    /// `[0, size)` in either axis.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32, size: usize) -> Option<Coord> {
        let row = self.row as i64 + dr as i64;
        let col = self.col as i64 + dc as i64;
        if row < 0 || col < 0 || row >= size as i64 || col >= size as i64 {
            return None;
        }
        Some(Coord::new(row as usize, col as usize))
    }

    /// Whether this square is light in the checker pattern.
    ///
    /// `(row + col) % 2 == 0` is light.
    #[must_use]
    pub const fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// File letter for this column: 'a', 'b', ...
    ///
    /// Caller guarantees `col < 26`; columns past 'z' have no file letter.
    #[must_use]
    pub const fn file_label(self) -> char {
        debug_assert!(self.col < 26);
        (b'a' + self.col as u8) as char
    }

    /// Rank number for this row on a board of the given size: size down to 1.
    ///
    /// Caller guarantees `row < size`; rows off the board have no rank.
    #[must_use]
    pub const fn rank_label(self, size: usize) -> usize {
        debug_assert!(self.row < size);
        size - self.row
    }

    /// Algebraic name, e.g. "e4".
    #[must_use]
    pub fn algebraic(self, size: usize) -> String {
        format!("{}{}", self.file_label(), self.rank_label(size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_in_bounds() {
        let c = Coord::new(4, 4);
        assert_eq!(c.offset(2, 1, 8), Some(Coord::new(6, 5)));
        assert_eq!(c.offset(-2, -1, 8), Some(Coord::new(2, 3)));
    }

    #[test]
    fn test_offset_out_of_bounds() {
        let c = Coord::new(0, 7);
        assert_eq!(c.offset(-1, 0, 8), None);
        assert_eq!(c.offset(0, 1, 8), None);
        assert_eq!(c.offset(8, 0, 8), None);
    }

    #[test]
    fn test_light_dark_pattern() {
        assert!(Coord::new(0, 0).is_light());
        assert!(!Coord::new(0, 1).is_light());
        assert!(!Coord::new(1, 0).is_light());
        assert!(Coord::new(1, 1).is_light());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Coord::new(0, 0).file_label(), 'a');
        assert_eq!(Coord::new(0, 7).file_label(), 'h');
        assert_eq!(Coord::new(0, 0).rank_label(8), 8);
        assert_eq!(Coord::new(7, 0).rank_label(8), 1);
    }

    #[test]
    #[should_panic]
    fn test_file_label_past_z_panics() {
        let _ = Coord::new(0, 26).file_label();
    }

    #[test]
    #[should_panic]
    fn test_rank_label_off_board_panics() {
        let _ = Coord::new(8, 0).rank_label(8);
    }

    #[test]
    fn test_algebraic() {
        assert_eq!(Coord::new(0, 0).algebraic(8), "a8");
        assert_eq!(Coord::new(7, 7).algebraic(8), "h1");
        assert_eq!(Coord::new(4, 4).algebraic(8), "e4");
        // Smaller boards shift the rank numbering
        assert_eq!(Coord::new(0, 0).algebraic(4), "a4");
    }

    #[test]
    fn test_serialization() {
        let c = Coord::new(3, 5);
        let json = serde_json::to_string(&c).unwrap();
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
