//! Static chess piece metadata.
//!
//! Reference data shared by the mini-games: Unicode symbols, display names,
//! and the optimal piece counts for the dominance and independence puzzles.
//! Pure lookup tables — no behavior lives here.

use serde::{Deserialize, Serialize};

/// The six chess piece types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Queen,
    Rook,
    Bishop,
    Knight,
    King,
    Pawn,
}

impl PieceType {
    /// All piece types, in display order.
    pub const ALL: [PieceType; 6] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
        PieceType::King,
        PieceType::Pawn,
    ];

    /// White Unicode chess symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            PieceType::Queen => '\u{2655}',
            PieceType::Rook => '\u{2656}',
            PieceType::Bishop => '\u{2657}',
            PieceType::Knight => '\u{2658}',
            PieceType::King => '\u{2654}',
            PieceType::Pawn => '\u{2659}',
        }
    }

    /// Capitalized display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PieceType::Queen => "Queen",
            PieceType::Rook => "Rook",
            PieceType::Bishop => "Bishop",
            PieceType::Knight => "Knight",
            PieceType::King => "King",
            PieceType::Pawn => "Pawn",
        }
    }

    /// Plural display name.
    #[must_use]
    pub const fn plural_name(self) -> &'static str {
        match self {
            PieceType::Queen => "Queens",
            PieceType::Rook => "Rooks",
            PieceType::Bishop => "Bishops",
            PieceType::Knight => "Knights",
            PieceType::King => "Kings",
            PieceType::Pawn => "Pawns",
        }
    }

    /// Optimal piece count for the dominance puzzle (cover every square) on
    /// a `board_size`×`board_size` board.
    ///
    /// Tabulated for board sizes 4 through 8; `None` outside that range.
    #[must_use]
    pub const fn dominance_optimal_count(self, board_size: usize) -> Option<u8> {
        if board_size < 4 || board_size > 8 {
            return None;
        }
        let table: [u8; 5] = match self {
            PieceType::Queen => [2, 3, 3, 4, 5],
            PieceType::Rook => [4, 5, 6, 7, 8],
            PieceType::Bishop => [4, 5, 6, 7, 8],
            PieceType::Knight => [4, 5, 8, 10, 12],
            PieceType::King => [4, 4, 4, 9, 9],
            PieceType::Pawn => [8, 12, 18, 25, 28],
        };
        Some(table[board_size - 4])
    }

    /// Piece count for the independence puzzle (no piece attacks another) on
    /// the standard 8×8 board.
    #[must_use]
    pub const fn independence_count(self) -> u8 {
        match self {
            PieceType::Queen => 1,
            PieceType::Rook => 2,
            PieceType::Bishop => 2,
            PieceType::Knight => 2,
            PieceType::King => 1,
            PieceType::Pawn => 8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(PieceType::King.symbol(), '♔');
        assert_eq!(PieceType::Queen.symbol(), '♕');
        assert_eq!(PieceType::Knight.symbol(), '♘');
        assert_eq!(PieceType::Pawn.symbol(), '♙');
    }

    #[test]
    fn test_names() {
        assert_eq!(PieceType::Knight.name(), "Knight");
        assert_eq!(PieceType::Knight.plural_name(), "Knights");
        assert_eq!(PieceType::Queen.plural_name(), "Queens");
    }

    #[test]
    fn test_all_order() {
        assert_eq!(PieceType::ALL[0], PieceType::Queen);
        assert_eq!(PieceType::ALL[5], PieceType::Pawn);
        assert_eq!(PieceType::ALL.len(), 6);
    }

    #[test]
    fn test_dominance_counts() {
        assert_eq!(PieceType::Queen.dominance_optimal_count(8), Some(5));
        assert_eq!(PieceType::Knight.dominance_optimal_count(8), Some(12));
        assert_eq!(PieceType::Knight.dominance_optimal_count(4), Some(4));
        assert_eq!(PieceType::King.dominance_optimal_count(6), Some(4));
        assert_eq!(PieceType::Pawn.dominance_optimal_count(7), Some(25));

        assert_eq!(PieceType::Queen.dominance_optimal_count(3), None);
        assert_eq!(PieceType::Queen.dominance_optimal_count(9), None);
    }

    #[test]
    fn test_independence_counts() {
        assert_eq!(PieceType::Queen.independence_count(), 1);
        assert_eq!(PieceType::Pawn.independence_count(), 8);
        assert_eq!(PieceType::Rook.independence_count(), 2);
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&PieceType::Knight).unwrap();
        assert_eq!(json, "\"knight\"");
        let back: PieceType = serde_json::from_str("\"queen\"").unwrap();
        assert_eq!(back, PieceType::Queen);
    }
}
