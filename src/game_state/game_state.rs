//! Central board state model.
//!
//! `GameState` is the single mutable entity the rest of the engine operates
//! on: the 8x8 grid of piece codes plus side to move, castling rights, and
//! the en-passant file. Search works on independently cloned descendants, so
//! the struct stays a cheap, flat `Clone`.

use crate::game_state::chess_types::*;
use crate::utils::fen_parser::parse_position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// `board[row][col]`; row 0 is rank 1.
    pub board: [[PieceCode; 8]; 8],
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Column of the pawn that just advanced two squares, valid for exactly
    /// one reply; `None` otherwise.
    pub en_passant_col: Option<u8>,
}

impl GameState {
    /// Empty board, White to move, full castling rights. Useful for building
    /// test positions square by square.
    pub fn new_empty() -> Self {
        Self {
            board: [[EMPTY; 8]; 8],
            side_to_move: Color::White,
            castling_rights: CASTLE_ALL,
            en_passant_col: None,
        }
    }

    /// Standard initial arrangement.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();

        for col in 0..8 {
            state.board[1][col] = piece_code(Color::White, PieceKind::Pawn);
            state.board[6][col] = piece_code(Color::Black, PieceKind::Pawn);
        }

        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.into_iter().enumerate() {
            state.board[0][col] = piece_code(Color::White, kind);
            state.board[7][col] = piece_code(Color::Black, kind);
        }

        state
    }

    /// Rebuild state from a placement string (see `utils::fen_parser` for
    /// the exact leniency rules).
    pub fn from_position(fen: &str) -> Self {
        parse_position(fen)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> PieceCode {
        self.board[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set_piece(&mut self, square: Square, code: PieceCode) {
        self.board[square.row as usize][square.col as usize] = code;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;

    #[test]
    fn new_game_sets_up_standard_arrangement() {
        let state = GameState::new_game();

        assert_eq!(state.side_to_move, Color::White);
        assert_eq!(state.castling_rights, CASTLE_ALL);
        assert_eq!(state.en_passant_col, None);

        for col in 0..8u8 {
            assert_eq!(
                state.piece_at(Square::new(1, col)),
                piece_code(Color::White, PieceKind::Pawn)
            );
            assert_eq!(
                state.piece_at(Square::new(6, col)),
                piece_code(Color::Black, PieceKind::Pawn)
            );
        }
        assert_eq!(
            state.piece_at(Square::new(0, 4)),
            piece_code(Color::White, PieceKind::King)
        );
        assert_eq!(
            state.piece_at(Square::new(7, 3)),
            piece_code(Color::Black, PieceKind::Queen)
        );
        assert_eq!(state.piece_at(Square::new(4, 4)), EMPTY);
    }

    #[test]
    fn from_position_on_starting_fen_matches_new_game() {
        let parsed = GameState::from_position(STARTING_POSITION_FEN);
        assert_eq!(parsed, GameState::new_game());
    }
}
