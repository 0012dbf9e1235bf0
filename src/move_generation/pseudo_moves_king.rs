//! Pseudo-legal king moves: the eight adjacent squares plus castling.
//!
//! Castling is offered when the rights flag for that wing is still set, the
//! squares strictly between king and rook are empty, and the rook is still
//! physically on its home square. Whether the king is in check, or passes
//! through or lands on an attacked square, is not examined; the generator
//! stays pseudo-legal throughout.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{is_enemy_piece, on_board};

const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub fn generate_king_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in KING_OFFSETS {
        let row = from.row as i8 + row_delta;
        let col = from.col as i8 + col_delta;
        if !on_board(row, col) {
            continue;
        }

        let to = Square::new(row as u8, col as u8);
        let target = state.piece_at(to);
        if target == EMPTY || is_enemy_piece(state, target) {
            out.push(Move::new(from, to));
        }
    }

    let (home_row, rook, kingside_flag, queenside_flag) = match state.side_to_move {
        Color::White => (
            0u8,
            piece_code(Color::White, PieceKind::Rook),
            CASTLE_WHITE_KINGSIDE,
            CASTLE_WHITE_QUEENSIDE,
        ),
        Color::Black => (
            7u8,
            piece_code(Color::Black, PieceKind::Rook),
            CASTLE_BLACK_KINGSIDE,
            CASTLE_BLACK_QUEENSIDE,
        ),
    };

    if from.row != home_row || from.col != 4 {
        return;
    }

    if state.castling_rights & kingside_flag != 0
        && state.piece_at(Square::new(home_row, 5)) == EMPTY
        && state.piece_at(Square::new(home_row, 6)) == EMPTY
        && state.piece_at(Square::new(home_row, 7)) == rook
    {
        out.push(Move::new(from, Square::new(home_row, 6)));
    }

    if state.castling_rights & queenside_flag != 0
        && state.piece_at(Square::new(home_row, 3)) == EMPTY
        && state.piece_at(Square::new(home_row, 2)) == EMPTY
        && state.piece_at(Square::new(home_row, 1)) == EMPTY
        && state.piece_at(Square::new(home_row, 0)) == rook
    {
        out.push(Move::new(from, Square::new(home_row, 2)));
    }
}
