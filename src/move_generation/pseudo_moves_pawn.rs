//! Pseudo-legal pawn moves: single and double pushes, diagonal captures,
//! and en-passant captures keyed off the stored en-passant file.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{is_enemy_piece, on_board};

pub fn generate_pawn_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    let (direction, start_row, ep_row) = match state.side_to_move {
        Color::White => (1i8, 1u8, 5i8),
        Color::Black => (-1i8, 6u8, 2i8),
    };

    let row = from.row as i8;
    let col = from.col as i8;

    // Single push, and the double push from the starting rank behind it.
    let one_ahead = row + direction;
    if on_board(one_ahead, col) && state.piece_at(Square::new(one_ahead as u8, from.col)) == EMPTY {
        out.push(Move::new(from, Square::new(one_ahead as u8, from.col)));

        if from.row == start_row {
            let two_ahead = (row + 2 * direction) as u8;
            if state.piece_at(Square::new(two_ahead, from.col)) == EMPTY {
                out.push(Move::new(from, Square::new(two_ahead, from.col)));
            }
        }
    }

    for col_delta in [-1i8, 1i8] {
        let capture_col = col + col_delta;
        if !on_board(one_ahead, capture_col) {
            continue;
        }

        let target_square = Square::new(one_ahead as u8, capture_col as u8);
        let target = state.piece_at(target_square);
        if target != EMPTY && is_enemy_piece(state, target) {
            out.push(Move::new(from, target_square));
        }

        // En passant: the stored file matches and this pawn sits on the rank
        // adjacent to the skipped square.
        if state.en_passant_col == Some(capture_col as u8) && row == ep_row - direction {
            out.push(Move::new(from, Square::new(ep_row as u8, capture_col as u8)));
        }
    }
}
