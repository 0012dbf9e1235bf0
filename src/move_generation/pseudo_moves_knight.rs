//! Pseudo-legal knight moves: the eight fixed offset jumps.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::{is_enemy_piece, on_board};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub fn generate_knight_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    for (row_delta, col_delta) in KNIGHT_OFFSETS {
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
}
