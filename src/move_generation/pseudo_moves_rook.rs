//! Pseudo-legal rook moves: the four orthogonal rays.

use crate::game_state::chess_types::{Move, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::push_ray_moves;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

pub fn generate_rook_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(state, from, &ROOK_DIRECTIONS, out);
}
