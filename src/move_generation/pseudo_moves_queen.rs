//! Pseudo-legal queen moves: the union of bishop and rook rays, in that
//! generation order.

use crate::game_state::chess_types::{Move, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

pub fn generate_queen_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    generate_bishop_moves(state, from, out);
    generate_rook_moves(state, from, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn lone_central_queen_covers_both_ray_sets() {
        let mut state = GameState::new_empty();
        let from = Square::new(3, 3);
        state.set_piece(from, piece_code(Color::White, PieceKind::Queen));

        let mut out = Vec::new();
        generate_queen_moves(&state, from, &mut out);
        assert_eq!(out.len(), 27);
    }

    #[test]
    fn queen_emits_diagonal_moves_before_orthogonal_ones() {
        let mut state = GameState::new_empty();
        let from = Square::new(3, 3);
        state.set_piece(from, piece_code(Color::White, PieceKind::Queen));

        let mut out = Vec::new();
        generate_queen_moves(&state, from, &mut out);

        let first_orthogonal = out
            .iter()
            .position(|m| m.to.row == from.row || m.to.col == from.col)
            .expect("queen should have orthogonal moves");
        assert_eq!(first_orthogonal, 13);
    }
}
