//! Pseudo-legal bishop moves: the four diagonal rays.

use crate::game_state::chess_types::{Move, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::push_ray_moves;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub fn generate_bishop_moves(state: &GameState, from: Square, out: &mut Vec<Move>) {
    push_ray_moves(state, from, &BISHOP_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::*;

    #[test]
    fn lone_central_bishop_covers_both_diagonals() {
        let mut state = GameState::new_empty();
        let from = Square::new(3, 3);
        state.set_piece(from, piece_code(Color::White, PieceKind::Bishop));

        let mut out = Vec::new();
        generate_bishop_moves(&state, from, &mut out);
        assert_eq!(out.len(), 13);
    }

    #[test]
    fn bishop_ray_includes_enemy_capture_square_and_stops_there() {
        let mut state = GameState::new_empty();
        let from = Square::new(0, 0);
        state.set_piece(from, piece_code(Color::White, PieceKind::Bishop));
        state.set_piece(Square::new(3, 3), piece_code(Color::Black, PieceKind::Rook));

        let mut out = Vec::new();
        generate_bishop_moves(&state, from, &mut out);
        assert!(out.contains(&Move::new(from, Square::new(3, 3))));
        assert!(!out.contains(&Move::new(from, Square::new(4, 4))));
        assert_eq!(out.len(), 3);
    }
}
