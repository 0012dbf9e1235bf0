//! Pseudo-legal move generation pipeline.
//!
//! Scans the grid row-major, dispatching to the per-piece generators for
//! every piece of the side to move. Moves are pseudo-legal only: nothing
//! here verifies that the mover's own king stays safe, and castling is
//! offered without any attacked-square checks. Generation order is part of
//! the engine's observable behavior because the search resolves score ties
//! in favor of the earliest candidate.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::pseudo_move_shared::is_own_piece;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;

pub trait MoveGenerator: Send + Sync {
    fn generate_moves(&self, state: &GameState) -> Vec<Move>;
}

/// The engine's single generator implementation.
pub struct PseudoLegalGenerator;

impl MoveGenerator for PseudoLegalGenerator {
    fn generate_moves(&self, state: &GameState) -> Vec<Move> {
        generate_moves(state)
    }
}

/// Enumerate all pseudo-legal moves for the side to move.
pub fn generate_moves(state: &GameState) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);

    for row in 0..8u8 {
        for col in 0..8u8 {
            let from = Square::new(row, col);
            let code = state.piece_at(from);
            if code == EMPTY || !is_own_piece(state, code) {
                continue;
            }

            match piece_kind_from_code(code) {
                Some(PieceKind::Pawn) => generate_pawn_moves(state, from, &mut out),
                Some(PieceKind::Knight) => generate_knight_moves(state, from, &mut out),
                Some(PieceKind::Bishop) => generate_bishop_moves(state, from, &mut out),
                Some(PieceKind::Rook) => generate_rook_moves(state, from, &mut out),
                Some(PieceKind::Queen) => generate_queen_moves(state, from, &mut out),
                Some(PieceKind::King) => generate_king_moves(state, from, &mut out),
                None => {}
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::apply_move::apply_move;

    #[test]
    fn starting_position_has_twenty_pseudo_legal_moves() {
        let state = GameState::new_game();
        let moves = generate_moves(&state);
        assert_eq!(moves.len(), 20);

        let pawn_moves = moves.iter().filter(|m| m.from.row == 1).count();
        let knight_moves = moves.iter().filter(|m| m.from.row == 0).count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(knight_moves, 4);
    }

    #[test]
    fn generation_scans_the_board_row_major() {
        let state = GameState::new_game();
        let moves = generate_moves(&state);

        // Knights sit on row 0 and are visited before any pawn on row 1.
        assert_eq!(moves[0].from, Square::new(0, 1));
        assert_eq!(moves[4].from, Square::new(1, 0));
    }

    #[test]
    fn generator_trait_matches_free_function() {
        let state = GameState::new_game();
        let from_trait = PseudoLegalGenerator.generate_moves(&state);
        assert_eq!(from_trait, generate_moves(&state));
    }

    #[test]
    fn en_passant_window_lasts_exactly_one_ply() {
        let mut state = GameState::new_game();
        // 1. e4 ... then bring a black pawn next to it: 1... d5 2. e5 f5.
        apply_move(&mut state, Move::new(Square::new(1, 4), Square::new(3, 4)));
        apply_move(&mut state, Move::new(Square::new(6, 3), Square::new(4, 3)));
        apply_move(&mut state, Move::new(Square::new(3, 4), Square::new(4, 4)));
        apply_move(&mut state, Move::new(Square::new(6, 5), Square::new(4, 5)));

        let ep_capture = Move::new(Square::new(4, 4), Square::new(5, 5));
        let moves = generate_moves(&state);
        let ep_moves: Vec<_> = moves
            .iter()
            .filter(|m| **m == ep_capture)
            .collect();
        assert_eq!(ep_moves.len(), 1, "exactly one en-passant capture expected");

        // Decline it; one ply later the opportunity is gone.
        apply_move(&mut state, Move::new(Square::new(0, 6), Square::new(2, 5)));
        apply_move(&mut state, Move::new(Square::new(7, 6), Square::new(5, 7)));
        let later = generate_moves(&state);
        assert!(!later.contains(&ep_capture));
    }

    #[test]
    fn castling_disappears_after_king_moves() {
        let mut state = GameState::new_empty();
        state.set_piece(Square::new(0, 4), piece_code(Color::White, PieceKind::King));
        state.set_piece(Square::new(0, 7), piece_code(Color::White, PieceKind::Rook));
        state.set_piece(Square::new(7, 4), piece_code(Color::Black, PieceKind::King));

        let castle = Move::new(Square::new(0, 4), Square::new(0, 6));
        assert!(generate_moves(&state).contains(&castle));

        // King steps away and back; the right is gone for the session.
        apply_move(&mut state, Move::new(Square::new(0, 4), Square::new(1, 4)));
        apply_move(&mut state, Move::new(Square::new(7, 4), Square::new(7, 3)));
        apply_move(&mut state, Move::new(Square::new(1, 4), Square::new(0, 4)));
        apply_move(&mut state, Move::new(Square::new(7, 3), Square::new(7, 4)));

        assert!(!generate_moves(&state).contains(&castle));
    }
}
