//! Helpers shared by the per-piece pseudo-legal generators.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Whether `code` belongs to the opponent of the side to move.
#[inline]
pub fn is_enemy_piece(state: &GameState, code: PieceCode) -> bool {
    match state.side_to_move {
        Color::White => is_black_piece(code),
        Color::Black => is_white_piece(code),
    }
}

/// Whether `code` belongs to the side to move.
#[inline]
pub fn is_own_piece(state: &GameState, code: PieceCode) -> bool {
    match state.side_to_move {
        Color::White => is_white_piece(code),
        Color::Black => is_black_piece(code),
    }
}

#[inline]
pub fn on_board(row: i8, col: i8) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// Walk sliding rays from `from`. Each ray emits every empty square until it
/// hits the board edge, an enemy piece (inclusive), or an own piece
/// (exclusive).
pub fn push_ray_moves(
    state: &GameState,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(row_step, col_step) in directions {
        for distance in 1..8i8 {
            let row = from.row as i8 + row_step * distance;
            let col = from.col as i8 + col_step * distance;
            if !on_board(row, col) {
                break;
            }

            let to = Square::new(row as u8, col as u8);
            let target = state.piece_at(to);
            if target == EMPTY {
                out.push(Move::new(from, to));
            } else if is_enemy_piece(state, target) {
                out.push(Move::new(from, to));
                break;
            } else {
                break;
            }
        }
    }
}
