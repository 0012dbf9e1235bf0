//! Material-only board scoring.
//!
//! Sums fixed per-piece values, added for White and subtracted for Black, so
//! the raw score is always from White's perspective. The negamax sign
//! convention is the caller's job.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective, in centipawns.
    fn score(&self, state: &GameState) -> i32;
}

#[inline]
pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, state: &GameState) -> i32 {
        let mut score = 0i32;

        for row in 0..8 {
            for col in 0..8 {
                let code = state.board[row][col];
                let Some(kind) = piece_kind_from_code(code) else {
                    continue;
                };
                if is_white_piece(code) {
                    score += piece_value(kind);
                } else {
                    score -= piece_value(kind);
                }
            }
        }

        score
    }
}
