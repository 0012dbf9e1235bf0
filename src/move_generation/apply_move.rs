//! In-place move application.
//!
//! Mutates a `GameState` to reflect one move, updating the en-passant file,
//! castling bookkeeping, promotion, and side to move. The update order
//! matters: en-passant bookkeeping runs before the piece is relocated so the
//! diagonal-into-empty test still sees the pre-move grid.
//!
//! Precondition: callers must only apply moves drawn from the pseudo-legal
//! generator or from validated coordinate strings. Out-of-range squares are
//! rejected at the parsing boundary, not here.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub fn apply_move(state: &mut GameState, mv: Move) {
    let from = mv.from;
    let to = mv.to;
    let piece = state.piece_at(from);

    let white_pawn = piece_code(Color::White, PieceKind::Pawn);
    let black_pawn = piece_code(Color::Black, PieceKind::Pawn);
    let white_king = piece_code(Color::White, PieceKind::King);
    let black_king = piece_code(Color::Black, PieceKind::King);
    let is_pawn = piece == white_pawn || piece == black_pawn;

    // Step 1: the en-passant window closes, then reopens behind a fresh
    // double push.
    state.en_passant_col = None;
    if is_pawn && from.row.abs_diff(to.row) == 2 {
        state.en_passant_col = Some(from.col);
    }

    // Step 2: a pawn sliding diagonally into an empty square is an
    // en-passant capture; the victim sits on the origin rank.
    if is_pawn && from.col != to.col && state.piece_at(to) == EMPTY {
        state.set_piece(Square::new(from.row, to.col), EMPTY);
    }

    // Step 3: a king leaving its home square two files sideways drags the
    // rook across. The king-move branch also forfeits both rights.
    if piece == white_king && from.row == 0 && from.col == 4 {
        let rook = piece_code(Color::White, PieceKind::Rook);
        if to.col == 6 {
            state.set_piece(Square::new(0, 5), rook);
            state.set_piece(Square::new(0, 7), EMPTY);
        } else if to.col == 2 {
            state.set_piece(Square::new(0, 3), rook);
            state.set_piece(Square::new(0, 0), EMPTY);
        }
        state.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    } else if piece == black_king && from.row == 7 && from.col == 4 {
        let rook = piece_code(Color::Black, PieceKind::Rook);
        if to.col == 6 {
            state.set_piece(Square::new(7, 5), rook);
            state.set_piece(Square::new(7, 7), EMPTY);
        } else if to.col == 2 {
            state.set_piece(Square::new(7, 3), rook);
            state.set_piece(Square::new(7, 0), EMPTY);
        }
        state.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    }

    // Step 4: a rook departing its home square forfeits that wing's right.
    // Rights are deliberately untouched when a rook is captured in place.
    if piece == piece_code(Color::White, PieceKind::Rook) && from.row == 0 {
        if from.col == 0 {
            state.castling_rights &= !CASTLE_WHITE_QUEENSIDE;
        }
        if from.col == 7 {
            state.castling_rights &= !CASTLE_WHITE_KINGSIDE;
        }
    } else if piece == piece_code(Color::Black, PieceKind::Rook) && from.row == 7 {
        if from.col == 0 {
            state.castling_rights &= !CASTLE_BLACK_QUEENSIDE;
        }
        if from.col == 7 {
            state.castling_rights &= !CASTLE_BLACK_KINGSIDE;
        }
    }

    // Step 5: any king move forfeits both rights, castling or not.
    if piece == white_king {
        state.castling_rights &= !(CASTLE_WHITE_KINGSIDE | CASTLE_WHITE_QUEENSIDE);
    }
    if piece == black_king {
        state.castling_rights &= !(CASTLE_BLACK_KINGSIDE | CASTLE_BLACK_QUEENSIDE);
    }

    // Step 6: relocate the piece.
    state.set_piece(to, piece);
    state.set_piece(from, EMPTY);

    // Step 7: auto-queen promotion on the farthest rank.
    if piece == white_pawn && to.row == 7 {
        state.set_piece(to, piece_code(Color::White, PieceKind::Queen));
    } else if piece == black_pawn && to.row == 0 {
        state.set_piece(to, piece_code(Color::Black, PieceKind::Queen));
    }

    // Step 8: the move is committed; hand the turn over.
    state.side_to_move = state.side_to_move.opposite();
}
