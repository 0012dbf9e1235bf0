//! Lenient placement-string parser for `position fen`.
//!
//! Accepts the piece-placement and side-to-move fields of a FEN-like string
//! and ignores everything after them (castling rights, en-passant square,
//! and clocks are accepted but discarded). Parsing is deliberately
//! forgiving: unrecognized characters are skipped without error, and the
//! scan overlays the placement onto the standard starting arrangement, so a
//! digit advances past files without clearing them. These quirks are part
//! of the engine's observable setup behavior and are preserved as such.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

/// Build a `GameState` from a placement string. Never fails; anything the
/// parser does not understand is silently skipped.
pub fn parse_position(fen: &str) -> GameState {
    let mut state = GameState::new_game();

    let mut fields = fen.split_whitespace();

    if let Some(board_field) = fields.next() {
        overlay_board(board_field, &mut state);
    }

    if let Some(side_field) = fields.next() {
        // Exact match on "w"; every other token selects Black.
        state.side_to_move = if side_field == "w" {
            Color::White
        } else {
            Color::Black
        };
    }

    state
}

fn overlay_board(board_field: &str, state: &mut GameState) {
    // Wide accumulators: a hostile placement field can carry arbitrarily
    // long digit, slash, or letter runs, and the scan must stay a no-op for
    // the out-of-range stretch instead of trapping on overflow.
    let mut row = 7i32;
    let mut col = 0i32;

    for ch in board_field.chars() {
        if ch == '/' {
            row = row.saturating_sub(1);
            col = 0;
        } else if ('1'..='8').contains(&ch) {
            col = col.saturating_add(ch as i32 - '0' as i32);
        } else {
            let code = piece_from_placement_char(ch);
            if code != EMPTY && (0..8).contains(&row) && (0..8).contains(&col) {
                state.board[row as usize][col as usize] = code;
            }
            col = col.saturating_add(1);
        }
    }
}

fn piece_from_placement_char(ch: char) -> PieceCode {
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return EMPTY,
    };

    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    piece_code(color, kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parses_placement_and_side_to_move() {
        let state = parse_position("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1");

        println!("\n{}", render_game_state(&state));

        assert_eq!(
            state.piece_at(Square::new(3, 4)),
            piece_code(Color::White, PieceKind::Pawn)
        );
        assert_eq!(state.side_to_move, Color::Black);
    }

    #[test]
    fn castling_and_en_passant_fields_are_ignored() {
        let state = parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - e3 42 99");
        assert_eq!(state.castling_rights, CASTLE_ALL);
        assert_eq!(state.en_passant_col, None);
    }

    #[test]
    fn non_w_side_token_selects_black() {
        let state = parse_position("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x");
        assert_eq!(state.side_to_move, Color::Black);
    }

    #[test]
    fn unrecognized_characters_are_skipped_silently() {
        // An unknown letter consumes a file without writing a piece.
        let with_junk = parse_position("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert_eq!(
            with_junk.piece_at(Square::new(7, 0)),
            piece_code(Color::Black, PieceKind::Rook),
            "skipped file keeps its starting piece"
        );
    }

    #[test]
    fn digits_overlay_onto_the_starting_arrangement() {
        // Squares the placement marks empty keep their initial pieces: the
        // parser overlays rather than clears.
        let state = parse_position("8/8/8/8/8/8/8/8 w");
        assert_eq!(state.board, GameState::new_game().board);
    }

    #[test]
    fn oversized_placement_fields_do_not_panic() {
        // Long runs of digits, slashes, or letters walk the accumulators far
        // off the grid; the scan must shrug them off.
        let digits = parse_position(&format!("{} w", "8".repeat(40)));
        assert_eq!(digits.board, GameState::new_game().board);

        let slashes = parse_position(&format!("{} w", "/".repeat(40)));
        assert_eq!(slashes.board, GameState::new_game().board);

        let letters = parse_position(&format!("{} b", "q".repeat(40)));
        assert_eq!(letters.side_to_move, Color::Black);
        assert_eq!(
            letters.piece_at(Square::new(7, 7)),
            piece_code(Color::Black, PieceKind::Queen)
        );
    }

    #[test]
    fn empty_input_reproduces_a_fresh_game() {
        let state = parse_position("");
        assert_eq!(state, GameState::new_game());
    }
}
