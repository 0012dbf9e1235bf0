//! Coordinate-notation conversions.
//!
//! Converts between human-readable coordinates (e.g. `e4`, `e2e4`) and the
//! internal `Square`/`Move` types shared by the UCI and setup components.

use crate::game_state::chess_types::{Move, Square};

/// Convert a two-character coordinate (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {text}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Square::new(rank - b'1', file - b'a'))
}

/// Convert a square to its two-character coordinate.
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, String> {
    if square.row > 7 || square.col > 7 {
        return Err(format!(
            "Square out of bounds: row {} col {}",
            square.row, square.col
        ));
    }

    let file_char = char::from(b'a' + square.col);
    let rank_char = char::from(b'1' + square.row);
    Ok(format!("{file_char}{rank_char}"))
}

/// Parse a coordinate move string such as "e2e4".
///
/// Exactly the first four characters are consulted: anything shorter is an
/// error (callers drop it silently), and a trailing promotion suffix like
/// the `q` of "e7e8q" is ignored because promotion is always automatic.
pub fn coordinate_to_move(text: &str) -> Result<Move, String> {
    if !text.is_ascii() {
        return Err(format!("Coordinate move is not ASCII: {text}"));
    }
    if text.len() < 4 {
        return Err(format!("Coordinate move too short: {text}"));
    }

    let from = algebraic_to_square(&text[0..2])?;
    let to = algebraic_to_square(&text[2..4])?;
    Ok(Move::new(from, to))
}

/// Format a move as its four-character coordinate string.
pub fn move_to_coordinate(mv: Move) -> Result<String, String> {
    let mut out = square_to_algebraic(mv.from)?;
    out.push_str(&square_to_algebraic(mv.to)?);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_square_conversions() {
        assert_eq!(
            algebraic_to_square("a1").expect("a1 should parse"),
            Square::new(0, 0)
        );
        assert_eq!(
            algebraic_to_square("h8").expect("h8 should parse"),
            Square::new(7, 7)
        );
        assert_eq!(
            square_to_algebraic(Square::new(3, 4)).expect("e4 should format"),
            "e4"
        );
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(algebraic_to_square("i1").is_err());
        assert!(algebraic_to_square("a9").is_err());
        assert!(algebraic_to_square("e").is_err());
        assert!(square_to_algebraic(Square::new(8, 0)).is_err());
    }

    #[test]
    fn round_trip_coordinate_moves() {
        let mv = coordinate_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, Move::new(Square::new(1, 4), Square::new(3, 4)));
        assert_eq!(
            move_to_coordinate(mv).expect("move should format"),
            "e2e4"
        );
    }

    #[test]
    fn short_move_strings_are_rejected() {
        assert!(coordinate_to_move("e2e").is_err());
        assert!(coordinate_to_move("").is_err());
    }

    #[test]
    fn promotion_suffix_is_ignored() {
        let mv = coordinate_to_move("e7e8q").expect("e7e8q should parse");
        assert_eq!(mv, Move::new(Square::new(6, 4), Square::new(7, 4)));
    }
}
