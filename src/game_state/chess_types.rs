//! Core value types shared across the engine.
//!
//! The board is a plain 8x8 grid of piece codes: 0 is empty, 1-6 are the
//! White pawn, knight, bishop, rook, queen, and king, and 7-12 are the same
//! kinds for Black (offset by 6). Everything else in the crate speaks in
//! terms of these codes plus the small `Square`/`Move` value types below.

/// One cell of the board grid. Always in `0..=12`.
pub type PieceCode = u8;

/// The empty-square code.
pub const EMPTY: PieceCode = 0;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// White piece code for this kind; add 6 for the Black code.
    #[inline]
    pub const fn base_code(self) -> PieceCode {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Rook => 4,
            PieceKind::Queen => 5,
            PieceKind::King => 6,
        }
    }
}

#[inline]
pub const fn piece_code(color: Color, kind: PieceKind) -> PieceCode {
    match color {
        Color::White => kind.base_code(),
        Color::Black => kind.base_code() + 6,
    }
}

#[inline]
pub const fn is_white_piece(code: PieceCode) -> bool {
    code >= 1 && code <= 6
}

#[inline]
pub const fn is_black_piece(code: PieceCode) -> bool {
    code >= 7 && code <= 12
}

/// Kind of the piece behind a code, with color stripped off.
#[inline]
pub fn piece_kind_from_code(code: PieceCode) -> Option<PieceKind> {
    let normalized = if code > 6 { code - 6 } else { code };
    match normalized {
        1 => Some(PieceKind::Pawn),
        2 => Some(PieceKind::Knight),
        3 => Some(PieceKind::Bishop),
        4 => Some(PieceKind::Rook),
        5 => Some(PieceKind::Queen),
        6 => Some(PieceKind::King),
        _ => None,
    }
}

#[inline]
pub fn piece_color_from_code(code: PieceCode) -> Option<Color> {
    if is_white_piece(code) {
        Some(Color::White)
    } else if is_black_piece(code) {
        Some(Color::Black)
    } else {
        None
    }
}

/// Compact castling rights bitmask. A flag stays set until the relevant
/// king or rook has moved; a king move clears both flags for its color.
pub type CastlingRights = u8;

pub const CASTLE_WHITE_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_WHITE_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_BLACK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_BLACK_QUEENSIDE: CastlingRights = 1 << 3;

pub const CASTLE_ALL: CastlingRights = CASTLE_WHITE_KINGSIDE
    | CASTLE_WHITE_QUEENSIDE
    | CASTLE_BLACK_KINGSIDE
    | CASTLE_BLACK_QUEENSIDE;

/// Board coordinate. Row 0 is rank 1 (White's back rank), column 0 is the
/// a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// An ordered origin/destination pair. There is no promotion payload:
/// pawn promotion is always an automatic queen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}
