use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::color::Color;

/// Whether a piece is an unpromoted Man or a promoted King.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Man,
    King,
}

/// A piece on the board. The "four inhabitants" of the data model (White
/// Man, Black Man, White King, Black King) are the four `(Color, Kind)`
/// pairs, grounded on the teacher's oldest `board::Piece { color,
/// piece_type }` shape rather than its later bitboard-per-type layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Color,
    kind: Kind,
}

impl Piece {
    pub const fn new(color: Color, kind: Kind) -> Self {
        Self { color, kind }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn kind(&self) -> Kind {
        self.kind
    }

    pub const fn is_king(&self) -> bool {
        matches!(self.kind, Kind::King)
    }

    pub const fn opponent_color(&self) -> Color {
        self.color.opponent()
    }

    /// Upgrades a Man to a King in place. A King promoted again is a no-op.
    pub fn promote(&mut self) {
        self.kind = Kind::King;
    }

    /// Reverses a promotion; only used by `Board::undo` to replay a
    /// make/undo pair exactly.
    pub(crate) fn demote(&mut self) {
        self.kind = Kind::Man;
    }

    pub fn as_char(&self) -> char {
        match (self.color, self.kind) {
            (Color::White, Kind::Man) => '○',
            (Color::White, Kind::King) => '◎',
            (Color::Black, Kind::Man) => '●',
            (Color::Black, Kind::King) => '◉',
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_char())
    }
}
