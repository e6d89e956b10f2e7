//! A piece: a role owned by a side.

use std::fmt;

use crate::color::Color;
use crate::role::Role;

/// A (role, color) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub role: Role,
    pub color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(role: Role, color: Color) -> Piece {
        Piece { role, color }
    }

    #[inline]
    pub fn is(self, role: Role) -> bool {
        self.role == role
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let role = Role::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(role, color))
    }

    /// Return the FEN letter, uppercase for White.
    pub fn fen_char(self) -> char {
        match self.color {
            Color::White => self.role.char().to_ascii_uppercase(),
            Color::Black => self.role.char(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}
