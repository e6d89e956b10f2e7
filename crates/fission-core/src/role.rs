//! Piece roles, independent of color.

use std::fmt;

/// What a piece does on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Role {
    Pawn = 0,
    Knight = 1,
    Bishop = 2,
    Rook = 3,
    Queen = 4,
    King = 5,
}

impl Role {
    pub const COUNT: usize = 6;

    /// All roles in index order.
    pub const ALL: [Role; 6] = [
        Role::Pawn,
        Role::Knight,
        Role::Bishop,
        Role::Rook,
        Role::Queen,
        Role::King,
    ];

    /// Roles a pawn may promote to, strongest first.
    pub const PROMOTIONS: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase FEN letter.
    pub const fn char(self) -> char {
        match self {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        }
    }

    /// Parse a FEN letter in either case.
    pub fn from_char(c: char) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| role.char() == c.to_ascii_lowercase())
    }

    /// Knights and bishops.
    #[inline]
    pub const fn is_minor(self) -> bool {
        matches!(self, Role::Knight | Role::Bishop)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

#[cfg(test)]
mod tests {
    use super::Role;

    #[test]
    fn char_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_char(role.char()), Some(role));
            assert_eq!(Role::from_char(role.char().to_ascii_uppercase()), Some(role));
        }
        assert_eq!(Role::from_char('x'), None);
    }

    #[test]
    fn promotions_exclude_pawn_and_king() {
        assert!(!Role::PROMOTIONS.contains(&Role::Pawn));
        assert!(!Role::PROMOTIONS.contains(&Role::King));
    }

    #[test]
    fn minor_pieces() {
        assert!(Role::Knight.is_minor());
        assert!(Role::Bishop.is_minor());
        assert!(!Role::Rook.is_minor());
        assert!(!Role::Pawn.is_minor());
    }
}
