//! Castling rights as a 4-bit set.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which wing a side castles toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home square of the rook that castles on this wing.
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::H1,
            (Color::White, CastleSide::QueenSide) => Square::A1,
            (Color::Black, CastleSide::KingSide) => Square::H8,
            (Color::Black, CastleSide::QueenSide) => Square::A8,
        }
    }

    /// Where the king lands.
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::G1,
            (Color::White, CastleSide::QueenSide) => Square::C1,
            (Color::Black, CastleSide::KingSide) => Square::G8,
            (Color::Black, CastleSide::QueenSide) => Square::C8,
        }
    }

    /// Where the rook lands.
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::KingSide) => Square::F1,
            (Color::White, CastleSide::QueenSide) => Square::D1,
            (Color::Black, CastleSide::KingSide) => Square::F8,
            (Color::Black, CastleSide::QueenSide) => Square::D8,
        }
    }
}

/// Home square of each side's king.
pub const fn king_home(color: Color) -> Square {
    match color {
        Color::White => Square::E1,
        Color::Black => Square::E8,
    }
}

/// bit 0 = K, 1 = Q, 2 = k, 3 = q.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    const fn bit(color: Color, side: CastleSide) -> u8 {
        let shift = match side {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        };
        1 << (color as u8 * 2 + shift)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.0 & Self::bit(color, side) != 0
    }

    #[inline]
    pub const fn with(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 | Self::bit(color, side))
    }

    #[inline]
    pub const fn without(self, color: Color, side: CastleSide) -> CastleRights {
        CastleRights(self.0 & !Self::bit(color, side))
    }

    #[inline]
    pub const fn without_color(self, color: Color) -> CastleRights {
        self.without(color, CastleSide::KingSide)
            .without(color, CastleSide::QueenSide)
    }

    /// Drop every right whose king or rook home square is in `touched`.
    pub fn revoke_touched(self, touched: &[Square]) -> CastleRights {
        let mut rights = self;
        for color in Color::ALL {
            if touched.contains(&king_home(color)) {
                rights = rights.without_color(color);
            }
            for side in CastleSide::ALL {
                if touched.contains(&side.rook_home(color)) {
                    rights = rights.without(color, side);
                }
            }
        }
        rights
    }

    /// Parse the FEN castling field (`KQkq`, `Kq`, `-`).
    pub fn from_fen(s: &str) -> Result<CastleRights, FenError> {
        if s == "-" {
            return Ok(CastleRights::NONE);
        }
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            Ok(rights.with(color, side))
        })
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (c, color, side) in [
            ('K', Color::White, CastleSide::KingSide),
            ('Q', Color::White, CastleSide::QueenSide),
            ('k', Color::Black, CastleSide::KingSide),
            ('q', Color::Black, CastleSide::QueenSide),
        ] {
            if self.has(color, side) {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn fen_roundtrip() {
        for fen in ["KQkq", "Kq", "k", "-", "KQ"] {
            let rights = CastleRights::from_fen(fen).unwrap();
            assert_eq!(rights.to_string(), fen);
        }
        assert_eq!(CastleRights::from_fen("KQkq").unwrap(), CastleRights::ALL);
    }

    #[test]
    fn invalid_char() {
        assert!(CastleRights::from_fen("KQxq").is_err());
    }

    #[test]
    fn revoke_on_king_and_rook_squares() {
        let rights = CastleRights::ALL.revoke_touched(&[Square::E1]);
        assert!(!rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));

        let rights = CastleRights::ALL.revoke_touched(&[Square::H8, Square::B2]);
        assert!(!rights.has(Color::Black, CastleSide::KingSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
        assert!(rights.has(Color::White, CastleSide::KingSide));
    }
}
