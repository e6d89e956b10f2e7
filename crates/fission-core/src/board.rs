//! Piece placement: an immutable mapping from squares to pieces.
//!
//! A [`Board`] is a small `Copy` value. Every operation that changes the
//! placement returns a new board, so earlier snapshots stay valid for move
//! history and hypothetical play.

use std::fmt;

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::role::Role;
use crate::square::Square;

/// Piece placement stored as one bitboard per role and one per color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    /// Indexed by [`Role::index()`].
    roles: [Bitboard; Role::COUNT],
    /// Indexed by [`Color::index()`].
    colors: [Bitboard; 2],
}

impl Board {
    /// A board with no pieces.
    pub fn empty() -> Board {
        Board::default()
    }

    /// Standard initial placement.
    pub fn standard() -> Board {
        const BACK_RANK: [Role; 8] = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_rank() as i8;
            let pawns = color.fold(1, 6);
            for (file, role) in BACK_RANK.into_iter().enumerate() {
                let file = file as i8;
                if let (Some(home), Some(pawn)) =
                    (Square::from_coords(file, back), Square::from_coords(file, pawns))
                {
                    board = board
                        .put(home, Piece::new(role, color))
                        .put(pawn, Piece::new(Role::Pawn, color));
                }
            }
        }
        board
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.colors[0] | self.colors[1]
    }

    #[inline]
    pub fn by_color(&self, color: Color) -> Bitboard {
        self.colors[color.index()]
    }

    #[inline]
    pub fn by_role(&self, role: Role) -> Bitboard {
        self.roles[role.index()]
    }

    #[inline]
    pub fn by_piece(&self, piece: Piece) -> Bitboard {
        self.by_role(piece.role) & self.by_color(piece.color)
    }

    pub fn role_at(&self, sq: Square) -> Option<Role> {
        Role::ALL
            .into_iter()
            .find(|role| self.roles[role.index()].contains(sq))
    }

    pub fn color_at(&self, sq: Square) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.colors[color.index()].contains(sq))
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        Some(Piece::new(self.role_at(sq)?, self.color_at(sq)?))
    }

    /// All kings of both sides.
    #[inline]
    pub fn kings(&self) -> Bitboard {
        self.by_role(Role::King)
    }

    /// Square of `color`'s king, `None` once it has been removed.
    #[inline]
    pub fn king_of(&self, color: Color) -> Option<Square> {
        (self.kings() & self.by_color(color)).first()
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Return a board with `piece` on `sq`, replacing any previous occupant.
    #[must_use]
    pub fn put(&self, sq: Square, piece: Piece) -> Board {
        let mut board = self.without(sq.bitboard());
        board.roles[piece.role.index()] = board.roles[piece.role.index()].with(sq);
        board.colors[piece.color.index()] = board.colors[piece.color.index()].with(sq);
        board
    }

    /// Return a board with every square of `mask` emptied.
    #[must_use]
    pub fn without(&self, mask: Bitboard) -> Board {
        let keep = !mask;
        let mut board = *self;
        for bb in board.roles.iter_mut().chain(board.colors.iter_mut()) {
            *bb &= keep;
        }
        board
    }

    /// Pieces of `attacker` that attack `sq`, with sliders seeing through `occupied`.
    pub fn attackers_to(&self, sq: Square, attacker: Color, occupied: Bitboard) -> Bitboard {
        let rook_like = self.by_role(Role::Rook) | self.by_role(Role::Queen);
        let bishop_like = self.by_role(Role::Bishop) | self.by_role(Role::Queen);
        self.by_color(attacker)
            & ((knight_attacks(sq) & self.by_role(Role::Knight))
                | (king_attacks(sq) & self.by_role(Role::King))
                | (pawn_attacks(attacker.flip(), sq) & self.by_role(Role::Pawn))
                | (rook_attacks(sq, occupied) & rook_like)
                | (bishop_attacks(sq, occupied) & bishop_like))
    }

    #[inline]
    pub fn is_attacked(&self, sq: Square, attacker: Color) -> bool {
        self.attackers_to(sq, attacker, self.occupied()).is_nonempty()
    }

    /// Structural checks. Kings may be missing, never doubled.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = (self.kings() & self.by_color(color)).count();
            if count > 1 {
                return Err(BoardError::TooManyKings { color, count });
            }
        }
        if (self.by_role(Role::Pawn) & Bitboard::BACK_RANKS).is_nonempty() {
            return Err(BoardError::PawnsOnBackRank);
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pieces: Vec<String> = self.pieces().map(|(sq, p)| format!("{p}{sq}")).collect();
        write!(f, "Board[{}]", pieces.join(" "))
    }
}

/// Renders a board as an 8x8 grid, eighth rank on top.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            write!(f, "{}  ", rank + 1)?;
            let cells: Vec<char> = (0..8i8)
                .map(|file| {
                    Square::from_coords(file, rank)
                        .and_then(|sq| self.0.piece_at(sq))
                        .map_or('.', Piece::fen_char)
                })
                .collect();
            let row: Vec<String> = cells.iter().map(char::to_string).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        write!(f, "   a b c d e f g h")
    }
}
