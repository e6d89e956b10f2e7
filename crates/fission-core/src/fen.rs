//! FEN parsing and serialization for [`Situation`].

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::situation::Situation;
use crate::square::Square;

/// FEN of the standard starting position.
///
/// Parses to the same value as [`Situation::starting_position`].
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse the piece placement field.
fn parse_placement(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - rank_index as i8;
        let mut file: usize = 0;
        for c in rank_str.chars() {
            if let Some(skip) = c.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += skip as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            let sq = Square::from_coords(file as i8, rank).ok_or(FenError::BadRankLength {
                rank_index,
                length: file + 1,
            })?;
            board = board.put(sq, piece);
            file += 1;
        }
        if file != 8 {
            return Err(FenError::BadRankLength { rank_index, length: file });
        }
    }

    board.validate()?;
    Ok(board)
}

/// Parse a clock field, falling back to `default` when the field is absent.
fn parse_counter(field: &'static str, token: Option<&str>, default: u16) -> Result<u16, FenError> {
    token.map_or(Ok(default), |t| {
        t.parse::<u16>().map_err(|_| FenError::InvalidMoveCounter {
            field,
            found: t.to_string(),
        })
    })
}

impl FromStr for Situation {
    type Err = FenError;

    /// Parse a FEN string.
    ///
    /// Accepts full FENs and truncated ones; missing trailing fields default to `w - - 0 1`.
    /// The placement must pass [`Board::validate`], which allows boards with
    /// zero or one king per side.
    ///
    /// # Errors
    ///
    /// Returns a [`FenError`] naming the first field that could not be parsed.
    fn from_str(fen: &str) -> Result<Situation, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if fields.is_empty() || fields.len() > 6 {
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let board = parse_placement(fields[0])?;

        let turn = match fields.get(1) {
            None => Color::White,
            Some(token) => Color::from_fen(token).ok_or_else(|| FenError::InvalidColor {
                found: token.to_string(),
            })?,
        };

        let castling = fields
            .get(2)
            .map_or(Ok(CastleRights::NONE), |token| CastleRights::from_fen(token))?;

        let en_passant = match fields.get(3) {
            None | Some(&"-") => None,
            Some(token) => Some(Square::from_algebraic(token).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: token.to_string(),
                }
            })?),
        };

        let halfmove_clock = parse_counter("halfmove clock", fields.get(4).copied(), 0)?;
        let fullmove_number = parse_counter("fullmove number", fields.get(5).copied(), 1)?;

        Ok(Situation::new(board, turn)
            .with_castling(castling)
            .with_en_passant(en_passant)
            .with_counters(halfmove_clock, fullmove_number))
    }
}

/// Writes all six FEN fields.
impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8i8).rev() {
            let mut empty = 0;
            for file in 0..8i8 {
                match Square::from_coords(file, rank).and_then(|sq| self.board().piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if rank > 0 {
                f.write_str("/")?;
            }
        }

        write!(f, " {} {} ", self.turn(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, "{sq}")?,
            None => f.write_str("-")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
