//! Error types for FEN parsing, board validation and move application.

use crate::color::Color;
use crate::square::Square;

/// Errors that occur when parsing a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// Only the placement field is mandatory; more than 6 fields is an error.
    #[error("expected 1 to 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// `rank_index` counts from the top of the FEN (0 = eighth rank).
    #[error("rank {rank_index} describes {length} squares, expected 8")]
    BadRankLength { rank_index: usize, length: usize },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid active color: \"{found}\"")]
    InvalidColor { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    #[error("invalid board: {source}")]
    InvalidBoard {
        #[from]
        source: BoardError,
    },
}

/// Structural problems with a piece placement.
///
/// A missing king is not an error: atomic games end with one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected at most 1 king for {color:?}, found {count}")]
    TooManyKings { color: Color, count: u32 },

    #[error("pawns found on back rank")]
    PawnsOnBackRank,
}

/// Errors from choosing or playing a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("no legal move from {from} to {to}")]
    Illegal { from: Square, to: Square },

    #[error("move from {from} to {to} is not a promotion")]
    UnexpectedPromotion { from: Square, to: Square },

    #[error("malformed UCI move: \"{found}\"")]
    MalformedUci { found: String },

    #[error("the game is already over")]
    GameOver,
}
