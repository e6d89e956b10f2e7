//! Chess rules engine: board representation, move generation, game rules,
//! and the [`Variant`] seam that rule overlays plug into.

pub mod attacks;
mod bitboard;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod game;
mod make_move;
pub mod material;
mod movegen;
mod perft;
mod piece;
mod role;
mod situation;
mod square;
mod status;
mod variant;

pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide, king_home};
pub use chess_move::{Move, MoveKind, UciMove};
pub use color::Color;
pub use error::{BoardError, FenError, MoveError};
pub use fen::STARTING_FEN;
pub use game::Game;
pub use movegen::{Actor, MoveMap, move_count, select_move};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use role::Role;
pub use situation::Situation;
pub use square::Square;
pub use status::{Status, status};
pub use variant::{Standard, Variant};
