//! Material-based draw rules of orthodox chess.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::color::Color;
use crate::role::Role;

/// Light and dark bishops of `color`.
fn bishop_shades(board: &Board, color: Color) -> (bool, bool) {
    let bishops = board.by_role(Role::Bishop) & board.by_color(color);
    (
        (bishops & Bitboard::LIGHT_SQUARES).is_nonempty(),
        (bishops & Bitboard::DARK_SQUARES).is_nonempty(),
    )
}

/// Non-king material consists of bishops only.
fn only_bishops_besides_kings(board: &Board) -> bool {
    board.occupied() == board.kings() | board.by_role(Role::Bishop)
}

/// Neither side can ever deliver mate.
///
/// Covers bare kings, a single minor piece, and any number of bishops that
/// all stand on one square color.
pub fn is_insufficient_material(board: &Board) -> bool {
    let heavy_or_pawn =
        board.by_role(Role::Pawn) | board.by_role(Role::Rook) | board.by_role(Role::Queen);
    if heavy_or_pawn.is_nonempty() {
        return false;
    }
    let minors = board.by_role(Role::Knight) | board.by_role(Role::Bishop);
    if minors.count() <= 1 {
        return true;
    }
    let bishops = board.by_role(Role::Bishop);
    only_bishops_besides_kings(board)
        && (bishops.is_subset(Bitboard::LIGHT_SQUARES) || bishops.is_subset(Bitboard::DARK_SQUARES))
}

/// Only bishops remain besides the kings, each side has some, each side's
/// bishops share a square color, and the two sides' colors differ.
pub fn bishops_on_opposite_colors(board: &Board) -> bool {
    if !only_bishops_besides_kings(board) {
        return false;
    }
    match (
        bishop_shades(board, Color::White),
        bishop_shades(board, Color::Black),
    ) {
        ((true, false), (false, true)) | ((false, true), (true, false)) => true,
        _ => false,
    }
}
