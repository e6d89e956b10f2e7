//! Atomic end-of-game predicates.

use fission_core::material::bishops_on_opposite_colors;
use fission_core::{Board, Color, Role, Situation};

/// Whether a side reduced to a bare king can hold off the other side forever.
///
/// Holds when both sides have only kings, or when the stronger side has a
/// single piece besides its king and that piece is not a queen.
pub fn insufficient_atomic_winning_material(board: &Board) -> bool {
    let kings = board.kings();
    let bare = Color::ALL.into_iter().find(|color| {
        let ours = board.by_color(*color);
        ours.count() == 1 && ours.is_subset(kings)
    });
    let Some(bare) = bare else {
        return false;
    };
    if board.occupied().count() == 2 {
        return true;
    }
    let helpers = board.by_color(!bare) & !kings;
    helpers
        .single()
        .and_then(|sq| board.role_at(sq))
        .is_some_and(|role| role != Role::Queen)
}

/// Draws specific to atomic chess.
pub fn is_special_draw(situation: &Situation) -> bool {
    let board = situation.board();
    bishops_on_opposite_colors(board) || insufficient_atomic_winning_material(board)
}

/// A king has been blown up.
pub fn is_special_end(situation: &Situation) -> bool {
    situation.board().kings().count() != 2
}
