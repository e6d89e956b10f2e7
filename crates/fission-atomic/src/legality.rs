//! Which moves are legal under atomic rules.
//!
//! Orthodox legality is the starting point. Two adjustments follow: captures
//! next to the mover's own king are dropped, since the blast would take the
//! king with it, and a side in check may also answer by blowing up a piece
//! next to the enemy king.

use fission_core::{Bitboard, Move, MoveMap, Role, Situation, Square};
use tracing::trace;

/// Squares around `king`, or nothing when there is no king.
fn perimeter(king: Option<Square>) -> Bitboard {
    king.map_or(Bitboard::EMPTY, Square::surrounding)
}

/// Drop captures landing next to the mover's own king.
fn without_self_destruction(moves: MoveMap, own_perimeter: Bitboard) -> MoveMap {
    moves
        .into_iter()
        .filter_map(|(from, list)| {
            let kept: Vec<Move> = list
                .into_iter()
                .filter(|mv| !(mv.captures && own_perimeter.contains(mv.to)))
                .collect();
            (!kept.is_empty()).then_some((from, kept))
        })
        .collect()
}

/// Captures that explode something next to the enemy king without touching our own.
fn king_threats(situation: &Situation, own_perimeter: Bitboard) -> MoveMap {
    let enemy_perimeter = perimeter(situation.board().king_of(!situation.turn()));
    situation
        .actors()
        .into_iter()
        .filter(|actor| !actor.is(Role::King))
        .filter_map(|actor| {
            let threats: Vec<Move> = actor
                .moves
                .into_iter()
                .filter(|mv| {
                    mv.captures && enemy_perimeter.contains(mv.to) && !own_perimeter.contains(mv.to)
                })
                .collect();
            (!threats.is_empty()).then_some((actor.square, threats))
        })
        .collect()
}

/// Union of two move maps keyed by origin. Within an origin, a move is
/// a duplicate when destination and promotion role both match.
pub fn merge_moves(mut base: MoveMap, extra: MoveMap) -> MoveMap {
    for (from, moves) in extra {
        if moves.is_empty() {
            continue;
        }
        let list = base.entry(from).or_default();
        for mv in moves {
            let seen = list
                .iter()
                .any(|known| known.to == mv.to && known.promotion == mv.promotion);
            if !seen {
                list.push(mv);
            }
        }
    }
    base
}

/// Legal moves under atomic rules, grouped by origin square.
///
/// Moves carry the orthodox `after` board; the blast is applied when the
/// move is played.
pub fn legal_moves(situation: &Situation) -> MoveMap {
    let board = situation.board();
    let base = situation.standard_legal_moves();

    let Some(own_king) = board.king_of(situation.turn()) else {
        return base;
    };
    let own_perimeter = own_king.surrounding();
    let filtered = without_self_destruction(base, own_perimeter);

    if !situation.is_check() {
        return filtered;
    }

    let threats = king_threats(situation, own_perimeter);
    trace!(
        filtered = filtered.len(),
        threatening = threats.len(),
        "merging king threats into evasions"
    );
    merge_moves(filtered, threats)
}
