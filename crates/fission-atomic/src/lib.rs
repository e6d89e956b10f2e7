//! Atomic chess on top of the `fission-core` rules engine.
//!
//! Every capture sets off an explosion that removes the capturing piece, the
//! captured piece and every non-pawn piece next to the capture square. A game
//! is won by blowing up the enemy king; kings therefore never capture.

mod explosion;
mod legality;
mod material;

use std::sync::Arc;

use fission_core::{Move, MoveMap, Situation, Standard, Variant};

pub use explosion::explode_surrounding_pieces;
pub use legality::{legal_moves, merge_moves};
pub use material::{insufficient_atomic_winning_material, is_special_draw, is_special_end};

/// The atomic rule overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atomic;

impl Variant for Atomic {
    fn name(&self) -> &'static str {
        "atomic"
    }

    fn legal_moves(&self, situation: &Situation) -> MoveMap {
        legal_moves(situation)
    }

    fn finish_move(&self, _situation: &Situation, mv: Move) -> Move {
        explode_surrounding_pieces(mv)
    }

    fn is_special_draw(&self, situation: &Situation) -> bool {
        is_special_draw(situation)
    }

    fn is_special_end(&self, situation: &Situation) -> bool {
        is_special_end(situation)
    }

    /// A single extra piece is often enough to force an explosion, so the
    /// orthodox rule is replaced by [`insufficient_atomic_winning_material`].
    fn disables_standard_insufficient_material_draw(&self) -> bool {
        true
    }
}

/// Look up a variant by name, ignoring case. `"chess"` is an alias of `"standard"`.
pub fn variant_by_name(name: &str) -> Option<Arc<dyn Variant>> {
    match name.to_ascii_lowercase().as_str() {
        "standard" | "chess" => Some(Arc::new(Standard)),
        "atomic" => Some(Arc::new(Atomic)),
        _ => None,
    }
}
