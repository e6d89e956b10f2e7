//! Pluggable rule sets.
//!
//! A [`Variant`] decides which moves are legal, what playing one does to the
//! board, and which extra conditions end the game. The engine holds the active
//! variant as a trait object chosen when the game is set up; every method has
//! the orthodox behavior as its default, so a variant only overrides what it
//! changes.

use std::fmt;

use crate::chess_move::Move;
use crate::error::MoveError;
use crate::movegen::{MoveMap, select_move};
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;

/// A rule set the engine consults for legality, move effects and game end.
pub trait Variant: fmt::Debug + Send + Sync {
    /// Lowercase identifier, e.g. `"standard"`.
    fn name(&self) -> &'static str;

    /// Legal moves grouped by origin square.
    fn legal_moves(&self, situation: &Situation) -> MoveMap {
        situation.standard_legal_moves()
    }

    /// Turn a legal move into the move as played, e.g. by changing its `after` board.
    fn finish_move(&self, _situation: &Situation, mv: Move) -> Move {
        mv
    }

    /// Resolve `from`-`to` to a legal move, with `after` holding the final placement.
    fn apply_move(
        &self,
        situation: &Situation,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, MoveError> {
        let mv = select_move(&self.legal_moves(situation), from, to, promotion)?;
        Ok(self.finish_move(situation, mv))
    }

    /// A draw condition the orthodox rules do not know.
    fn is_special_draw(&self, _situation: &Situation) -> bool {
        false
    }

    /// A decisive end other than checkmate.
    fn is_special_end(&self, _situation: &Situation) -> bool {
        false
    }

    /// Whether the orthodox insufficient-material draw is switched off.
    fn disables_standard_insufficient_material_draw(&self) -> bool {
        false
    }
}

/// Orthodox chess.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Standard;

impl Variant for Standard {
    fn name(&self) -> &'static str {
        "standard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_uses_orthodox_defaults() {
        let s = Situation::starting_position();
        assert_eq!(Standard.name(), "standard");
        assert_eq!(Standard.legal_moves(&s), s.standard_legal_moves());
        assert!(!Standard.is_special_draw(&s));
        assert!(!Standard.is_special_end(&s));
        assert!(!Standard.disables_standard_insufficient_material_draw());
    }

    #[test]
    fn apply_move_resolves_through_legal_moves() {
        let s = Situation::starting_position();
        let mv = Standard.apply_move(&s, Square::G1, Square::F3, None).unwrap();
        assert_eq!(mv.to_string(), "g1f3");
        assert!(Standard.apply_move(&s, Square::G1, Square::G3, None).is_err());
    }
}
