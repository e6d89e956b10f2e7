//! A game in progress under one variant.

use std::sync::Arc;

use tracing::debug;

use crate::chess_move::{Move, UciMove};
use crate::error::MoveError;
use crate::movegen::MoveMap;
use crate::role::Role;
use crate::situation::Situation;
use crate::square::Square;
use crate::status::{Status, status};
use crate::variant::Variant;

/// A position, the variant governing it, and the moves that led there.
///
/// Once [`Game::status`] reports an outcome, no further moves are accepted.
#[derive(Debug, Clone)]
pub struct Game {
    variant: Arc<dyn Variant>,
    situation: Situation,
    moves: Vec<Move>,
}

impl Game {
    /// A game from the standard starting position.
    pub fn new(variant: Arc<dyn Variant>) -> Game {
        Game::from_situation(variant, Situation::starting_position())
    }

    /// A game starting from an arbitrary position.
    pub fn from_situation(variant: Arc<dyn Variant>, situation: Situation) -> Game {
        Game {
            variant,
            situation,
            moves: Vec::new(),
        }
    }

    #[inline]
    pub fn variant(&self) -> &dyn Variant {
        self.variant.as_ref()
    }

    #[inline]
    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Return the outcome, or `None` while the game is still running.
    pub fn status(&self) -> Option<Status> {
        status(self.variant(), &self.situation)
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn legal_moves(&self) -> MoveMap {
        if self.status().is_some() {
            return MoveMap::new();
        }
        self.variant.legal_moves(&self.situation)
    }

    /// Play `from`-`to` and return the move as played.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Role>,
    ) -> Result<Move, MoveError> {
        if self.status().is_some() {
            return Err(MoveError::GameOver);
        }
        let mv = self
            .variant
            .apply_move(&self.situation, from, to, promotion)?;
        self.situation = self.situation.play(&mv);
        self.moves.push(mv);
        debug!(variant = self.variant.name(), mv = %mv, fen = %self.situation, "move played");

        if let Some(status) = self.status() {
            debug!(variant = self.variant.name(), %status, "game over");
        }
        Ok(mv)
    }

    /// Play a move given in UCI notation.
    pub fn play_uci(&mut self, uci: &str) -> Result<Move, MoveError> {
        let UciMove { from, to, promotion } = uci.parse::<UciMove>()?;
        self.play(from, to, promotion)
    }
}
