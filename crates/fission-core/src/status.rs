//! End-of-game detection.

use std::fmt;

use crate::color::Color;
use crate::material::is_insufficient_material;
use crate::situation::Situation;
use crate::variant::Variant;

/// Why a game is over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The variant's own decisive end. `winner` is the side that still has a king, if exactly one does.
    VariantEnd { winner: Option<Color> },
    /// The side to move is in check and has no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
    /// The variant's own drawing condition holds.
    VariantDraw,
    /// Neither side can mate; skipped for variants that disable it.
    InsufficientMaterial,
    /// A hundred plies without a capture or pawn move.
    FiftyMoves,
}

impl Status {
    /// Return the winning side, or `None` for draws and kingless endings.
    pub fn winner(self) -> Option<Color> {
        match self {
            Status::VariantEnd { winner } => winner,
            Status::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    /// Return `true` if nobody won.
    pub fn is_draw(self) -> bool {
        self.winner().is_none()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::VariantEnd { winner: Some(color) } => {
                write!(f, "variant end, {} wins", color.name())
            }
            Status::VariantEnd { winner: None } => f.write_str("variant end, no winner"),
            Status::Checkmate { winner } => write!(f, "checkmate, {} wins", winner.name()),
            Status::Stalemate => f.write_str("stalemate"),
            Status::VariantDraw => f.write_str("variant draw"),
            Status::InsufficientMaterial => f.write_str("insufficient material"),
            Status::FiftyMoves => f.write_str("fifty-move rule"),
        }
    }
}

/// Status of `situation` under `variant`, or `None` while the game goes on.
pub fn status(variant: &dyn Variant, situation: &Situation) -> Option<Status> {
    let board = situation.board();

    if variant.is_special_end(situation) {
        let survivors: Vec<Color> = Color::ALL
            .into_iter()
            .filter(|color| board.king_of(*color).is_some())
            .collect();
        let winner = match survivors.as_slice() {
            [only] => Some(*only),
            _ => None,
        };
        return Some(Status::VariantEnd { winner });
    }

    if variant.legal_moves(situation).is_empty() {
        return Some(if situation.is_check() {
            Status::Checkmate {
                winner: !situation.turn(),
            }
        } else {
            Status::Stalemate
        });
    }

    if variant.is_special_draw(situation) {
        return Some(Status::VariantDraw);
    }

    if !variant.disables_standard_insufficient_material_draw() && is_insufficient_material(board) {
        return Some(Status::InsufficientMaterial);
    }

    if situation.halfmove_clock() >= 100 {
        return Some(Status::FiftyMoves);
    }

    None
}
