//! Perft (performance test) for move generation correctness verification.

use crate::situation::Situation;
use crate::variant::Variant;

/// Count the number of leaf nodes at the given depth under `variant`.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them. Positions where the variant has
/// already ended the game have no children.
pub fn perft(variant: &dyn Variant, situation: &Situation, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }
    if variant.is_special_end(situation) {
        return 0;
    }

    let moves = variant.legal_moves(situation);
    if depth == 1 {
        return moves.values().map(|list| list.len() as u64).sum();
    }

    moves
        .into_values()
        .flatten()
        .map(|mv| {
            let child = situation.play(&variant.finish_move(situation, mv));
            perft(variant, &child, depth - 1)
        })
        .sum()
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(uci_move, node_count)` pairs sorted alphabetically.
pub fn divide(variant: &dyn Variant, situation: &Situation, depth: usize) -> Vec<(String, u64)> {
    if variant.is_special_end(situation) {
        return Vec::new();
    }
    let mut results: Vec<(String, u64)> = variant
        .legal_moves(situation)
        .into_values()
        .flatten()
        .map(|mv| {
            let child = situation.play(&variant.finish_move(situation, mv));
            let count = if depth <= 1 { 1 } else { perft(variant, &child, depth - 1) };
            (mv.to_string(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
