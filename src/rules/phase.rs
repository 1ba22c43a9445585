//! Turn, phase and win sequencing.
//!
//! Placement ends once both players have placed their quota; the player with
//! fewer live creatures then moves first (ties broken at random). During play
//! the turn strictly alternates and each return to player 1 starts a new round.

use rand::Rng;

use super::placement::PLACEMENT_QUOTA;
use crate::board::{Outcome, PlayerId, ALL_PLAYERS};

/// Returns true once both players have placed their full quota.
pub fn placement_complete(placed: [usize; 2]) -> bool {
    placed.iter().all(|&n| n >= PLACEMENT_QUOTA)
}

/// The players tied for the fewest live creatures.
pub fn first_mover_candidates(piece_count: [usize; 2]) -> Vec<PlayerId> {
    let min = piece_count.iter().copied().min().unwrap_or(0);
    ALL_PLAYERS
        .into_iter()
        .filter(|p| piece_count[p.index()] == min)
        .collect()
}

/// Picks the first mover of the play phase.
pub fn choose_first_mover(piece_count: [usize; 2], rng: &mut impl Rng) -> PlayerId {
    let candidates = first_mover_candidates(piece_count);
    match candidates.as_slice() {
        [only] => *only,
        tied => tied[rng.gen_range(0..tied.len())],
    }
}

/// The player after `turn`, and whether the turn wrapped back to player 1.
pub fn next_turn(turn: PlayerId) -> (PlayerId, bool) {
    let next = turn.other();
    (next, next == PlayerId::One)
}

/// Win detection: a player with no creatures left has lost; if both are out,
/// the game is drawn.
pub fn detect_outcome(piece_count: [usize; 2]) -> Option<Outcome> {
    let out = |p: PlayerId| piece_count[p.index()] == 0;
    match (out(PlayerId::One), out(PlayerId::Two)) {
        (true, true) => Some(Outcome::Draw),
        (true, false) => Some(Outcome::Win(PlayerId::Two)),
        (false, true) => Some(Outcome::Win(PlayerId::One)),
        (false, false) => None,
    }
}
