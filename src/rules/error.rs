//! Rejection reasons for player actions.

use std::fmt;

use crate::board::{PlayerId, Square};

/// Why a move failed its legality checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveViolation {
    /// Start or end lies outside the board.
    OffBoard,
    /// The start cell does not hold one of the mover's creatures.
    NotOwner,
    /// Not a compass line, or a diagonal longer than two cells.
    Geometry,
    /// The destination already holds one of the mover's creatures.
    OwnDestination,
}

impl fmt::Display for MoveViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MoveViolation::OffBoard => "square is off the board",
            MoveViolation::NotOwner => "start square does not hold your creature",
            MoveViolation::Geometry => "creatures move in straight lines or up to 2 cells diagonally",
            MoveViolation::OwnDestination => "destination holds your own creature",
        };
        f.write_str(text)
    }
}

/// A rejected action. The game state is never modified when one is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("not your turn: it is {expected}'s turn, not {actual}'s")]
    TurnViolation { expected: PlayerId, actual: PlayerId },

    #[error("cannot move creatures during the placement phase")]
    PhaseViolation,

    #[error("invalid placement for {player} at ({row}, {column})")]
    InvalidPlacement {
        player: PlayerId,
        row: usize,
        column: usize,
    },

    #[error("{player} has already placed all their creatures")]
    PlacementQuotaExceeded { player: PlayerId },

    #[error("invalid move: {reason}")]
    InvalidMove { reason: MoveViolation },

    #[error("cannot move over the opponent's creature at {square}")]
    BlockedPath { square: Square },
}

impl RuleError {
    /// Stable machine-readable code for the wire.
    pub const fn code(&self) -> &'static str {
        match self {
            RuleError::TurnViolation { .. } => "TURN_VIOLATION",
            RuleError::PhaseViolation => "PHASE_VIOLATION",
            RuleError::InvalidPlacement { .. } => "INVALID_PLACEMENT",
            RuleError::PlacementQuotaExceeded { .. } => "PLACEMENT_QUOTA_EXCEEDED",
            RuleError::InvalidMove { .. } => "INVALID_MOVE",
            RuleError::BlockedPath { .. } => "BLOCKED_PATH",
        }
    }

    /// True for every kind of illegal move, blocked paths included.
    pub const fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            RuleError::InvalidMove { .. } | RuleError::BlockedPath { .. }
        )
    }
}
