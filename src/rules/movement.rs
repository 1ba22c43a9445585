//! Movement legality and path tracing.
//!
//! Creatures move along one of the eight compass directions. Horizontal and
//! vertical moves may cover any distance on the board; diagonal moves are
//! limited to two cells.

use super::error::{MoveViolation, RuleError};
use crate::board::{Board, Occupant, PlayerId, Square};

/// Longest diagonal move, in cells.
pub const MAX_DIAGONAL_STEP: usize = 2;

/// A move that passed every legality check, ready to be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub from: Square,
    pub to: Square,
    /// The opposing creature at the destination, if the move is an attack.
    pub defender: Option<Occupant>,
}

/// Returns true if `from -> to` follows the movement geometry.
pub fn is_geometric_move(from: Square, to: Square) -> bool {
    let d_row = from.row().abs_diff(to.row());
    let d_column = from.column().abs_diff(to.column());
    d_row == 0 || d_column == 0 || (d_row == d_column && d_row <= MAX_DIAGONAL_STEP)
}

/// The cells strictly between `from` and `to`, in travel order.
///
/// Empty when the two squares are adjacent, identical, or not on a shared
/// row, column or diagonal.
pub fn path(from: Square, to: Square) -> Vec<Square> {
    let d_row = to.row() as i32 - from.row() as i32;
    let d_column = to.column() as i32 - from.column() as i32;
    let on_line = d_row == 0 || d_column == 0 || d_row.abs() == d_column.abs();
    if !on_line {
        return Vec::new();
    }

    let step = (d_row.signum(), d_column.signum());
    let distance = d_row.abs().max(d_column.abs());
    (1..distance)
        .filter_map(|i| from.offset(step.0 * i, step.1 * i))
        .collect()
}

/// Validates a move by `player` from (`start`) to (`end`), each given as
/// `(row, column)`. Checks run in order: bounds, start ownership, geometry,
/// path, destination.
pub fn check_move(
    board: &Board,
    player: PlayerId,
    start: (usize, usize),
    end: (usize, usize),
) -> Result<MovePlan, RuleError> {
    let invalid = |reason| RuleError::InvalidMove { reason };

    let from = Square::new(start.0, start.1).ok_or(invalid(MoveViolation::OffBoard))?;
    let to = Square::new(end.0, end.1).ok_or(invalid(MoveViolation::OffBoard))?;

    if board.owner(from) != Some(player) {
        return Err(invalid(MoveViolation::NotOwner));
    }
    if !is_geometric_move(from, to) {
        return Err(invalid(MoveViolation::Geometry));
    }
    if let Some(square) = path(from, to)
        .into_iter()
        .find(|sq| matches!(board.owner(*sq), Some(owner) if owner != player))
    {
        return Err(RuleError::BlockedPath { square });
    }

    match board.get(to) {
        Some(occupant) if occupant.owner == player => Err(invalid(MoveViolation::OwnDestination)),
        defender => Ok(MovePlan { from, to, defender }),
    }
}

/// Whether the creature on `square` is able to move.
///
/// Every creature is currently treated as mobile; real move enumeration can
/// replace this without touching turn handling.
pub fn creature_can_move(board: &Board, square: Square) -> bool {
    board.get(square).is_some()
}

/// Returns true if at least one of the player's creatures can move.
pub fn has_any_legal_move(board: &Board, player: PlayerId) -> bool {
    board
        .squares_of(player)
        .any(|square| creature_can_move(board, square))
}
