//! Setup and placement-phase rules.

use rand::Rng;

use super::error::RuleError;
use crate::board::{Board, Creature, Occupant, PlayerId, Square, BOARD_SIZE};

/// Creatures each player places by hand during the placement phase.
pub const PLACEMENT_QUOTA: usize = 3;

/// Creatures each player receives on their home row before placement opens.
pub const AUTO_PLACED: usize = 7;

/// Checks that `player` may drop a creature at (`row`, `column`): the cell
/// must be on the board, empty, and inside the player's own half.
pub fn check_placement(
    board: &Board,
    player: PlayerId,
    row: usize,
    column: usize,
) -> Result<Square, RuleError> {
    let invalid = RuleError::InvalidPlacement {
        player,
        row,
        column,
    };
    let square = Square::new(row, column).ok_or(invalid)?;
    if !board.is_empty(square) || !player.owns_row(square.row()) {
        return Err(invalid);
    }
    Ok(square)
}

/// Places `count` creatures of random kind on random empty cells of the
/// player's home row, retrying on collision. `count` must not exceed the row width.
pub fn populate_home_row(board: &mut Board, player: PlayerId, count: usize, rng: &mut impl Rng) {
    debug_assert!(count <= BOARD_SIZE);
    let row = player.home_row();
    let mut placed = 0;
    while placed < count {
        let column = rng.gen_range(0..BOARD_SIZE);
        let Some(square) = Square::new(row, column) else {
            continue;
        };
        let occupant = Occupant::new(player, Creature::random(rng));
        if board.place(square, occupant) {
            placed += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn placement_inside_own_half() {
        let board = Board::empty();
        assert!(check_placement(&board, PlayerId::One, 0, 0).is_ok());
        assert!(check_placement(&board, PlayerId::One, 4, 9).is_ok());
        assert!(check_placement(&board, PlayerId::Two, 5, 0).is_ok());
        assert!(check_placement(&board, PlayerId::Two, 9, 9).is_ok());
    }

    #[test]
    fn placement_in_opponent_half_rejected() {
        let board = Board::empty();
        assert_eq!(
            check_placement(&board, PlayerId::One, 5, 0),
            Err(RuleError::InvalidPlacement {
                player: PlayerId::One,
                row: 5,
                column: 0
            })
        );
        assert!(check_placement(&board, PlayerId::Two, 4, 3).is_err());
    }

    #[test]
    fn placement_off_board_rejected() {
        let board = Board::empty();
        assert!(check_placement(&board, PlayerId::Two, 10, 0).is_err());
        assert!(check_placement(&board, PlayerId::One, 0, 10).is_err());
    }

    #[test]
    fn placement_on_occupied_cell_rejected() {
        let mut board = Board::empty();
        let sq = Square::new(2, 2).unwrap();
        board.place(sq, Occupant::new(PlayerId::One, Creature::Ghost));
        assert!(check_placement(&board, PlayerId::One, 2, 2).is_err());
    }

    #[test]
    fn populate_fills_only_home_row() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut board = Board::empty();
        populate_home_row(&mut board, PlayerId::One, AUTO_PLACED, &mut rng);
        populate_home_row(&mut board, PlayerId::Two, AUTO_PLACED, &mut rng);

        assert_eq!(board.count(PlayerId::One), AUTO_PLACED);
        assert_eq!(board.count(PlayerId::Two), AUTO_PLACED);
        assert!(board.squares_of(PlayerId::One).all(|s| s.row() == 0));
        assert!(board.squares_of(PlayerId::Two).all(|s| s.row() == 9));
    }

    #[test]
    fn populate_can_fill_whole_row() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut board = Board::empty();
        populate_home_row(&mut board, PlayerId::Two, BOARD_SIZE, &mut rng);
        assert_eq!(board.count(PlayerId::Two), BOARD_SIZE);
    }
}
