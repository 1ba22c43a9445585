//! Combat between a moving creature and the opposing creature it lands on.

use crate::board::{Board, Creature, Occupant, PlayerId, Square};

/// Result of a single encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CombatResult {
    /// The attacker takes the destination cell.
    AttackerWins,
    /// The defender stays; the attacker is removed.
    DefenderWins,
    /// Same kind: both creatures are removed.
    Mutual,
}

/// Decides an encounter from the two creature kinds alone.
pub fn fight(attacker: Creature, defender: Creature) -> CombatResult {
    if attacker == defender {
        CombatResult::Mutual
    } else if attacker.beats(defender) {
        CombatResult::AttackerWins
    } else {
        CombatResult::DefenderWins
    }
}

/// A resolved encounter, with both combatants as they were before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engagement {
    pub attacker: Occupant,
    pub defender: Occupant,
    pub result: CombatResult,
}

impl Engagement {
    /// The players that lost a creature in this encounter.
    pub fn losers(&self) -> Vec<PlayerId> {
        match self.result {
            CombatResult::AttackerWins => vec![self.defender.owner],
            CombatResult::DefenderWins => vec![self.attacker.owner],
            CombatResult::Mutual => vec![self.attacker.owner, self.defender.owner],
        }
    }
}

/// Resolves an attack from `from` onto `to` and updates the board.
///
/// Both cells must be occupied. The source cell is always left empty.
/// Returns None (leaving the board untouched) if either cell is empty.
pub fn resolve(board: &mut Board, from: Square, to: Square) -> Option<Engagement> {
    let attacker = board.get(from)?;
    let defender = board.get(to)?;
    let result = fight(attacker.creature, defender.creature);

    match result {
        CombatResult::AttackerWins => board.set(to, Some(attacker)),
        CombatResult::DefenderWins => {}
        CombatResult::Mutual => board.set(to, None),
    }
    board.clear(from);

    Some(Engagement {
        attacker,
        defender,
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ALL_CREATURES;

    fn sq(row: usize, column: usize) -> Square {
        Square::new(row, column).unwrap()
    }

    fn duel(attacker: Creature, defender: Creature) -> (Board, Engagement) {
        let mut board = Board::empty();
        board.set(sq(4, 4), Some(Occupant::new(PlayerId::One, attacker)));
        board.set(sq(4, 5), Some(Occupant::new(PlayerId::Two, defender)));
        let engagement = resolve(&mut board, sq(4, 4), sq(4, 5)).unwrap();
        (board, engagement)
    }

    #[test]
    fn fight_follows_the_cycle() {
        assert_eq!(fight(Creature::Vampire, Creature::Werewolf), CombatResult::AttackerWins);
        assert_eq!(fight(Creature::Werewolf, Creature::Ghost), CombatResult::AttackerWins);
        assert_eq!(fight(Creature::Ghost, Creature::Vampire), CombatResult::AttackerWins);
        assert_eq!(fight(Creature::Werewolf, Creature::Vampire), CombatResult::DefenderWins);
        for c in ALL_CREATURES {
            assert_eq!(fight(c, c), CombatResult::Mutual);
        }
    }

    #[test]
    fn attacker_win_takes_the_cell() {
        let (board, engagement) = duel(Creature::Vampire, Creature::Werewolf);
        assert_eq!(
            board.get(sq(4, 5)),
            Some(Occupant::new(PlayerId::One, Creature::Vampire))
        );
        assert!(board.is_empty(sq(4, 4)));
        assert_eq!(engagement.losers(), vec![PlayerId::Two]);
    }

    #[test]
    fn defender_win_keeps_the_cell() {
        let (board, engagement) = duel(Creature::Werewolf, Creature::Vampire);
        assert_eq!(
            board.get(sq(4, 5)),
            Some(Occupant::new(PlayerId::Two, Creature::Vampire))
        );
        assert!(board.is_empty(sq(4, 4)));
        assert_eq!(engagement.losers(), vec![PlayerId::One]);
    }

    #[test]
    fn same_kind_clears_both_cells() {
        let (board, engagement) = duel(Creature::Ghost, Creature::Ghost);
        assert!(board.is_empty(sq(4, 4)));
        assert!(board.is_empty(sq(4, 5)));
        assert_eq!(engagement.losers(), vec![PlayerId::One, PlayerId::Two]);
    }

    #[test]
    fn resolve_on_empty_cell_is_noop() {
        let mut board = Board::empty();
        board.set(sq(0, 0), Some(Occupant::new(PlayerId::One, Creature::Ghost)));
        let before = board;
        assert!(resolve(&mut board, sq(0, 0), sq(0, 1)).is_none());
        assert_eq!(board, before);
    }
}
