//! Registry of running games and the win/loss tallies across them.
//!
//! Each game id maps to one owned `GameEngine`. Every call goes through
//! `&mut self`, so per-game actions are serialized by construction.

use std::fmt;

use log::info;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::board::{Creature, Outcome, PlayerId, ALL_PLAYERS};
use crate::game::GameEngine;
use crate::protocol::{GameSnapshot, NotationError, Position};
use crate::rules::RuleError;

/// Identifies a game within a registry. Ids are assigned sequentially from 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GameId(pub usize);

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors returned by registry and session calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("game {0} not found")]
    UnknownGame(GameId),

    #[error(transparent)]
    Rule(#[from] RuleError),

    #[error("malformed position: {0}")]
    Notation(#[from] NotationError),
}

impl SessionError {
    /// Stable machine-readable code for the wire.
    pub const fn code(&self) -> &'static str {
        match self {
            SessionError::UnknownGame(_) => "GAME_NOT_FOUND",
            SessionError::Rule(e) => e.code(),
            SessionError::Notation(_) => "INVALID_NOTATION",
        }
    }
}

/// Wins and losses for one player seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
}

/// Tallies of finished games, keyed by player seat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    records: [PlayerRecord; 2],
    pub draws: u32,
}

impl Stats {
    pub fn record(&self, player: PlayerId) -> PlayerRecord {
        self.records[player.index()]
    }

    /// Counts one finished game.
    pub fn tally(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(winner) => {
                self.records[winner.index()].wins += 1;
                self.records[winner.other().index()].losses += 1;
            }
            Outcome::Draw => self.draws += 1,
        }
    }
}

/// Serializes as `{"1": {"wins", "losses"}, "2": {...}, "draws": n}`.
impl Serialize for Stats {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ALL_PLAYERS.len() + 1))?;
        for player in ALL_PLAYERS {
            map.serialize_entry(&player.number().to_string(), &self.record(player))?;
        }
        map.serialize_entry("draws", &self.draws)?;
        map.end()
    }
}

/// Owns every game created in a session.
#[derive(Debug)]
pub struct GameRegistry {
    games: Vec<GameEngine>,
    stats: Stats,
    rng: SmallRng,
}

impl Default for GameRegistry {
    fn default() -> Self {
        GameRegistry::new(None)
    }
}

impl GameRegistry {
    /// Creates an empty registry. With a seed, every game it creates is
    /// set up deterministically.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        GameRegistry {
            games: Vec::new(),
            stats: Stats::default(),
            rng,
        }
    }

    /// Starts a new game and returns its id.
    pub fn create(&mut self) -> GameId {
        let id = GameId(self.games.len());
        self.games.push(GameEngine::with_seed(self.rng.gen()));
        info!("created game {}", id);
        id
    }

    /// Number of games created so far.
    pub fn games_played(&self) -> usize {
        self.games.len()
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Direct access to a game's engine.
    pub fn get(&self, id: GameId) -> Option<&GameEngine> {
        self.games.get(id.0)
    }

    fn engine(&self, id: GameId) -> Result<&GameEngine, SessionError> {
        self.games.get(id.0).ok_or(SessionError::UnknownGame(id))
    }

    /// Runs `action` against a game and tallies the result if it ends the game.
    fn apply<F>(&mut self, id: GameId, action: F) -> Result<GameSnapshot, SessionError>
    where
        F: FnOnce(&mut GameEngine) -> Result<(), RuleError>,
    {
        let engine = self
            .games
            .get_mut(id.0)
            .ok_or(SessionError::UnknownGame(id))?;
        let was_over = engine.is_over();
        action(engine)?;

        if let (false, Some(outcome)) = (was_over, engine.outcome()) {
            info!("game {} finished: {:?}", id, outcome);
            self.stats.tally(outcome);
        }
        Ok(engine.game_board())
    }

    pub fn game_board(&self, id: GameId) -> Result<GameSnapshot, SessionError> {
        Ok(self.engine(id)?.game_board())
    }

    /// Restores a game to a freshly set-up state.
    pub fn reset(&mut self, id: GameId) -> Result<GameSnapshot, SessionError> {
        let snapshot = self.apply(id, |engine| {
            engine.reset();
            Ok(())
        })?;
        info!("reset game {}", id);
        Ok(snapshot)
    }

    pub fn add_monster(
        &mut self,
        id: GameId,
        player: PlayerId,
        row: usize,
        column: usize,
        creature: Creature,
    ) -> Result<GameSnapshot, SessionError> {
        self.apply(id, |engine| engine.add_monster(player, row, column, creature))
    }

    pub fn move_monster(
        &mut self,
        id: GameId,
        player: PlayerId,
        from: (usize, usize),
        to: (usize, usize),
    ) -> Result<GameSnapshot, SessionError> {
        self.apply(id, |engine| {
            engine.move_monster(player, from.0, from.1, to.0, to.1)
        })
    }

    pub fn end_turn(&mut self, id: GameId, player: PlayerId) -> Result<GameSnapshot, SessionError> {
        self.apply(id, |engine| engine.end_turn(player))
    }

    /// Replaces a game's state. Loading an already-decided position is not tallied.
    pub fn load_position(
        &mut self,
        id: GameId,
        position: &Position,
    ) -> Result<GameSnapshot, SessionError> {
        let engine = self
            .games
            .get_mut(id.0)
            .ok_or(SessionError::UnknownGame(id))?;
        engine.set_position(position);
        Ok(engine.game_board())
    }

    pub fn position(&self, id: GameId) -> Result<Position, SessionError> {
        Ok(self.engine(id)?.position())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_position;

    #[test]
    fn ids_are_sequential() {
        let mut registry = GameRegistry::new(Some(1));
        assert_eq!(registry.create(), GameId(0));
        assert_eq!(registry.create(), GameId(1));
        assert_eq!(registry.games_played(), 2);
    }

    #[test]
    fn unknown_game_rejected() {
        let mut registry = GameRegistry::new(Some(1));
        assert_eq!(
            registry.game_board(GameId(0)),
            Err(SessionError::UnknownGame(GameId(0)))
        );
        assert_eq!(
            registry.end_turn(GameId(5), PlayerId::One).unwrap_err().code(),
            "GAME_NOT_FOUND"
        );
    }

    #[test]
    fn games_are_independent() {
        let mut registry = GameRegistry::new(Some(2));
        let a = registry.create();
        let b = registry.create();
        registry.add_monster(a, PlayerId::One, 3, 3, Creature::Ghost).unwrap();
        assert_eq!(registry.get(a).unwrap().placed_count(PlayerId::One), 1);
        assert_eq!(registry.get(b).unwrap().placed_count(PlayerId::One), 0);
    }

    #[test]
    fn seeded_registries_agree() {
        let mut r1 = GameRegistry::new(Some(77));
        let mut r2 = GameRegistry::new(Some(77));
        let a = r1.create();
        let b = r2.create();
        assert_eq!(r1.game_board(a).unwrap(), r2.game_board(b).unwrap());
    }

    #[test]
    fn rule_errors_pass_through() {
        let mut registry = GameRegistry::new(Some(3));
        let id = registry.create();
        let err = registry
            .add_monster(id, PlayerId::Two, 6, 6, Creature::Ghost)
            .unwrap_err();
        assert_eq!(err.code(), "TURN_VIOLATION");
    }

    #[test]
    fn win_tallied_once() {
        let mut registry = GameRegistry::new(Some(4));
        let id = registry.create();
        let pos = parse_position("m1.33.3.-/V9/10/10/10/10/10/10/10/10/10").unwrap();
        registry.load_position(id, &pos).unwrap();

        let snapshot = registry.end_turn(id, PlayerId::One).unwrap();
        assert_eq!(snapshot.winner, Some(Outcome::Win(PlayerId::One)));
        registry.end_turn(id, PlayerId::Two).unwrap();
        registry.end_turn(id, PlayerId::One).unwrap();

        let stats = registry.stats();
        assert_eq!(stats.record(PlayerId::One), PlayerRecord { wins: 1, losses: 0 });
        assert_eq!(stats.record(PlayerId::Two), PlayerRecord { wins: 0, losses: 1 });
        assert_eq!(stats.draws, 0);
    }

    #[test]
    fn draw_tallied() {
        let mut registry = GameRegistry::new(Some(5));
        let id = registry.create();
        let pos = parse_position("m1.33.0.-/G9/g9/10/10/10/10/10/10/10/10").unwrap();
        registry.load_position(id, &pos).unwrap();
        registry.move_monster(id, PlayerId::One, (0, 0), (1, 0)).unwrap();
        assert_eq!(registry.stats().draws, 1);
    }

    #[test]
    fn reset_allows_a_new_tally() {
        let mut registry = GameRegistry::new(Some(6));
        let id = registry.create();
        let pos = parse_position("m1.33.3.-/V9/10/10/10/10/10/10/10/10/10").unwrap();

        registry.load_position(id, &pos).unwrap();
        registry.end_turn(id, PlayerId::One).unwrap();
        let snapshot = registry.reset(id).unwrap();
        assert_eq!(snapshot.winner, None);
        assert!(snapshot.initial_placement);

        registry.load_position(id, &pos).unwrap();
        registry.end_turn(id, PlayerId::One).unwrap();
        assert_eq!(registry.stats().record(PlayerId::One).wins, 2);
    }

    #[test]
    fn reset_unknown_game_rejected() {
        let mut registry = GameRegistry::new(Some(7));
        registry.create();
        assert_eq!(
            registry.reset(GameId(1)),
            Err(SessionError::UnknownGame(GameId(1)))
        );
        assert!(registry.reset(GameId(0)).is_ok());
    }

    #[test]
    fn inconsistent_position_never_reaches_a_game() {
        let mut registry = GameRegistry::new(Some(8));
        let id = registry.create();
        let err = parse_position("p1.33.0.-/V9/10/10/10/10/10/10/10/10/v9")
            .map_err(SessionError::from)
            .unwrap_err();
        assert_eq!(err.code(), "INVALID_NOTATION");
        assert!(registry.game_board(id).unwrap().initial_placement);
    }

    #[test]
    fn stats_serialize_by_seat() {
        let mut stats = Stats::default();
        stats.tally(Outcome::Win(PlayerId::Two));
        stats.tally(Outcome::Draw);
        let value = serde_json::to_value(stats).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "1": {"wins": 0, "losses": 1},
                "2": {"wins": 1, "losses": 0},
                "draws": 1
            })
        );
    }
}
