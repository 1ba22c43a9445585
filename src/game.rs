//! Game state management.
//!
//! `GameEngine` owns one game: the board, per-player piece and placement
//! counts, phase, turn, round and outcome. Every mutating call either applies
//! completely or is rejected with a `RuleError` and leaves the state untouched.
//! Once the game has an outcome, further actions are silently absorbed until
//! `reset`.
//!
//! The engine does no locking; callers serialize access per instance.

use log::{debug, info};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::board::{Board, Creature, Occupant, Outcome, Phase, PlayerId, ALL_PLAYERS};
use crate::protocol::{GameSnapshot, Position};
use crate::rules::{
    self, check_move, check_placement, choose_first_mover, detect_outcome, next_turn,
    placement_complete, populate_home_row, RuleError, AUTO_PLACED, PLACEMENT_QUOTA,
};

/// Holds the mutable state of a single game.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    piece_count: [usize; 2],
    placed_count: [usize; 2],
    phase: Phase,
    turn: PlayerId,
    round: u32,
    outcome: Option<Outcome>,
    rng: SmallRng,
}

impl Default for GameEngine {
    fn default() -> Self {
        GameEngine::new()
    }
}

impl GameEngine {
    /// Creates a freshly set-up game seeded from OS entropy.
    pub fn new() -> Self {
        GameEngine::with_rng(SmallRng::from_entropy())
    }

    /// Creates a freshly set-up game with a deterministic random source.
    pub fn with_seed(seed: u64) -> Self {
        GameEngine::with_rng(SmallRng::seed_from_u64(seed))
    }

    fn with_rng(rng: SmallRng) -> Self {
        let mut engine = GameEngine {
            board: Board::empty(),
            piece_count: [0; 2],
            placed_count: [0; 2],
            phase: Phase::Placement,
            turn: PlayerId::One,
            round: 0,
            outcome: None,
            rng,
        };
        engine.reset();
        engine
    }

    /// Returns the game to its initial state: empty board, cleared counters,
    /// then seven random creatures on each home row.
    pub fn reset(&mut self) {
        self.board = Board::empty();
        self.piece_count = [0; 2];
        self.placed_count = [0; 2];
        self.phase = Phase::Placement;
        self.turn = PlayerId::One;
        self.round = 0;
        self.outcome = None;

        for player in ALL_PLAYERS {
            populate_home_row(&mut self.board, player, AUTO_PLACED, &mut self.rng);
            self.piece_count[player.index()] += AUTO_PLACED;
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Live creatures the player has on the board.
    pub fn piece_count(&self, player: PlayerId) -> usize {
        self.piece_count[player.index()]
    }

    /// Creatures the player has placed by hand.
    pub fn placed_count(&self, player: PlayerId) -> usize {
        self.placed_count[player.index()]
    }

    /// Mobility policy consulted after every move.
    pub fn has_any_legal_move(&self, player: PlayerId) -> bool {
        rules::has_any_legal_move(&self.board, player)
    }

    /// Read-only snapshot for broadcasting.
    pub fn game_board(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            current_player: self.turn,
            initial_placement: self.phase == Phase::Placement,
            winner: self.outcome,
            round: self.round,
        }
    }

    /// Places one of the player's creatures during the placement phase.
    ///
    /// Checks run in order: turn, target cell (empty and in the player's own
    /// half), quota. The third placement ends the player's turn.
    pub fn add_monster(
        &mut self,
        player: PlayerId,
        row: usize,
        column: usize,
        creature: Creature,
    ) -> Result<(), RuleError> {
        if self.is_over() {
            return Ok(());
        }
        self.check_turn(player)?;
        let square = check_placement(&self.board, player, row, column)?;
        if self.placed_count[player.index()] >= PLACEMENT_QUOTA {
            return Err(RuleError::PlacementQuotaExceeded { player });
        }

        self.board.set(square, Some(Occupant::new(player, creature)));
        self.piece_count[player.index()] += 1;
        self.placed_count[player.index()] += 1;
        debug!("{} placed {} at {}", player, creature.name(), square);

        if self.placed_count[player.index()] == PLACEMENT_QUOTA {
            self.advance_turn();
        }
        Ok(())
    }

    /// Moves one of the player's creatures, fighting whatever opposing
    /// creature occupies the destination.
    pub fn move_monster(
        &mut self,
        player: PlayerId,
        start_row: usize,
        start_column: usize,
        end_row: usize,
        end_column: usize,
    ) -> Result<(), RuleError> {
        if self.is_over() {
            return Ok(());
        }
        if self.phase != Phase::Play {
            return Err(RuleError::PhaseViolation);
        }
        self.check_turn(player)?;

        let plan = check_move(
            &self.board,
            player,
            (start_row, start_column),
            (end_row, end_column),
        )?;

        match plan.defender {
            None => {
                let mover = self.board.clear(plan.from);
                self.board.set(plan.to, mover);
                debug!("{} moved {} -> {}", player, plan.from, plan.to);
            }
            Some(_) => {
                if let Some(engagement) = rules::resolve(&mut self.board, plan.from, plan.to) {
                    for loser in engagement.losers() {
                        let count = &mut self.piece_count[loser.index()];
                        *count = count.saturating_sub(1);
                    }
                    debug!(
                        "{} attacked {} -> {}: {:?}",
                        player, plan.from, plan.to, engagement.result
                    );
                }
            }
        }

        if !self.has_any_legal_move(self.turn) {
            debug!("{} has no creature able to move", self.turn);
            self.advance_turn();
        }
        Ok(())
    }

    /// Ends the player's turn. Ignored during placement (turns pass there
    /// automatically) and once the game is over.
    pub fn end_turn(&mut self, player: PlayerId) -> Result<(), RuleError> {
        if self.is_over() {
            return Ok(());
        }
        self.check_turn(player)?;
        if self.phase == Phase::Placement {
            debug!("{} tried to end a placement turn; ignored", player);
            return Ok(());
        }
        self.advance_turn();
        Ok(())
    }

    /// Captures the current state for notation output.
    pub fn position(&self) -> Position {
        Position {
            board: self.board,
            phase: self.phase,
            turn: self.turn,
            placed: self.placed_count,
            round: self.round,
            outcome: self.outcome,
        }
    }

    /// Replaces the current state with `position`. Piece counts are
    /// recomputed from the board.
    pub fn set_position(&mut self, position: &Position) {
        self.board = position.board;
        self.phase = position.phase;
        self.turn = position.turn;
        self.placed_count = position.placed;
        self.round = position.round;
        self.outcome = position.outcome;
        for player in ALL_PLAYERS {
            self.piece_count[player.index()] = self.board.count(player);
        }
    }

    fn check_turn(&self, player: PlayerId) -> Result<(), RuleError> {
        if player != self.turn {
            return Err(RuleError::TurnViolation {
                expected: self.turn,
                actual: player,
            });
        }
        Ok(())
    }

    /// Hands the turn on, opening the play phase once placement is complete,
    /// then runs win detection.
    fn advance_turn(&mut self) {
        if self.is_over() {
            return;
        }

        if self.phase == Phase::Placement && placement_complete(self.placed_count) {
            self.phase = Phase::Play;
            self.turn = choose_first_mover(self.piece_count, &mut self.rng);
            info!(
                "placement complete ({} vs {} creatures), {} moves first",
                self.piece_count[0], self.piece_count[1], self.turn
            );
        } else {
            let (next, wrapped) = next_turn(self.turn);
            self.turn = next;
            if wrapped && self.phase == Phase::Play {
                self.round += 1;
            }
            debug!("turn passes to {} (round {})", self.turn, self.round);
        }

        self.outcome = detect_outcome(self.piece_count);
        if let Some(outcome) = self.outcome {
            info!("game over: {:?} after {} rounds", outcome, self.round);
        }
    }
}
