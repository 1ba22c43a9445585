//! Compact single-token notation for a full game position.
//!
//! Format: `<phase><turn>.<placed1><placed2>.<round>.<outcome>/<rank0>/.../<rank9>`
//!
//! - phase is `p` (placement) or `m` (movement), turn is `1` or `2`
//! - placed counts are single digits, round is decimal
//! - outcome is `-` (running), `1`, `2` or `d` (draw)
//! - each rank lists columns 0..9: digits for runs of empty cells, `V W G`
//!   for player 1's creatures and `v w g` for player 2's
//!
//! The initial-style position `p1.00.0.-/VV1WG1GV1W/10/10/10/10/10/10/10/10/gv1wwwv1g1`
//! is a placement phase with seven creatures per side on the home rows.

use crate::board::{
    Board, Creature, Occupant, Outcome, Phase, PlayerId, Square, BOARD_SIZE,
};
use crate::rules::{placement_complete, PLACEMENT_QUOTA};

/// Errors that can occur during position parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected {expected} sections separated by '/', got {0}", expected = BOARD_SIZE + 1)]
    WrongSectionCount(usize),

    #[error("malformed status section: '{0}'")]
    InvalidStatus(String),

    #[error("invalid phase character: '{0}'")]
    InvalidPhase(char),

    #[error("invalid player character: '{0}'")]
    InvalidPlayer(char),

    #[error("invalid placed counts: '{0}'")]
    InvalidPlacedCount(String),

    #[error("invalid round: '{0}'")]
    InvalidRound(String),

    #[error("invalid outcome: '{0}'")]
    InvalidOutcome(String),

    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),

    #[error("rank {row} describes {cells} cells, expected {expected}", expected = BOARD_SIZE)]
    RankLength { row: usize, cells: usize },

    #[error("inconsistent status '{status}': {reason}")]
    InconsistentStatus { status: String, reason: &'static str },
}

/// A complete engine state, independent of any random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub phase: Phase,
    pub turn: PlayerId,
    pub placed: [usize; 2],
    pub round: u32,
    pub outcome: Option<Outcome>,
}

/// Parses the status section (e.g. `m2.33.4.-`).
fn parse_status(
    s: &str,
) -> Result<(Phase, PlayerId, [usize; 2], u32, Option<Outcome>), NotationError> {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return Err(NotationError::InvalidStatus(s.to_string()));
    }

    let mut head = parts[0].chars();
    let (Some(phase_char), Some(turn_char), None) = (head.next(), head.next(), head.next()) else {
        return Err(NotationError::InvalidStatus(s.to_string()));
    };
    let phase = Phase::from_notation_char(phase_char).ok_or(NotationError::InvalidPhase(phase_char))?;
    let turn = turn_char
        .to_digit(10)
        .and_then(|d| PlayerId::from_number(d as u8))
        .ok_or(NotationError::InvalidPlayer(turn_char))?;

    let placed_digits: Vec<usize> = parts[1]
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<Vec<_>>>()
        .unwrap_or_default();
    let placed = match placed_digits.as_slice() {
        [a, b] if *a <= PLACEMENT_QUOTA && *b <= PLACEMENT_QUOTA => [*a, *b],
        _ => return Err(NotationError::InvalidPlacedCount(parts[1].to_string())),
    };

    let round: u32 = parts[2]
        .parse()
        .map_err(|_| NotationError::InvalidRound(parts[2].to_string()))?;

    let mut tail = parts[3].chars();
    let outcome = match (tail.next(), tail.next()) {
        (Some(c), None) => Outcome::from_notation_char(c),
        _ => None,
    }
    .ok_or_else(|| NotationError::InvalidOutcome(parts[3].to_string()))?;

    check_status(s, phase, turn, placed, round)?;
    Ok((phase, turn, placed, round, outcome))
}

/// Rejects status fields no sequence of legal actions can reach.
fn check_status(
    s: &str,
    phase: Phase,
    turn: PlayerId,
    placed: [usize; 2],
    round: u32,
) -> Result<(), NotationError> {
    let reason = match phase {
        Phase::Play if !placement_complete(placed) => {
            Some("play phase before placement is complete")
        }
        Phase::Placement if placement_complete(placed) => {
            Some("placement phase after placement is complete")
        }
        Phase::Placement if placed[turn.index()] >= PLACEMENT_QUOTA => {
            Some("player to move has no placements left")
        }
        Phase::Placement if round != 0 => Some("rounds only advance during play"),
        _ => None,
    };
    match reason {
        Some(reason) => Err(NotationError::InconsistentStatus {
            status: s.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Parses one rank into `board` row `row`.
fn parse_rank(rank: &str, row: usize, board: &mut Board) -> Result<(), NotationError> {
    let mut column: usize = 0;
    let mut run: usize = 0;

    for c in rank.chars() {
        if let Some(d) = c.to_digit(10) {
            run = run.saturating_mul(10).saturating_add(d as usize);
            continue;
        }
        column = column.saturating_add(run);
        run = 0;

        let creature = Creature::from_letter(c).ok_or(NotationError::InvalidPiece(c))?;
        let owner = if c.is_ascii_uppercase() {
            PlayerId::One
        } else {
            PlayerId::Two
        };
        let square = Square::new(row, column).ok_or(NotationError::RankLength {
            row,
            cells: column.saturating_add(1),
        })?;
        board.set(square, Some(Occupant::new(owner, creature)));
        column += 1;
    }
    column = column.saturating_add(run);

    if column != BOARD_SIZE {
        return Err(NotationError::RankLength { row, cells: column });
    }
    Ok(())
}

/// Parses a full position string.
pub fn parse_position(s: &str) -> Result<Position, NotationError> {
    let sections: Vec<&str> = s.trim().split('/').collect();
    if sections.len() != BOARD_SIZE + 1 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let (phase, turn, placed, round, outcome) = parse_status(sections[0])?;

    let mut board = Board::empty();
    for (row, rank) in sections[1..].iter().enumerate() {
        parse_rank(rank, row, &mut board)?;
    }

    Ok(Position {
        board,
        phase,
        turn,
        placed,
        round,
        outcome,
    })
}

fn piece_char(occupant: Occupant) -> char {
    let letter = occupant.creature.letter();
    match occupant.owner {
        PlayerId::One => letter,
        PlayerId::Two => letter.to_ascii_lowercase(),
    }
}

fn encode_rank(cells: &[Option<Occupant>]) -> String {
    let mut out = String::new();
    let mut empty: usize = 0;
    for cell in cells {
        match cell {
            Some(occupant) => {
                if empty > 0 {
                    out.push_str(&empty.to_string());
                    empty = 0;
                }
                out.push(piece_char(*occupant));
            }
            None => empty += 1,
        }
    }
    if empty > 0 {
        out.push_str(&empty.to_string());
    }
    out
}

/// Encodes a position into its notation string.
pub fn encode_position(position: &Position) -> String {
    let outcome = position.outcome.map_or('-', Outcome::notation_char);
    let mut out = format!(
        "{}{}.{}{}.{}.{}",
        position.phase.notation_char(),
        position.turn.number(),
        position.placed[0],
        position.placed[1],
        position.round,
        outcome,
    );
    for row in 0..BOARD_SIZE {
        out.push('/');
        out.push_str(&encode_rank(position.board.row(row)));
    }
    out
}
