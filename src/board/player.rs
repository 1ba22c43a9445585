//! The two sides of a game.
//!
//! Player 1 owns the top half of the board (rows 0..=4) and starts on row 0;
//! player 2 owns the bottom half (rows 5..=9) and starts on row 9.

use std::fmt;

use serde::{Serialize, Serializer};

use super::square::BOARD_SIZE;

/// One of the two players. Turn order strictly alternates between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlayerId {
    One,
    Two,
}

/// Both players in turn order.
pub const ALL_PLAYERS: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

impl PlayerId {
    /// Returns the wire number of this player (1 or 2).
    pub const fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    /// Parses a player from its wire number.
    pub fn from_number(n: u8) -> Option<PlayerId> {
        match n {
            1 => Some(PlayerId::One),
            2 => Some(PlayerId::Two),
            _ => None,
        }
    }

    /// Returns the opposing player.
    pub const fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Zero-based index for per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// The border row this player's pre-placed creatures start on.
    pub const fn home_row(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => BOARD_SIZE - 1,
        }
    }

    /// Returns true if `row` lies in this player's half of the board.
    pub const fn owns_row(self, row: usize) -> bool {
        match self {
            PlayerId::One => row < BOARD_SIZE / 2,
            PlayerId::Two => row >= BOARD_SIZE / 2 && row < BOARD_SIZE,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

impl Serialize for PlayerId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.number())
    }
}
