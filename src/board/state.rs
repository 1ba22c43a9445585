//! Board and game-status representation.
//!
//! Holds the grid of cells plus the small enums describing where a game is in
//! its lifecycle (phase and outcome).

use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};

use super::creature::Creature;
use super::player::PlayerId;
use super::square::{Square, BOARD_SIZE, CELL_COUNT};

/// The phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Each player places their three creatures.
    Placement,
    /// Players alternate moving creatures.
    Play,
}

impl Phase {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Phase::Placement => 'p',
            Phase::Play => 'm',
        }
    }

    /// Parses a phase from its single-character notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<Phase> {
        match c {
            'p' => Some(Phase::Placement),
            'm' => Some(Phase::Play),
            _ => None,
        }
    }
}

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win(PlayerId),
    Draw,
}

impl Outcome {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Outcome::Win(PlayerId::One) => '1',
            Outcome::Win(PlayerId::Two) => '2',
            Outcome::Draw => 'd',
        }
    }

    /// Parses an outcome from its notation abbreviation; `-` means still running.
    pub fn from_notation_char(c: char) -> Option<Option<Outcome>> {
        match c {
            '-' => Some(None),
            '1' => Some(Some(Outcome::Win(PlayerId::One))),
            '2' => Some(Some(Outcome::Win(PlayerId::Two))),
            'd' => Some(Some(Outcome::Draw)),
            _ => None,
        }
    }
}

/// Winners go on the wire as their number, draws as the string `"draw"`.
impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Win(player) => serializer.serialize_u8(player.number()),
            Outcome::Draw => serializer.serialize_str("draw"),
        }
    }
}

/// A creature together with the player that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Occupant {
    pub owner: PlayerId,
    pub creature: Creature,
}

impl Occupant {
    pub const fn new(owner: PlayerId, creature: Creature) -> Self {
        Occupant { owner, creature }
    }
}

/// The 10x10 grid.
///
/// Uses a flat fixed-size array indexed by `Square::index` so every cell is an
/// independent value and the whole board is trivially copyable. A cell is
/// either empty or holds exactly one owned creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Occupant>; CELL_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Board::empty()
    }
}

impl Board {
    /// Creates a board with every cell empty.
    pub const fn empty() -> Self {
        Board {
            cells: [None; CELL_COUNT],
        }
    }

    /// Returns the occupant of a cell, if any.
    pub fn get(&self, square: Square) -> Option<Occupant> {
        self.cells[square.index()]
    }

    /// Returns true if the cell holds no creature.
    pub fn is_empty(&self, square: Square) -> bool {
        self.cells[square.index()].is_none()
    }

    /// Returns the owner of a cell, if occupied.
    pub fn owner(&self, square: Square) -> Option<PlayerId> {
        self.get(square).map(|o| o.owner)
    }

    /// Places a creature on the board. Returns false if the cell is already occupied.
    pub fn place(&mut self, square: Square, occupant: Occupant) -> bool {
        let idx = square.index();
        if self.cells[idx].is_some() {
            return false;
        }
        self.cells[idx] = Some(occupant);
        true
    }

    /// Overwrites a cell unconditionally.
    pub fn set(&mut self, square: Square, occupant: Option<Occupant>) {
        self.cells[square.index()] = occupant;
    }

    /// Empties a cell, returning whatever was there.
    pub fn clear(&mut self, square: Square) -> Option<Occupant> {
        self.cells[square.index()].take()
    }

    /// Number of creatures the player has on the board.
    pub fn count(&self, player: PlayerId) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, Some(o) if o.owner == player))
            .count()
    }

    /// Iterates the squares holding one of the player's creatures.
    pub fn squares_of(&self, player: PlayerId) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |sq| self.owner(*sq) == Some(player))
    }

    /// Iterates one row of cells, column 0 first.
    pub fn row(&self, row: usize) -> &[Option<Occupant>] {
        &self.cells[row * BOARD_SIZE..(row + 1) * BOARD_SIZE]
    }
}

/// Wire form of a single cell: `{"player": 0|1|2, "monster": "None"|kind}`.
#[derive(Serialize)]
struct CellView {
    player: u8,
    monster: &'static str,
}

impl From<Option<Occupant>> for CellView {
    fn from(cell: Option<Occupant>) -> Self {
        match cell {
            Some(o) => CellView {
                player: o.owner.number(),
                monster: o.creature.name(),
            },
            None => CellView {
                player: 0,
                monster: "None",
            },
        }
    }
}

/// Serializes as ten rows of ten cells.
impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows = serializer.serialize_seq(Some(BOARD_SIZE))?;
        for row in 0..BOARD_SIZE {
            let cells: Vec<CellView> = self.row(row).iter().map(|c| CellView::from(*c)).collect();
            rows.serialize_element(&cells)?;
        }
        rows.end()
    }
}
