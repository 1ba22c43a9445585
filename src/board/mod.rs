//! Board representation and game-state types.
//!
//! Contains the core data structures for players, creatures, coordinates,
//! and the grid itself.

pub mod creature;
pub mod player;
pub mod square;
pub mod state;

pub use creature::{Creature, ALL_CREATURES};
pub use player::{PlayerId, ALL_PLAYERS};
pub use square::{Square, BOARD_SIZE, CELL_COUNT};
pub use state::{Board, Occupant, Outcome, Phase};
