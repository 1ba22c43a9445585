//! Game rules.
//!
//! Pure functions over a `Board`: placement legality, movement geometry and
//! paths, combat, and turn/phase/win sequencing. `GameEngine` composes them.

pub mod combat;
pub mod error;
pub mod movement;
pub mod phase;
pub mod placement;

pub use combat::{fight, resolve, CombatResult, Engagement};
pub use error::{MoveViolation, RuleError};
pub use movement::{check_move, has_any_legal_move, is_geometric_move, path, MovePlan};
pub use phase::{
    choose_first_mover, detect_outcome, first_mover_candidates, next_turn, placement_complete,
};
pub use placement::{check_placement, populate_home_row, AUTO_PLACED, PLACEMENT_QUOTA};
