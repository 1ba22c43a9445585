//! Read-only view of a game, as broadcast to clients after every accepted action.

use serde::Serialize;

use crate::board::{Board, Outcome, PlayerId};

/// Everything a client needs to render a game.
///
/// Serializes to
/// `{"board": [[{"player", "monster"}; 10]; 10], "currentPlayer", "initialPlacement", "winner", "round"}`
/// where `winner` is `null`, a player number, or `"draw"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub board: Board,
    pub current_player: PlayerId,
    pub initial_placement: bool,
    pub winner: Option<Outcome>,
    pub round: u32,
}

impl GameSnapshot {
    /// Renders the snapshot as a single JSON document.
    pub fn to_json(&self, pretty: bool) -> Result<String, serde_json::Error> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}
