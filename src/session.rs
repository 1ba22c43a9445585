//! Line-protocol session.
//!
//! Dispatches parsed commands against a `GameRegistry` and writes one
//! response line per command. Successful mutations answer with the game's
//! snapshot; rejected ones answer with `error <CODE> <message>` only.

use std::io::{self, Write};

use log::{debug, warn};
use serde::Serialize;

use crate::config::SessionConfig;
use crate::protocol::{encode_position, parse_position, Command, GameSnapshot};
use crate::registry::{GameId, GameRegistry, SessionError};

/// Protocol state for one client connection.
#[derive(Debug)]
pub struct Session {
    registry: GameRegistry,
    config: SessionConfig,
}

impl Default for Session {
    fn default() -> Self {
        Session::new(SessionConfig::default())
    }
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session {
            registry: GameRegistry::new(config.seed),
            config,
        }
    }

    pub fn registry(&self) -> &GameRegistry {
        &self.registry
    }

    /// Handles one command. Returns `Ok(false)` when the session should end.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<bool> {
        debug!("handling {:?}", command);
        match command {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::NewGame => {
                let id = self.registry.create();
                writeln!(out, "game {}", id)?;
            }
            Command::Board { game } => {
                let result = self.registry.game_board(game);
                self.respond(out, game, result)?;
            }
            Command::Reset { game } => {
                let result = self.registry.reset(game);
                self.respond(out, game, result)?;
            }
            Command::Place {
                game,
                player,
                row,
                column,
                creature,
            } => {
                let result = self.registry.add_monster(game, player, row, column, creature);
                self.respond(out, game, result)?;
            }
            Command::Move {
                game,
                player,
                from,
                to,
            } => {
                let result = self.registry.move_monster(game, player, from, to);
                self.respond(out, game, result)?;
            }
            Command::EndTurn { game, player } => {
                let result = self.registry.end_turn(game, player);
                self.respond(out, game, result)?;
            }
            Command::Position { game, notation } => {
                let result = parse_position(&notation)
                    .map_err(SessionError::from)
                    .and_then(|position| self.registry.load_position(game, &position));
                self.respond(out, game, result)?;
            }
            Command::Notation { game } => match self.registry.position(game) {
                Ok(position) => writeln!(out, "position {}", encode_position(&position))?,
                Err(e) => write_error(out, game, &e)?,
            },
            Command::Stats => {
                let body = self.to_json(&self.registry.stats())?;
                writeln!(out, "stats {}", body)?;
            }
            Command::GamesPlayed => {
                writeln!(out, "gamesplayed {}", self.registry.games_played())?;
            }
            Command::Quit => {
                out.flush()?;
                return Ok(false);
            }
        }
        out.flush()?;
        Ok(true)
    }

    fn respond<W: Write>(
        &self,
        out: &mut W,
        game: GameId,
        result: Result<GameSnapshot, SessionError>,
    ) -> io::Result<()> {
        match result {
            Ok(snapshot) => {
                let body = self.to_json(&snapshot)?;
                writeln!(out, "board {}", body)
            }
            Err(e) => write_error(out, game, &e),
        }
    }

    fn to_json<T: Serialize>(&self, value: &T) -> io::Result<String> {
        let body = if self.config.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        };
        body.map_err(io::Error::from)
    }
}

fn write_error<W: Write>(out: &mut W, game: GameId, error: &SessionError) -> io::Result<()> {
    warn!("game {}: rejected: {}", game, error);
    writeln!(out, "error {} {}", error.code(), error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::parse_command;

    /// Feeds `lines` through a seeded session and returns its output lines.
    fn run(lines: &[&str]) -> Vec<String> {
        let mut session = Session::new(SessionConfig::default().with_seed(11));
        let mut out = Vec::new();
        for line in lines {
            if let Some(command) = parse_command(line) {
                if !session.handle(command, &mut out).unwrap() {
                    break;
                }
            }
        }
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn isready_and_newgame() {
        assert_eq!(run(&["isready", "newgame", "newgame"]), ["readyok", "game 0", "game 1"]);
    }

    #[test]
    fn board_is_json_snapshot() {
        let lines = run(&["newgame", "board 0"]);
        let body = lines[1].strip_prefix("board ").unwrap();
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["currentPlayer"], 1);
        assert_eq!(value["initialPlacement"], true);
        assert_eq!(value["winner"], serde_json::Value::Null);
        assert_eq!(value["round"], 0);
        assert_eq!(value["board"].as_array().unwrap().len(), 10);
    }

    #[test]
    fn rejected_action_reports_code_only() {
        let lines = run(&["newgame", "place 0 2 6 6 Ghost"]);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("error TURN_VIOLATION "));
    }

    #[test]
    fn unknown_game() {
        let lines = run(&["board 4"]);
        assert_eq!(lines, ["error GAME_NOT_FOUND game 4 not found"]);
    }

    #[test]
    fn position_then_notation() {
        let notation = "m2.33.4.-/3V6/10/2w7/10/4Vw4/10/10/1g8/10/9G";
        let lines = run(&[
            "newgame",
            format!("position 0 {}", notation).as_str(),
            "notation 0",
        ]);
        assert!(lines[1].starts_with("board "));
        assert_eq!(lines[2], format!("position {}", notation));
    }

    #[test]
    fn malformed_position_rejected() {
        let lines = run(&["newgame", "position 0 m1.33.0.-/10"]);
        assert!(lines[1].starts_with("error INVALID_NOTATION "));
    }

    #[test]
    fn oversized_rank_reports_error_and_session_continues() {
        let lines = run(&[
            "newgame",
            "position 0 p1.00.0.-/99999999999999999999999V/10/10/10/10/10/10/10/10/10",
            "position 0 p1.33.0.-/V9/10/10/10/10/10/10/10/10/v9",
            "isready",
        ]);
        assert!(lines[1].starts_with("error INVALID_NOTATION "));
        assert!(lines[2].starts_with("error INVALID_NOTATION "));
        assert_eq!(lines[3], "readyok");
    }

    #[test]
    fn stats_and_games_played() {
        let lines = run(&[
            "newgame",
            "position 0 m1.33.3.-/V9/10/10/10/10/10/10/10/10/10",
            "endturn 0 1",
            "stats",
            "gamesplayed",
        ]);
        let body = lines[3].strip_prefix("stats ").unwrap();
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["1"]["wins"], 1);
        assert_eq!(value["2"]["losses"], 1);
        assert_eq!(value["draws"], 0);
        assert_eq!(lines[4], "gamesplayed 1");
    }

    #[test]
    fn quit_stops_processing() {
        assert_eq!(run(&["isready", "quit", "isready"]), ["readyok"]);
    }

    #[test]
    fn pretty_output_spans_lines() {
        let mut session = Session::new(SessionConfig::default().with_seed(1).with_pretty(true));
        let mut out = Vec::new();
        session.handle(Command::Stats, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("stats {\n"));
    }
}
