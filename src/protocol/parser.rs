//! Command parser for the line protocol.
//!
//! Parses incoming text commands into structured `Command` variants that the
//! session loop can dispatch on.

use log::warn;

use crate::board::{Creature, PlayerId};
use crate::registry::GameId;

/// A parsed client-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Create a new game and reply with its id.
    NewGame,

    /// Restore a game to a freshly set-up state.
    Reset { game: GameId },

    /// Request the current snapshot of a game.
    Board { game: GameId },

    /// `place <game> <player> <row> <column> <creature>`
    Place {
        game: GameId,
        player: PlayerId,
        row: usize,
        column: usize,
        creature: Creature,
    },

    /// `move <game> <player> <row> <column> <row> <column>`
    Move {
        game: GameId,
        player: PlayerId,
        from: (usize, usize),
        to: (usize, usize),
    },

    /// `endturn <game> <player>`
    EndTurn { game: GameId, player: PlayerId },

    /// Load a position (in notation) into an existing game.
    Position { game: GameId, notation: String },

    /// Request the notation string of a game.
    Notation { game: GameId },

    /// Request win/loss tallies.
    Stats,

    /// Request the number of games created.
    GamesPlayed,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "newgame" => Some(Command::NewGame),
        "stats" => Some(Command::Stats),
        "gamesplayed" => Some(Command::GamesPlayed),
        "quit" => Some(Command::Quit),

        "reset" => parse_game(&tokens).map(|game| Command::Reset { game }),
        "board" => parse_game(&tokens).map(|game| Command::Board { game }),
        "notation" => parse_game(&tokens).map(|game| Command::Notation { game }),
        "place" => parse_place(&tokens),
        "move" => parse_move(&tokens),
        "endturn" => parse_endturn(&tokens),
        "position" => parse_position(&tokens),

        other => {
            warn!("unknown command: {}", other);
            None
        }
    }
}

/// Checks the token count for `command`, logging the expected usage on mismatch.
fn expect_args(tokens: &[&str], count: usize, usage: &str) -> Option<()> {
    if tokens.len() != count + 1 {
        warn!("malformed {}: expected '{}'", tokens[0], usage);
        return None;
    }
    Some(())
}

fn parse_game_id(token: &str) -> Option<GameId> {
    match token.parse::<usize>() {
        Ok(id) => Some(GameId(id)),
        Err(_) => {
            warn!("invalid game id: '{}'", token);
            None
        }
    }
}

fn parse_player(token: &str) -> Option<PlayerId> {
    match token.parse::<u8>().ok().and_then(PlayerId::from_number) {
        Some(player) => Some(player),
        None => {
            warn!("invalid player: '{}'", token);
            None
        }
    }
}

fn parse_coordinate(token: &str) -> Option<usize> {
    match token.parse::<usize>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("invalid coordinate: '{}'", token);
            None
        }
    }
}

/// Parses the `<command> <game>` form.
fn parse_game(tokens: &[&str]) -> Option<GameId> {
    expect_args(tokens, 1, &format!("{} <game>", tokens[0]))?;
    parse_game_id(tokens[1])
}

/// Parses `place <game> <player> <row> <column> <creature>`.
fn parse_place(tokens: &[&str]) -> Option<Command> {
    expect_args(tokens, 5, "place <game> <player> <row> <column> <creature>")?;
    let game = parse_game_id(tokens[1])?;
    let player = parse_player(tokens[2])?;
    let row = parse_coordinate(tokens[3])?;
    let column = parse_coordinate(tokens[4])?;
    let creature = match Creature::from_name(tokens[5]) {
        Some(c) => c,
        None => {
            warn!("unknown creature: '{}'", tokens[5]);
            return None;
        }
    };
    Some(Command::Place {
        game,
        player,
        row,
        column,
        creature,
    })
}

/// Parses `move <game> <player> <row> <column> <row> <column>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    expect_args(
        tokens,
        6,
        "move <game> <player> <start_row> <start_column> <end_row> <end_column>",
    )?;
    let game = parse_game_id(tokens[1])?;
    let player = parse_player(tokens[2])?;
    let from = (parse_coordinate(tokens[3])?, parse_coordinate(tokens[4])?);
    let to = (parse_coordinate(tokens[5])?, parse_coordinate(tokens[6])?);
    Some(Command::Move {
        game,
        player,
        from,
        to,
    })
}

/// Parses `endturn <game> <player>`.
fn parse_endturn(tokens: &[&str]) -> Option<Command> {
    expect_args(tokens, 2, "endturn <game> <player>")?;
    let game = parse_game_id(tokens[1])?;
    let player = parse_player(tokens[2])?;
    Some(Command::EndTurn { game, player })
}

/// Parses `position <game> <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    expect_args(tokens, 2, "position <game> <notation>")?;
    let game = parse_game_id(tokens[1])?;
    // Notation is a single token (no spaces)
    let notation = tokens[2].to_string();
    Some(Command::Position { game, notation })
}
