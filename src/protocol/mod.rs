//! Wire-facing formats.
//!
//! This module implements the JSON game snapshot broadcast to clients, the
//! compact position notation, and the command parser for the line protocol.

pub mod notation;
pub mod parser;
pub mod snapshot;

pub use notation::{encode_position, parse_position, NotationError, Position};
pub use parser::{parse_command, Command};
pub use snapshot::GameSnapshot;
