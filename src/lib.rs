//! Grimgrid rules engine library.
//!
//! Exposes the board model, rule functions, the per-game engine, the game
//! registry and the line protocol for use by tests and the binary.

pub mod board;
pub mod config;
pub mod game;
pub mod protocol;
pub mod registry;
pub mod rules;
pub mod session;

pub use game::GameEngine;
pub use registry::{GameId, GameRegistry, SessionError};
