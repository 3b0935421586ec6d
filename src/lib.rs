//! This crate implements the rules of [Jungle](https://en.wikipedia.org/wiki/Jungle_(board_game))
//! (Dou Shou Qi), a two-player territorial capture game played on a 9x7 board with
//! terrain-dependent movement (water, dens, traps) and rank-based capture. It provides structs and
//! enums that encapsulate the game data and logic needed to build clients, but deliberately does
//! not include any rendering, persistence or interactive loop of its own.
//!
//! # Getting started
//!
//! The central struct is [`game::Game`], which owns the board, both players and the move history,
//! and exposes the engine's three commands:
//!
//! - [`game::Game::execute_play`]: validate and apply a move without spending the turn.
//! - [`game::Game::confirm_turn`]: spend the turn, handing play to the other side.
//! - [`game::Game::undo_play`]: revert the most recent move, subject to each player's
//!   bounded undo allowance.
//!
//! Splitting move execution from turn confirmation lets a host application offer the player a
//! look at the result (including any capture) before they commit, and an undo if they change
//! their mind.
//!
//! The pure rules live in [`game::logic`], which validates plays against a [`board::state::Board`]
//! without mutating anything. Terrain (the river, the dens, the traps) is a fixed property of the
//! board described by [`board::geometry`].
//!
//! # Persistence
//!
//! A running game can be reduced to a [`snapshot::Snapshot`] (which serialises with serde) and
//! later reconstructed with [`game::Game::from_snapshot`]. Executed moves are exposed as
//! [`record::LogEntry`] values whose `Display`/`FromStr` forms define a line-based record format
//! a host can write out and replay.

/// Errors used elsewhere in the crate.
pub mod error;

/// Code relating to board squares and coordinates.
pub mod tiles;

/// Code relating to game pieces: the eight animals, their ranks and capabilities.
pub mod pieces;

/// Code relating to "plays" (ie, game moves).
pub mod play;

/// Code relating to the board, including terrain geometry and piece placement.
pub mod board;

/// Move history with bounded undo, and the move-log line format.
pub mod record;

/// Player identity and piece rosters.
pub mod player;

/// Code for implementing a game, including game logic and state.
pub mod game;

/// A serialisable snapshot of a running game.
pub mod snapshot;

/// The standard starting position.
pub mod preset;
