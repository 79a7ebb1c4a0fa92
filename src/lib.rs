//! Pair Dice State Library
//!
//! This crate provides the game engine for Pair Dice, a single-player
//! dice game: roll a pool of seven dice, bank two at a time, and reach the
//! level's score target before the pool runs down to a single die.
//!
//! # Overview
//!
//! The state module provides:
//!
//! - **Dice** - Faces, selection, and a tick-driven roll animation.
//!
//! - **Scoring** - Each face and each pair sum pays more every time it is
//!   played again in the same game.
//!
//! - **Game** - Pool lifecycle, two-dice selection, level targets that grow
//!   by half each level, and game-over detection.
//!
//! - **Layout** - Geometry of dice and buttons, and click resolution.
//!
//! # Design Principles
//!
//! 1. **Illegal commands are no-ops** - The game is driven by clicks, so a
//!    command that does not apply is ignored and reported as `false`/`None`.
//!
//! 2. **Collaborators are injected** - Randomness, persistence and
//!    configuration are passed in; nothing reads global state.
//!
//! 3. **No rendering or scheduling** - The caller draws from the read
//!    accessors or `to_json()` and drives animation with `tick(now)`.
//!
//! # Example
//!
//! ```rust
//! use std::time::Instant;
//! use pairdice_state::state::{GameConfig, GameState, MemoryStore, SequenceRandom};
//!
//! let config = GameConfig { roll_duration_ms: 0, ..GameConfig::default() };
//! let rolls = SequenceRandom::new(vec![3, 4, 1, 2, 5, 6, 6]);
//! let mut game = GameState::new(config, Box::new(rolls), Box::new(MemoryStore::new()));
//!
//! game.roll_all(Instant::now());
//! game.select_die(0);
//! game.select_die(1);
//!
//! let banked = game.confirm_selection().unwrap();
//! assert_eq!(banked.total, 30);
//! assert_eq!(game.score(), 30);
//! assert_eq!(game.remaining_dice(), 5);
//! ```

pub mod state;

// Re-export everything from state module at crate root
pub use state::*;
