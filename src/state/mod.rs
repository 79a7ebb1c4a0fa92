//! State management module for Pair Dice.
//!
//! This module provides the core game types and their collaborators:
//!
//! - `die` - A single die and its roll animation
//! - `scoring` - Face and combination scoring with repetition bonuses
//! - `game` - The game session: pool, selection, levels, game over
//! - `layout` - Where dice and buttons sit, and which click hits what
//! - `random` - Random sources for die faces
//! - `store` - Persistence of the highest level reached
//! - `config` - Injected configuration
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                            GameState                             │
//! │                                                                  │
//! │  ┌──────────────┐  ┌─────────────────┐  ┌──────────────────┐     │
//! │  │  Vec<Die>    │  │ ScoringTracker  │  │     Layout       │     │
//! │  │              │  │                 │  │                  │     │
//! │  │ value, sides │  │ face → plays    │  │ die slots        │     │
//! │  │ selected     │  │ sum → plays     │  │ buttons          │     │
//! │  │ roll timer   │  │                 │  │ click → Command  │     │
//! │  └──────────────┘  └─────────────────┘  └──────────────────┘     │
//! │                                                                  │
//! │  ┌─────────────────────────┐  ┌──────────────────────────────┐   │
//! │  │ Box<dyn RandomSource>   │  │ Box<dyn LevelStore>          │   │
//! │  └─────────────────────────┘  └──────────────────────────────┘   │
//! │                                                                  │
//! │  NotRolled ──▶ Rolled ──▶ Selecting ──▶ ReadyToConfirm           │
//! │      ▲           ▲                           │                   │
//! │      │ level up  └──────── confirm ──────────┤                   │
//! │      └───────────────────────────────────────┤                   │
//! │                                              ▼                   │
//! │                           restart ◀──── GameOver                 │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use pairdice_state::state::{GameConfig, GameState, JsonFileStore};
//!
//! let mut game = GameState::with_store(
//!     GameConfig::default(),
//!     Box::new(JsonFileStore::default_location()),
//! );
//!
//! // Every frame
//! game.tick(Instant::now());
//!
//! // On click
//! game.click(x, y, Instant::now());
//! ```

pub mod config;
pub mod die;
pub mod game;
pub mod layout;
pub mod random;
pub mod scoring;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig, MAX_DIE_SIDES};
pub use die::{Die, DEFAULT_ROLL_DURATION, DEFAULT_SIDES};
pub use game::{level_target, Command, GameState, RoundPhase, BASE_TARGET, DICE_PER_LEVEL};
pub use layout::{Layout, LayoutConfig, Rect};
pub use random::{RandomSource, SequenceRandom};
pub use scoring::{
    combination_base_points, PreviewRow, ScoreBreakdown, ScoringTracker, BASE_NUMBER_POINTS,
};
pub use store::{JsonFileStore, LevelRecord, LevelStore, MemoryStore, StoreError};
