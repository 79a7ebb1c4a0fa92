//! Game state management.
//!
//! Owns the dice pool, score, level and selection, and runs the round
//! cycle: roll, pick two dice, bank the pair. Illegal commands are ignored
//! rather than reported; every command returns whether it changed anything.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::GameConfig;
use super::die::Die;
use super::layout::Layout;
use super::random::RandomSource;
use super::scoring::{ScoreBreakdown, ScoringTracker};
use super::store::LevelStore;

/// Dice in the pool at the start of every level.
pub const DICE_PER_LEVEL: usize = 7;

/// Score needed to clear level 1.
pub const BASE_TARGET: u64 = 100;

/// Factor by which the target grows each level.
pub const TARGET_GROWTH: f64 = 1.5;

/// Score needed to clear `level` (1-indexed).
pub fn level_target(level: u32) -> u64 {
    let exponent = level.saturating_sub(1) as i32;
    (BASE_TARGET as f64 * TARGET_GROWTH.powi(exponent)).ceil() as u64
}

/// Where the current round stands. Derived from the game fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// Level started, dice not rolled yet
    NotRolled,
    /// Rolled, nothing selected
    Rolled,
    /// One die selected
    Selecting,
    /// Two dice selected, pair can be banked
    ReadyToConfirm,
    /// Target unreachable, waiting for a restart
    GameOver,
}

impl RoundPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotRolled => "not_rolled",
            Self::Rolled => "rolled",
            Self::Selecting => "selecting",
            Self::ReadyToConfirm => "ready_to_confirm",
            Self::GameOver => "game_over",
        }
    }

    /// Check if only a restart can leave this phase.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GameOver)
    }
}

/// Player commands, as produced by click resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Roll,
    /// Toggle selection of the die at this pool index
    Toggle(usize),
    Confirm,
    Restart,
}

/// A single-player game session.
#[derive(Debug)]
pub struct GameState {
    config: GameConfig,
    layout: Layout,
    rng: Box<dyn RandomSource>,
    store: Box<dyn LevelStore>,

    /// Dice in play, in screen order
    dice: Vec<Die>,

    tracker: ScoringTracker,

    /// Score within the current level
    score: u64,

    /// Current level (1-indexed)
    level: u32,

    /// Whether the pool has been rolled since the level started
    has_rolled: bool,

    game_over: bool,

    /// Best level ever reached, persisted across games
    highest_level: u32,

    /// Most recently banked pair
    last_score: Option<ScoreBreakdown>,

    /// When the current game started
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl GameState {
    /// Create a game, reading the highest level from `store`.
    ///
    /// A store that fails to load counts as empty, and an invalid config is
    /// replaced by the defaults.
    pub fn new(
        config: GameConfig,
        rng: Box<dyn RandomSource>,
        store: Box<dyn LevelStore>,
    ) -> Self {
        let highest_level = match store.load_highest_level() {
            Ok(level) => level.unwrap_or(1).max(1),
            Err(e) => {
                log::warn!("Could not load highest level, starting from 1: {}", e);
                1
            }
        };

        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("Using default config: {}", e);
                GameConfig::default()
            }
        };

        let layout = Layout::new(config.layout.clone());
        let mut game = Self {
            config,
            layout,
            rng,
            store,
            dice: Vec::new(),
            tracker: ScoringTracker::new(),
            score: 0,
            level: 1,
            has_rolled: false,
            game_over: false,
            highest_level,
            last_score: None,
            started_at: chrono::Utc::now(),
        };
        game.fill_pool();
        game
    }

    /// Create a game with an entropy-seeded generator.
    pub fn with_store(config: GameConfig, store: Box<dyn LevelStore>) -> Self {
        Self::new(config, Box::new(StdRng::from_entropy()), store)
    }

    // Read access for the presentation adapter

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    pub fn tracker(&self) -> &ScoringTracker {
        &self.tracker
    }

    pub fn store(&self) -> &dyn LevelStore {
        self.store.as_ref()
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn highest_level(&self) -> u32 {
        self.highest_level
    }

    pub fn remaining_dice(&self) -> usize {
        self.dice.len()
    }

    pub fn has_rolled(&self) -> bool {
        self.has_rolled
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn last_score(&self) -> Option<ScoreBreakdown> {
        self.last_score
    }

    pub fn selected_count(&self) -> usize {
        self.dice.iter().filter(|d| d.is_selected()).count()
    }

    /// Pool indices of the selected dice.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.dice
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_selected())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_rolling(&self) -> bool {
        self.dice.iter().any(|d| d.is_rolling())
    }

    pub fn current_level_target(&self) -> u64 {
        level_target(self.level)
    }

    pub fn phase(&self) -> RoundPhase {
        if self.game_over {
            return RoundPhase::GameOver;
        }
        if !self.has_rolled {
            return RoundPhase::NotRolled;
        }
        match self.selected_count() {
            0 => RoundPhase::Rolled,
            1 => RoundPhase::Selecting,
            _ => RoundPhase::ReadyToConfirm,
        }
    }

    /// Whether the roll button should look enabled. Re-rolls are still accepted.
    pub fn roll_enabled(&self) -> bool {
        !self.has_rolled && !self.game_over
    }

    pub fn confirm_enabled(&self) -> bool {
        !self.game_over && self.selected_count() == 2
    }

    // Commands

    /// Roll every die in the pool.
    pub fn roll_all(&mut self, now: Instant) -> bool {
        if self.game_over {
            log::debug!("Ignoring roll: game over");
            return false;
        }

        for die in &mut self.dice {
            die.roll(now, self.rng.as_mut());
        }
        self.has_rolled = true;
        log::debug!("Rolled {} dice at level {}", self.dice.len(), self.level);
        true
    }

    /// Toggle selection of the die at `index`.
    ///
    /// At most two dice can be selected; a third is refused until one of the
    /// two is released.
    pub fn select_die(&mut self, index: usize) -> bool {
        if self.game_over || !self.has_rolled {
            log::debug!("Ignoring selection of die {}: not selectable now", index);
            return false;
        }

        let selected = self.selected_count();
        let Some(die) = self.dice.get_mut(index) else {
            log::debug!("Ignoring selection of die {}: no such die", index);
            return false;
        };

        if die.is_selected() || selected < 2 {
            die.toggle_selection();
            true
        } else {
            log::debug!("Ignoring selection of die {}: two already selected", index);
            false
        }
    }

    /// Bank the selected pair.
    ///
    /// Reaching the level target advances the level, even if the pool is down
    /// to one die. Otherwise a single remaining die ends the game.
    pub fn confirm_selection(&mut self) -> Option<ScoreBreakdown> {
        if self.game_over {
            log::debug!("Ignoring confirm: game over");
            return None;
        }

        let values: Vec<u32> = self
            .dice
            .iter()
            .filter(|d| d.is_selected())
            .map(|d| d.value())
            .collect();
        let &[first, second] = values.as_slice() else {
            log::debug!("Ignoring confirm: {} dice selected", values.len());
            return None;
        };

        let result = self.tracker.score_pair(first, second);
        self.score += result.total;
        self.last_score = Some(result);
        self.dice.retain(|d| !d.is_selected());

        log::info!(
            "Rolled {} for {} points ({} from numbers, {} from combination)",
            result.sum,
            result.total,
            result.number_points,
            result.combination_points
        );

        let target = self.current_level_target();
        if self.score >= target {
            self.advance_level();
            return Some(result);
        }

        if self.dice.len() == 1 {
            self.game_over = true;
            log::info!(
                "Game over at level {} with {} of {} points",
                self.level,
                self.score,
                target
            );
        }

        self.relayout_pool();
        Some(result)
    }

    /// Move to the next level with a fresh pool. Scoring history carries over.
    pub fn advance_level(&mut self) {
        self.level += 1;
        log::info!("Advanced to level {}", self.level);

        if self.level > self.highest_level {
            self.highest_level = self.level;
            log::info!("New highest level {}", self.level);
            if let Err(e) = self.store.save_highest_level(self.level) {
                log::warn!("Could not save highest level {}: {}", self.level, e);
            }
        }

        self.score = 0;
        self.fill_pool();
        self.has_rolled = false;
    }

    /// Start a new game. The highest level is kept.
    pub fn reset(&mut self) {
        self.tracker.reset();
        self.score = 0;
        self.level = 1;
        self.has_rolled = false;
        self.game_over = false;
        self.last_score = None;
        self.started_at = chrono::Utc::now();
        self.fill_pool();
        log::debug!("Game reset");
    }

    /// Advance roll animations. Returns true while any die is still rolling.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut rolling = false;
        for die in &mut self.dice {
            rolling |= die.tick(now, self.rng.as_mut());
        }
        rolling
    }

    /// Run a command. Returns whether it changed anything.
    pub fn apply(&mut self, command: Command, now: Instant) -> bool {
        match command {
            Command::Roll => self.roll_all(now),
            Command::Toggle(index) => self.select_die(index),
            Command::Confirm => self.confirm_selection().is_some(),
            Command::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Handle a click at surface coordinates.
    pub fn click(&mut self, x: f64, y: f64, now: Instant) -> bool {
        match self.layout.resolve_click(self, x, y) {
            Some(command) => self.apply(command, now),
            None => false,
        }
    }

    /// Replace the pool with new dice at their initial face.
    fn fill_pool(&mut self) {
        let sides = self.config.die_sides;
        let duration = self.config.roll_duration();
        self.dice = self
            .layout
            .die_slots(DICE_PER_LEVEL)
            .into_iter()
            .map(|slot| Die::new(sides).with_roll_duration(duration).with_bounds(slot))
            .collect();
    }

    /// Re-centre the surviving dice, keeping their faces and order.
    fn relayout_pool(&mut self) {
        let slots = self.layout.die_slots(self.dice.len());
        for (die, slot) in self.dice.iter_mut().zip(slots) {
            die.settle();
            die.bounds = slot;
        }
    }

    /// Convert full game state to JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        let dice: Vec<serde_json::Value> = self.dice.iter().map(|d| d.to_json()).collect();

        let numbers: Vec<serde_json::Value> = self
            .tracker
            .number_preview(self.config.die_sides)
            .iter()
            .map(|row| serde_json::json!({"value": row.key, "points": row.points()}))
            .collect();

        let combinations: Vec<serde_json::Value> = self
            .tracker
            .combination_preview()
            .iter()
            .map(|row| {
                serde_json::json!({
                    "sum": row.key,
                    "base_points": row.base_points,
                    "multiplier": row.multiplier
                })
            })
            .collect();

        serde_json::json!({
            "dice": dice,
            "remaining_dice": self.dice.len(),
            "score": self.score,
            "target": self.current_level_target(),
            "level": self.level,
            "highest_level": self.highest_level,
            "phase": self.phase().as_str(),
            "has_rolled": self.has_rolled,
            "game_over": self.game_over,
            "can_roll": self.roll_enabled(),
            "can_confirm": self.confirm_enabled(),
            "number_preview": numbers,
            "combination_preview": combinations,
            "last_score": self.last_score.map(|s| s.to_json()),
            "started_at": self.started_at.to_rfc3339()
        })
    }
}
