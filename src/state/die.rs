//! A single die.
//!
//! Rolling is a timed animation: [`Die::roll`] starts the timeline and
//! [`Die::tick`] advances it. Every tick before the deadline shows a new
//! random face; the first tick at or past the deadline picks the final face.

use std::time::{Duration, Instant};

use super::layout::Rect;
use super::random::RandomSource;

/// Default number of sides.
pub const DEFAULT_SIDES: u32 = 6;

/// Default length of the roll animation (1 second).
pub const DEFAULT_ROLL_DURATION: Duration = Duration::from_millis(1000);

/// Face shown by a freshly created die.
pub const INITIAL_FACE: u32 = 1;

#[derive(Debug, Clone, PartialEq)]
pub struct Die {
    sides: u32,
    value: u32,
    selected: bool,
    /// Start of the in-flight roll, if any
    roll_started: Option<Instant>,
    roll_duration: Duration,
    /// On-screen bounding square
    pub bounds: Rect,
}

impl Die {
    /// Create a die showing [`INITIAL_FACE`].
    ///
    /// A zero side count is treated as a one-sided die.
    pub fn new(sides: u32) -> Self {
        Self {
            sides: sides.max(1),
            value: INITIAL_FACE,
            selected: false,
            roll_started: None,
            roll_duration: DEFAULT_ROLL_DURATION,
            bounds: Rect::default(),
        }
    }

    pub fn with_roll_duration(mut self, duration: Duration) -> Self {
        self.roll_duration = duration;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_rolling(&self) -> bool {
        self.roll_started.is_some()
    }

    pub fn roll_duration(&self) -> Duration {
        self.roll_duration
    }

    /// Start rolling. Ignored while a roll is already in flight.
    ///
    /// The first animation frame is drawn immediately.
    pub fn roll(&mut self, now: Instant, rng: &mut dyn RandomSource) {
        if self.is_rolling() {
            return;
        }
        self.roll_started = Some(now);
        self.tick(now, rng);
    }

    /// Advance the roll animation. Returns true while still rolling.
    pub fn tick(&mut self, now: Instant, rng: &mut dyn RandomSource) -> bool {
        let Some(started) = self.roll_started else {
            return false;
        };

        self.value = rng.uniform_int(1, self.sides);
        if now.saturating_duration_since(started) >= self.roll_duration {
            self.roll_started = None;
        }
        self.is_rolling()
    }

    /// Stop any in-flight roll, keeping the face currently shown.
    pub fn settle(&mut self) {
        self.roll_started = None;
    }

    /// Flip the selection flag. Callers enforce how many may be selected.
    pub fn toggle_selection(&mut self) {
        self.selected = !self.selected;
    }

    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "sides": self.sides,
            "value": self.value,
            "is_selected": self.selected,
            "is_rolling": self.is_rolling(),
            "bounds": self.bounds.to_json()
        })
    }
}

impl Default for Die {
    fn default() -> Self {
        Self::new(DEFAULT_SIDES)
    }
}
