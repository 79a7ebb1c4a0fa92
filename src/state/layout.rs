//! Screen geometry.
//!
//! Places dice and buttons on the drawing surface and resolves raw clicks
//! into game commands. Nothing here draws; the presentation adapter reads
//! these rectangles and renders them however it likes.

use serde::{Deserialize, Serialize};

use super::game::{Command, GameState};

/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square with its top-left corner at `(x, y)`.
    pub fn square(x: f64, y: f64, size: f64) -> Self {
        Self::new(x, y, size, size)
    }

    /// Hit test, inclusive on every edge.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "x": self.x,
            "y": self.y,
            "width": self.width,
            "height": self.height
        })
    }
}

/// Surface and widget dimensions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub die_size: f64,
    pub die_spacing: f64,
    pub button_width: f64,
    pub button_height: f64,
    pub button_spacing: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 800.0,
            canvas_height: 600.0,
            die_size: 60.0,
            die_spacing: 20.0,
            button_width: 120.0,
            button_height: 40.0,
            button_spacing: 20.0,
        }
    }
}

/// Computes widget positions from a [`LayoutConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    config: LayoutConfig,
}

impl Layout {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Bounding squares for a row of `count` dice, centred horizontally.
    pub fn die_slots(&self, count: usize) -> Vec<Rect> {
        let c = &self.config;
        if count == 0 {
            return Vec::new();
        }
        let n = count as f64;
        let total_width = c.die_size * n + c.die_spacing * (n - 1.0);
        let start_x = (c.canvas_width - total_width) / 2.0;
        let y = (c.canvas_height - c.die_size) / 3.0 - 40.0;

        (0..count)
            .map(|i| Rect::square(start_x + i as f64 * (c.die_size + c.die_spacing), y, c.die_size))
            .collect()
    }

    fn button_row_y(&self) -> f64 {
        self.config.canvas_height * 2.0 / 3.0 - 160.0
    }

    pub fn roll_button(&self) -> Rect {
        let c = &self.config;
        let x = (c.canvas_width - (c.button_width * 2.0 + c.button_spacing)) / 2.0;
        Rect::new(x, self.button_row_y(), c.button_width, c.button_height)
    }

    pub fn select_button(&self) -> Rect {
        let c = &self.config;
        let roll = self.roll_button();
        Rect::new(
            roll.x + c.button_width + c.button_spacing,
            roll.y,
            c.button_width,
            c.button_height,
        )
    }

    /// Play-again button on the game-over overlay.
    ///
    /// Only tells the adapter where to draw it; once the game is over
    /// [`Layout::resolve_click`] restarts on any click.
    pub fn restart_button(&self) -> Rect {
        let c = &self.config;
        Rect::new(
            (c.canvas_width - c.button_width) / 2.0,
            c.canvas_height / 2.0 + 70.0,
            c.button_width,
            c.button_height,
        )
    }

    /// Map a click to the command it triggers, if any.
    ///
    /// Once the game is over every click restarts it.
    pub fn resolve_click(&self, game: &GameState, x: f64, y: f64) -> Option<Command> {
        if game.is_game_over() {
            return Some(Command::Restart);
        }

        if self.roll_button().contains(x, y) {
            return Some(Command::Roll);
        }

        if self.select_button().contains(x, y) && game.selected_count() == 2 {
            return Some(Command::Confirm);
        }

        if !game.has_rolled() {
            return None;
        }

        game.dice()
            .iter()
            .position(|die| die.contains_point(x, y))
            .map(Command::Toggle)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect::square(10.0, 20.0, 60.0);
        assert!(r.contains(10.0, 20.0));
        assert!(r.contains(70.0, 80.0));
        assert!(r.contains(40.0, 50.0));
        assert!(!r.contains(9.9, 50.0));
        assert!(!r.contains(40.0, 80.1));
    }

    #[test]
    fn test_seven_dice_are_centred() {
        let layout = Layout::default();
        let slots = layout.die_slots(7);

        // 7 * 60 + 6 * 20 = 540, so the row starts at (800 - 540) / 2
        assert_eq!(slots.len(), 7);
        assert_eq!(slots[0], Rect::square(130.0, 140.0, 60.0));
        assert_eq!(slots[6].x, 130.0 + 6.0 * 80.0);
        assert!(slots.iter().all(|r| r.y == 140.0));
    }

    #[test]
    fn test_single_die_slot() {
        let slots = Layout::default().die_slots(1);
        assert_eq!(slots, vec![Rect::square(370.0, 140.0, 60.0)]);
        assert!(Layout::default().die_slots(0).is_empty());
    }

    #[test]
    fn test_button_positions() {
        let layout = Layout::default();
        assert_eq!(layout.roll_button(), Rect::new(270.0, 240.0, 120.0, 40.0));
        assert_eq!(layout.select_button(), Rect::new(410.0, 240.0, 120.0, 40.0));
        assert_eq!(layout.restart_button(), Rect::new(340.0, 370.0, 120.0, 40.0));
    }

    #[test]
    fn test_restart_button_not_special_in_resolution() {
        use crate::state::{GameConfig, GameState, MemoryStore, SequenceRandom};

        let game = GameState::new(
            GameConfig::default(),
            Box::new(SequenceRandom::new(vec![1])),
            Box::new(MemoryStore::new()),
        );
        let layout = Layout::default();
        let button = layout.restart_button();

        // Mid-game the overlay button area is just empty surface
        assert_eq!(layout.resolve_click(&game, button.x + 1.0, button.y + 1.0), None);
    }
}
