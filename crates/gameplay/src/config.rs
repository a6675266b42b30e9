use bevy::prelude::*;
use serde::Deserialize;

/// Display coordinate of the tray slot.
pub const TRAY_POSITION: Vec2 = Vec2::new(550.0, 400.0);
/// Display coordinate of the bottom card of the stack fan.
pub const STACK_ORIGIN: Vec2 = Vec2::new(250.0, 400.0);
/// Horizontal offset between consecutive stack cards.
pub const STACK_SPACING: f32 = 30.0;
/// Points awarded for every playfield card matched onto the tray.
pub const MATCH_POINTS: u32 = 10;
/// 0 means the undo history is unbounded.
pub const DEFAULT_MAX_UNDO_STEPS: usize = 0;

/// Fixed display coordinates the engine assigns to cards outside the playfield.
///
/// Playfield cards keep the coordinates their level gave them; the tray and
/// the stack fan are laid out from these values by the generator and again by
/// the undo engine when a card is returned to the stack.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct TableLayout {
    pub tray_position: Vec2,
    pub stack_origin: Vec2,
    pub stack_spacing: f32,
}

impl Default for TableLayout {
    fn default() -> Self {
        Self {
            tray_position: TRAY_POSITION,
            stack_origin: STACK_ORIGIN,
            stack_spacing: STACK_SPACING,
        }
    }
}

impl TableLayout {
    /// Coordinate of the stack card at `index` (0 = bottom).
    pub fn stack_slot(&self, index: usize) -> Vec2 {
        self.stack_origin + Vec2::new(index as f32 * self.stack_spacing, 0.0)
    }
}

/// Tunables for a game session.
///
/// Inserted before `GameplayPlugin` to override the defaults; the controller
/// reads it once when it is created.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub match_points: u32,
    pub max_undo_steps: usize,
    pub layout: TableLayout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            match_points: MATCH_POINTS,
            max_undo_steps: DEFAULT_MAX_UNDO_STEPS,
            layout: TableLayout::default(),
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_slots_fan_out_horizontally() {
        let layout = TableLayout::default();
        assert_eq!(layout.stack_slot(0), STACK_ORIGIN);
        assert_eq!(layout.stack_slot(2), Vec2::new(310.0, 400.0));
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "max_undo_steps": 5 }"#).unwrap();
        assert_eq!(config.max_undo_steps, 5);
        assert_eq!(config.match_points, MATCH_POINTS);
        assert_eq!(config.layout, TableLayout::default());
    }

    #[test]
    fn layout_coordinates_parse_from_arrays() {
        let config =
            GameConfig::from_json_str(r#"{ "layout": { "tray_position": [10.0, 20.0] } }"#)
                .unwrap();
        assert_eq!(config.layout.tray_position, Vec2::new(10.0, 20.0));
        assert_eq!(config.layout.stack_origin, STACK_ORIGIN);
    }
}
