//! Sources of [`LevelConfig`] values: JSON text, files, and the built-in levels.

use std::path::Path;

use bevy::prelude::*;

use crate::card::{Rank, Suit};

use super::config::{CardConfig, LevelConfig};
use super::error::LevelError;

/// Id of the built-in level that ships with the game.
pub const DEFAULT_LEVEL_ID: u32 = 1;

/// Resolve a built-in level by id.
pub fn load_level(level_id: u32) -> Result<LevelConfig, LevelError> {
    match level_id {
        DEFAULT_LEVEL_ID => Ok(default_test_level()),
        other => Err(LevelError::UnknownLevel(other)),
    }
}

pub fn from_json_str(json: &str) -> Result<LevelConfig, LevelError> {
    let level: LevelConfig = serde_json::from_str(json)?;
    Ok(level)
}

pub fn from_path(path: impl AsRef<Path>) -> Result<LevelConfig, LevelError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let level = from_json_str(&text)?;
    info!(
        "Loaded level from {}: {} playfield cards, {} stack cards",
        path.as_ref().display(),
        level.playfield.len(),
        level.stack.len()
    );
    Ok(level)
}

/// The built-in level: six playfield cards in two columns of three, and a
/// stack whose first card (4♣) starts in the tray.
pub fn default_test_level() -> LevelConfig {
    let playfield = vec![
        CardConfig::new(Rank::Queen, Suit::Clubs, Vec2::new(400.0, 1500.0)),
        CardConfig::new(Rank::Two, Suit::Diamonds, Vec2::new(450.0, 1300.0)),
        CardConfig::new(Rank::Two, Suit::Hearts, Vec2::new(500.0, 1100.0)),
        CardConfig::new(Rank::Three, Suit::Diamonds, Vec2::new(850.0, 1500.0)),
        CardConfig::new(Rank::Two, Suit::Spades, Vec2::new(800.0, 1300.0)),
        CardConfig::new(Rank::Ace, Suit::Spades, Vec2::new(750.0, 1100.0)),
    ];
    // Stack coordinates are assigned by the generator.
    let stack = vec![
        CardConfig::new(Rank::Four, Suit::Clubs, Vec2::ZERO),
        CardConfig::new(Rank::Ace, Suit::Hearts, Vec2::ZERO),
        CardConfig::new(Rank::Three, Suit::Clubs, Vec2::ZERO),
    ];
    LevelConfig { playfield, stack }
}
