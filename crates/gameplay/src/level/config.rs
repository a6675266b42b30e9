//! Level layout data as produced by a loader.
//!
//! The JSON shape matches the game's level files:
//!
//! ```json
//! { "Playfield": [ { "CardFace": 12, "CardSuit": 0, "Position": { "x": 400, "y": 1500 } } ],
//!   "Stack":     [ { "CardFace": 3,  "CardSuit": 0, "Position": { "x": 0,   "y": 0 } } ] }
//! ```
//!
//! Faces and suits are zero-based indices. They are kept raw here and
//! validated by the generator so a bad value reports which entry is wrong.

use bevy::prelude::*;
use serde::Deserialize;

use crate::card::{Rank, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PositionConfig {
    pub x: f32,
    pub y: f32,
}

impl From<PositionConfig> for Vec2 {
    fn from(p: PositionConfig) -> Vec2 {
        Vec2::new(p.x, p.y)
    }
}

impl From<Vec2> for PositionConfig {
    fn from(v: Vec2) -> PositionConfig {
        PositionConfig { x: v.x, y: v.y }
    }
}

/// One card entry of a level.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CardConfig {
    #[serde(rename = "CardFace")]
    pub face: i64,
    #[serde(rename = "CardSuit")]
    pub suit: i64,
    #[serde(rename = "Position", default = "origin")]
    pub position: PositionConfig,
}

fn origin() -> PositionConfig {
    PositionConfig { x: 0.0, y: 0.0 }
}

impl CardConfig {
    pub fn new(rank: Rank, suit: Suit, position: Vec2) -> Self {
        Self {
            face: i64::from(rank.value()) - 1,
            suit: suit as i64,
            position: position.into(),
        }
    }
}

/// Initial layout of a level. The first stack entry starts in the tray; the
/// remaining entries form the stack with the last one on top.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LevelConfig {
    #[serde(rename = "Playfield", default)]
    pub playfield: Vec<CardConfig>,
    #[serde(rename = "Stack", default)]
    pub stack: Vec<CardConfig>,
}

impl LevelConfig {
    pub fn is_empty(&self) -> bool {
        self.playfield.is_empty() && self.stack.is_empty()
    }
}
