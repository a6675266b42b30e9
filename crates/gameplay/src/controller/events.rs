//! Events the front end sends into the gameplay systems.

use bevy::prelude::*;

use crate::card::CardId;
use crate::level::LevelConfig;

use super::presentation::AnimationTicket;

/// A click from the player.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerInput {
    ClickCard(CardId),
    ClickUndo,
}

/// The presenter finished the animation it was asked to play.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFinished(pub AnimationTicket);

#[derive(Event, Debug, Clone)]
pub enum LevelRequest {
    Start(LevelConfig),
    /// Start a built-in level by id.
    StartId(u32),
    Stop,
}
