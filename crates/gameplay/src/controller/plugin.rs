//! Plugin that wires up the controller, its events, and its systems.

use bevy::prelude::*;

use crate::config::GameConfig;

use super::events::{AnimationFinished, LevelRequest, PlayerInput};
use super::game_controller::GameController;
use super::presentation::PresentationCommand;
use super::result_log::InputResultLog;
use super::systems::{
    flush_presentation_commands, handle_animation_finished, handle_level_requests,
    handle_player_input,
};

/// Ordering of gameplay work within a frame.
///
/// Presenters put their systems in `Present`. Acknowledgements they send
/// there are handled in `Acknowledge` during the same frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Input,
    Present,
    Acknowledge,
}

/// Registers the game controller, its events, and the input pipeline.
///
/// Insert a [`GameConfig`] before adding the plugin to override defaults.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<GameController>()
            .init_resource::<InputResultLog>()
            .add_event::<PlayerInput>()
            .add_event::<LevelRequest>()
            .add_event::<AnimationFinished>()
            .add_event::<PresentationCommand>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Input,
                    GameplaySet::Present,
                    GameplaySet::Acknowledge,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_level_requests,
                    handle_player_input,
                    flush_presentation_commands,
                )
                    .chain()
                    .in_set(GameplaySet::Input),
            )
            .add_systems(
                Update,
                handle_animation_finished.in_set(GameplaySet::Acknowledge),
            );
    }
}
