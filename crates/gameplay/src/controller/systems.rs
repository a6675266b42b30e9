//! Systems that connect the controller to Bevy events.

use bevy::prelude::*;

use super::events::{AnimationFinished, LevelRequest, PlayerInput};
use super::game_controller::GameController;
use super::presentation::PresentationCommand;
use super::result_log::InputResultLog;

/// Start or stop levels on request.
pub fn handle_level_requests(
    mut requests: EventReader<LevelRequest>,
    mut controller: ResMut<GameController>,
    mut log: ResMut<InputResultLog>,
) {
    for request in requests.read() {
        let result = match request {
            LevelRequest::Start(level) => controller.start_level(level),
            LevelRequest::StartId(id) => controller.start_level_id(*id),
            LevelRequest::Stop => {
                controller.stop();
                Ok(())
            }
        };
        // Inputs logged against a previous level are meaningless now.
        log.clear();
        if let Err(e) = result {
            error!("{e}");
        }
    }
}

/// Apply player clicks in arrival order and log each result.
pub fn handle_player_input(
    mut inputs: EventReader<PlayerInput>,
    mut controller: ResMut<GameController>,
    mut log: ResMut<InputResultLog>,
) {
    for input in inputs.read() {
        let result = controller.apply_input(*input);
        log.record(*input, result);
    }
}

/// Forward everything the controller emitted to the presentation layer.
pub fn flush_presentation_commands(
    mut controller: ResMut<GameController>,
    mut commands: EventWriter<PresentationCommand>,
) {
    for command in controller.drain_commands() {
        commands.send(command);
    }
}

/// Release the input guard for finished move animations.
pub fn handle_animation_finished(
    mut finished: EventReader<AnimationFinished>,
    mut controller: ResMut<GameController>,
) {
    for AnimationFinished(ticket) in finished.read() {
        if !controller.animation_finished(*ticket) {
            trace!("Ignoring acknowledgement for {ticket}");
        }
    }
}
