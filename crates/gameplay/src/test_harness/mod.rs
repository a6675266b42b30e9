//! # TestGame: headless harness for gameplay integration tests
//!
//! Wraps `bevy::app::App` + `GameplayPlugin` with a recording presenter so
//! tests can drive the game through events, exactly as a front end would,
//! and inspect what was sent back.

mod assertions;
mod queries;

use bevy::app::App;
use bevy::prelude::*;

use crate::config::GameConfig;
use crate::controller::{
    AnimationFinished, AnimationTicket, GameplayPlugin, GameplaySet, LevelRequest, PlayerInput,
    PresentationCommand,
};
use crate::level::{default_test_level, LevelConfig};

/// Stands in for a renderer: records every presentation command and either
/// acknowledges move animations in the same frame or holds them until
/// `TestGame::finish_animations`.
#[derive(Resource, Debug, Default)]
struct PresentationRecorder {
    commands: Vec<PresentationCommand>,
    auto_acknowledge: bool,
    unacknowledged: Vec<AnimationTicket>,
}

fn record_presentation(
    mut incoming: EventReader<PresentationCommand>,
    mut recorder: ResMut<PresentationRecorder>,
    mut finished: EventWriter<AnimationFinished>,
) {
    for command in incoming.read() {
        if let PresentationCommand::AnimateMove { ticket, .. } = command {
            if recorder.auto_acknowledge {
                finished.send(AnimationFinished(*ticket));
            } else {
                recorder.unacknowledged.push(*ticket);
            }
        }
        recorder.commands.push(command.clone());
    }
}

/// A headless Bevy App wrapping `GameplayPlugin`.
///
/// Move animations are acknowledged immediately unless the game was built
/// with [`TestGame::with_manual_animations`].
pub struct TestGame {
    app: App,
}

impl Default for TestGame {
    fn default() -> Self {
        Self::new()
    }
}

impl TestGame {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// An idle game with the default configuration. No level is loaded.
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    /// An idle game using `config`. The config has to be in place before
    /// the plugin builds the controller.
    pub fn with_config(config: GameConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(config);
        app.add_plugins(GameplayPlugin);
        app.insert_resource(PresentationRecorder {
            auto_acknowledge: true,
            ..Default::default()
        });
        app.add_systems(Update, record_presentation.in_set(GameplaySet::Present));
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Setup (builders consume and return Self)
    // -----------------------------------------------------------------------

    /// Hold move animations until `finish_animations` is called.
    pub fn with_manual_animations(mut self) -> Self {
        self.recorder_mut().auto_acknowledge = false;
        self
    }

    /// Start `level` and clear whatever the start produced from the record.
    pub fn with_level(mut self, level: LevelConfig) -> Self {
        self.start_level(level);
        self.take_commands();
        self
    }

    /// Start the built-in six card level.
    pub fn with_default_level(self) -> Self {
        self.with_level(default_test_level())
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Run one frame.
    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn start_level(&mut self, level: LevelConfig) {
        self.app.world_mut().send_event(LevelRequest::Start(level));
        self.app.update();
    }

    pub fn start_level_id(&mut self, level_id: u32) {
        self.app
            .world_mut()
            .send_event(LevelRequest::StartId(level_id));
        self.app.update();
    }

    pub fn stop(&mut self) {
        self.app.world_mut().send_event(LevelRequest::Stop);
        self.app.update();
    }

    /// Click a card and run one frame.
    pub fn click(&mut self, card_id: crate::card::CardId) {
        self.app
            .world_mut()
            .send_event(PlayerInput::ClickCard(card_id));
        self.app.update();
    }

    /// Press undo and run one frame.
    pub fn undo(&mut self) {
        self.app.world_mut().send_event(PlayerInput::ClickUndo);
        self.app.update();
    }

    /// Send several inputs in one frame.
    pub fn send_inputs(&mut self, inputs: &[PlayerInput]) {
        for input in inputs {
            self.app.world_mut().send_event(*input);
        }
        self.app.update();
    }

    /// Acknowledge every move animation still being held, then run a frame.
    pub fn finish_animations(&mut self) {
        let tickets = std::mem::take(&mut self.recorder_mut().unacknowledged);
        for ticket in tickets {
            self.app.world_mut().send_event(AnimationFinished(ticket));
        }
        self.app.update();
    }

    /// Acknowledge an arbitrary ticket, then run a frame.
    pub fn acknowledge(&mut self, ticket: AnimationTicket) {
        self.app.world_mut().send_event(AnimationFinished(ticket));
        self.app.update();
    }

    fn recorder_mut(&mut self) -> Mut<'_, PresentationRecorder> {
        self.app.world_mut().resource_mut::<PresentationRecorder>()
    }

    fn recorder(&self) -> &PresentationRecorder {
        self.app.world().resource::<PresentationRecorder>()
    }
}
