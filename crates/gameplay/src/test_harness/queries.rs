//! Read access to the game under test.

use bevy::prelude::*;

use crate::card::{Card, CardId};
use crate::controller::{
    AnimationTicket, GameController, GamePhase, InputResultLog, LoggedInput, PresentationCommand,
};
use crate::game_state::GameState;

use super::TestGame;

impl TestGame {
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    pub fn resource<T: Resource>(&self) -> &T {
        self.app.world().resource::<T>()
    }

    pub fn controller(&self) -> &GameController {
        self.resource::<GameController>()
    }

    /// The running game's state. Panics when no level is loaded.
    pub fn state(&self) -> &GameState {
        match self.controller().state() {
            Some(state) => state,
            None => panic!("no level is running"),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.controller().phase()
    }

    pub fn score(&self) -> u32 {
        self.controller().score()
    }

    pub fn tray(&self) -> Option<&Card> {
        self.state().tray_card()
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.state().find_card(card_id)
    }

    pub fn log(&self) -> &InputResultLog {
        self.resource::<InputResultLog>()
    }

    /// Result of the most recent player input.
    pub fn last_result(&self) -> Option<&LoggedInput> {
        self.log().latest()
    }

    /// Everything presented since the last `take_commands`.
    pub fn commands(&self) -> &[PresentationCommand] {
        &self.recorder().commands
    }

    pub fn take_commands(&mut self) -> Vec<PresentationCommand> {
        std::mem::take(&mut self.recorder_mut().commands)
    }

    /// Move animations the harness is still holding back.
    pub fn unacknowledged(&self) -> &[AnimationTicket] {
        &self.recorder().unacknowledged
    }
}
