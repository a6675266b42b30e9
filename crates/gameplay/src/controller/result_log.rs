//! Recent player inputs and how the controller answered them.

use std::collections::VecDeque;

use bevy::prelude::*;

use super::errors::MoveError;
use super::events::PlayerInput;

const CAPACITY: usize = 64;

/// One input as the controller saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggedInput {
    pub input: PlayerInput,
    pub result: Result<(), MoveError>,
}

impl LoggedInput {
    pub fn is_rejected(&self) -> bool {
        self.result.is_err()
    }
}

/// The last inputs handled by `handle_player_input`, oldest first. Cleared
/// whenever a level is started or stopped.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputResultLog {
    entries: VecDeque<LoggedInput>,
}

impl InputResultLog {
    pub fn record(&mut self, input: PlayerInput, result: Result<(), MoveError>) {
        if self.entries.len() == CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(LoggedInput { input, result });
    }

    pub fn latest(&self) -> Option<&LoggedInput> {
        self.entries.back()
    }

    /// Up to `n` most recent entries, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &LoggedInput> {
        self.entries.iter().skip(self.entries.len().saturating_sub(n))
    }

    pub fn rejected_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_rejected()).count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
