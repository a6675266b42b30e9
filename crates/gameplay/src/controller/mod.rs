//! Game orchestration: move legality, win detection, the input guard, and
//! the Bevy plumbing around them.

pub mod errors;
pub mod events;
pub mod game_controller;
pub mod plugin;
pub mod presentation;
pub mod result_log;
pub mod systems;

#[cfg(test)]
mod tests;

pub use errors::{MoveError, StartError};
pub use events::{AnimationFinished, LevelRequest, PlayerInput};
pub use game_controller::{ClickKind, ClickOutcome, GameController, GamePhase};
pub use plugin::{GameplayPlugin, GameplaySet};
pub use presentation::{AnimationTicket, PresentationCommand};
pub use result_log::{InputResultLog, LoggedInput};
