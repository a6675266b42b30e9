//! Game state and undo engine for a tri-peaks style card matching puzzle.
//!
//! Cards are matched from the playfield onto a single tray card when their
//! ranks are adjacent (Ace and King wrap). The face-down stack refills the
//! tray. Every accepted move is recorded so it can be reverted one step at
//! a time.

pub mod card;
pub mod config;
pub mod controller;
pub mod game_state;
pub mod level;
pub mod undo;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use controller::{GameController, GameplayPlugin, GameplaySet};
