//! Undo system for player moves.
//!
//! Every successful move records an [`UndoAction`] in the [`UndoHistory`].
//! Each action carries a value snapshot of the tray card it displaced, so
//! undoing one step is constant time and never needs a full state copy.

pub mod engine;
pub mod history;
pub mod types;


pub use engine::{revert, undo_last};
pub use history::UndoHistory;
pub use types::{UndoAction, UndoError, UndoKind, UndoOutcome};
