use std::fmt;

use crate::card::{CardId, Rank};
use crate::level::LevelError;
use crate::undo::UndoError;

/// Why a player input was rejected. The game state is unchanged in every
/// case except `Undo(UndoError::CardNotFound { .. })`, where the history
/// entry has been consumed.
#[derive(Debug, Clone, PartialEq)]
pub enum MoveError {
    /// No game is running, or it is paused or already won.
    Inactive,
    /// A previous move is still being presented.
    Busy,
    CardNotFound(CardId),
    /// A playfield card was clicked while the tray is empty.
    NoTrayCard,
    RankMismatch { card: Rank, tray: Rank },
    /// A stack card below the top was clicked.
    NotTopOfStack(CardId),
    /// The card exists but cannot be clicked (e.g. the tray card).
    NotInteractive(CardId),
    NothingToUndo,
    Undo(UndoError),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Inactive => write!(f, "no active game"),
            MoveError::Busy => write!(f, "previous move still in progress"),
            MoveError::CardNotFound(id) => write!(f, "card {id} does not exist"),
            MoveError::NoTrayCard => write!(f, "tray is empty"),
            MoveError::RankMismatch { card, tray } => {
                write!(f, "{card:?} does not match tray card {tray:?}")
            }
            MoveError::NotTopOfStack(id) => write!(f, "card {id} is not the top of the stack"),
            MoveError::NotInteractive(id) => write!(f, "card {id} cannot be played"),
            MoveError::NothingToUndo => write!(f, "nothing to undo"),
            MoveError::Undo(e) => write!(f, "undo failed: {e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Undo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<UndoError> for MoveError {
    fn from(e: UndoError) -> Self {
        match e {
            UndoError::EmptyHistory => MoveError::NothingToUndo,
            other => MoveError::Undo(other),
        }
    }
}

/// Why a level could not be started.
#[derive(Debug, Clone, PartialEq)]
pub enum StartError {
    Level(LevelError),
}

impl fmt::Display for StartError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartError::Level(e) => write!(f, "cannot start level: {e}"),
        }
    }
}

impl std::error::Error for StartError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartError::Level(e) => Some(e),
        }
    }
}

impl From<LevelError> for StartError {
    fn from(e: LevelError) -> Self {
        StartError::Level(e)
    }
}
