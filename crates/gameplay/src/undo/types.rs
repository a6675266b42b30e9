//! Types for the undo system.

use std::fmt;

use bevy::prelude::*;

use crate::card::{Card, CardId};

// ---------------------------------------------------------------------------
// UndoAction: each variant stores exactly what is needed to reverse it
// ---------------------------------------------------------------------------

/// A single reversible mutation of the game state.
///
/// `previous_tray` is always an owned snapshot taken when the action was
/// recorded, never a handle to a live card.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoAction {
    /// A playfield card was matched onto the tray.
    MoveCard {
        card_id: CardId,
        /// Where the card sat on the playfield.
        from: Vec2,
        /// The tray coordinate it moved to.
        to: Vec2,
        previous_tray: Option<Card>,
        /// Score awarded for the match.
        points: u32,
    },
    /// A card took over the tray without a score change.
    ReplaceTray {
        card_id: CardId,
        from: Vec2,
        to: Vec2,
        previous_tray: Option<Card>,
    },
    /// The top stack card was drawn onto the tray.
    StackToTray {
        card_id: CardId,
        previous_tray: Option<Card>,
    },
}

impl UndoAction {
    pub fn kind(&self) -> UndoKind {
        match self {
            UndoAction::MoveCard { .. } => UndoKind::MoveCard,
            UndoAction::ReplaceTray { .. } => UndoKind::ReplaceTray,
            UndoAction::StackToTray { .. } => UndoKind::StackToTray,
        }
    }

    /// The card the action moved.
    pub fn card_id(&self) -> CardId {
        match self {
            UndoAction::MoveCard { card_id, .. }
            | UndoAction::ReplaceTray { card_id, .. }
            | UndoAction::StackToTray { card_id, .. } => *card_id,
        }
    }

    pub fn previous_tray(&self) -> Option<&Card> {
        match self {
            UndoAction::MoveCard { previous_tray, .. }
            | UndoAction::ReplaceTray { previous_tray, .. }
            | UndoAction::StackToTray { previous_tray, .. } => previous_tray.as_ref(),
        }
    }
}

/// Tag of an [`UndoAction`], for logs and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoKind {
    MoveCard,
    ReplaceTray,
    StackToTray,
}

impl fmt::Display for UndoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UndoKind::MoveCard => "move-card",
            UndoKind::ReplaceTray => "replace-tray",
            UndoKind::StackToTray => "stack-to-tray",
        };
        f.write_str(name)
    }
}

/// What a successful undo did, for the presentation layer to animate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UndoOutcome {
    pub kind: UndoKind,
    pub card_id: CardId,
    /// Where the card ended up.
    pub target: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UndoError {
    EmptyHistory,
    /// The action was popped but its card exists nowhere in the state. The
    /// action is gone; this cannot be retried.
    CardNotFound { kind: UndoKind, card_id: CardId },
}

impl fmt::Display for UndoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UndoError::EmptyHistory => write!(f, "nothing to undo"),
            UndoError::CardNotFound { kind, card_id } => write!(
                f,
                "cannot undo {kind}: card {card_id} is not in the game state"
            ),
        }
    }
}

impl std::error::Error for UndoError {}
