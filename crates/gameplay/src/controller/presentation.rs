//! Commands the controller emits for the presentation layer.
//!
//! The controller never waits on presentation. It pushes a command and moves
//! on; a presenter that animates a forward move reports back with the ticket
//! (see `AnimationFinished`) to release the input guard.

use std::fmt;

use bevy::prelude::*;

use crate::card::CardId;

/// Identifies one animation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AnimationTicket(pub u64);

impl fmt::Display for AnimationTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "anim-{}", self.0)
    }
}

#[derive(Event, Debug, Clone, PartialEq)]
pub enum PresentationCommand {
    /// Animate a forward move (match or draw) to `target`, then acknowledge.
    AnimateMove {
        ticket: AnimationTicket,
        card_id: CardId,
        target: Vec2,
    },
    /// Animate an undo to `target`. Acknowledging is optional.
    AnimateUndo {
        ticket: AnimationTicket,
        card_id: CardId,
        target: Vec2,
    },
    /// Re-read the whole game state and redraw it.
    Redraw,
    GameWon {
        score: u32,
    },
}
