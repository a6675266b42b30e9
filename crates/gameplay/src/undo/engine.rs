//! Reverting recorded actions against the live game state.

use bevy::prelude::*;

use crate::card::{Card, CardId};
use crate::config::TableLayout;
use crate::game_state::GameState;

use super::history::UndoHistory;
use super::types::{UndoAction, UndoError, UndoKind, UndoOutcome};

/// Pop the most recent action and revert it.
///
/// The entry leaves the history before it is applied. If its card cannot be
/// found the state is left untouched and the entry is not restored.
pub fn undo_last(
    history: &mut UndoHistory,
    state: &mut GameState,
    layout: &TableLayout,
) -> Result<UndoOutcome, UndoError> {
    let action = history.remove_last().ok_or(UndoError::EmptyHistory)?;
    let result = revert(&action, state, layout);
    if let Err(err) = &result {
        warn!("Undo discarded after failure: {err}");
    }
    result
}

/// Restore `state` to what it was right before `action` was applied.
pub fn revert(
    action: &UndoAction,
    state: &mut GameState,
    layout: &TableLayout,
) -> Result<UndoOutcome, UndoError> {
    let kind = action.kind();
    match action {
        UndoAction::MoveCard {
            card_id,
            from,
            to,
            previous_tray,
            points,
        } => {
            let mut card = take_tray_first(state, kind, *card_id)?;
            place(&mut card, *from);
            state.add_playfield_card(card);
            restore_tray(state, previous_tray.as_ref(), *to);
            state.subtract_score(*points);
            Ok(UndoOutcome {
                kind,
                card_id: *card_id,
                target: *from,
            })
        }
        UndoAction::ReplaceTray {
            card_id,
            from,
            to,
            previous_tray,
        } => {
            let mut card = state
                .take_card(*card_id)
                .ok_or(UndoError::CardNotFound {
                    kind,
                    card_id: *card_id,
                })?;
            place(&mut card, *from);
            state.add_playfield_card(card);
            if let Some(snapshot) = previous_tray {
                restore_tray(state, Some(snapshot), *to);
            }
            Ok(UndoOutcome {
                kind,
                card_id: *card_id,
                target: *from,
            })
        }
        UndoAction::StackToTray {
            card_id,
            previous_tray,
        } => {
            let mut card = take_tray_first(state, kind, *card_id)?;
            let slot = layout.stack_slot(state.stack_cards().len());
            place(&mut card, slot);
            state.push_stack_card(card);
            restore_tray(state, previous_tray.as_ref(), layout.tray_position);
            Ok(UndoOutcome {
                kind,
                card_id: *card_id,
                target: slot,
            })
        }
    }
}

/// Take `card_id` out of the tray, or from anywhere else if the tray holds
/// something different.
fn take_tray_first(
    state: &mut GameState,
    kind: UndoKind,
    card_id: CardId,
) -> Result<Card, UndoError> {
    if state.tray_card().is_some_and(|c| c.id == card_id) {
        if let Some(card) = state.take_tray_card() {
            return Ok(card);
        }
    }
    let card = state
        .take_card(card_id)
        .ok_or(UndoError::CardNotFound { kind, card_id })?;
    if let Some(tray) = state.tray_card() {
        warn!(
            "Undo {kind}: card {card_id} was not in the tray; tray card {} will be replaced",
            tray.id
        );
    }
    Ok(card)
}

fn place(card: &mut Card, position: Vec2) {
    card.position = position;
    card.visible = true;
    card.moving = false;
}

/// Install a copy of `snapshot` in the tray at `position`, or empty the tray.
fn restore_tray(state: &mut GameState, snapshot: Option<&Card>, position: Vec2) {
    let restored = snapshot.map(|snapshot| {
        let mut card = snapshot.clone();
        place(&mut card, position);
        card
    });
    state.set_tray_card(restored);
}
