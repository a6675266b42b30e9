//! Turns a [`LevelConfig`] into the initial [`GameState`].

use bevy::prelude::*;

use crate::card::{Card, CardId, Rank, Suit};
use crate::config::TableLayout;
use crate::game_state::GameState;

use super::config::{CardConfig, LevelConfig};
use super::error::LevelError;

/// Builds game states and hands out card ids.
///
/// Ids are unique per generator: every level it generates continues the same
/// sequence, so a card id is never reused within one controller's lifetime.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    next_id: u32,
}

impl Default for LevelGenerator {
    fn default() -> Self {
        Self { next_id: 1 }
    }
}

struct ValidCard {
    rank: Rank,
    suit: Suit,
    position: Vec2,
}

/// `entry` counts playfield entries first, then stack entries.
fn validate(entry: usize, config: &CardConfig) -> Result<ValidCard, LevelError> {
    let rank = Rank::from_face_index(config.face).ok_or(LevelError::InvalidRank {
        entry,
        face: config.face,
    })?;
    let suit = Suit::from_index(config.suit).ok_or(LevelError::InvalidSuit {
        entry,
        suit: config.suit,
    })?;
    let position = Vec2::from(config.position);
    if !position.is_finite() {
        return Err(LevelError::NonFinitePosition { entry });
    }
    Ok(ValidCard {
        rank,
        suit,
        position,
    })
}

impl LevelGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id the next generated card will receive.
    pub fn peek_next_id(&self) -> CardId {
        CardId(self.next_id)
    }

    fn next_id(&mut self) -> CardId {
        let id = CardId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Validate `level` and lay it out.
    ///
    /// Playfield cards keep their configured coordinates. The first stack
    /// entry goes to the tray at `layout.tray_position`; the rest are fanned
    /// out from `layout.stack_origin`. Nothing is allocated when validation
    /// fails.
    pub fn generate(
        &mut self,
        level: &LevelConfig,
        layout: &TableLayout,
    ) -> Result<GameState, LevelError> {
        if level.is_empty() {
            return Err(LevelError::Empty);
        }

        let playfield = level
            .playfield
            .iter()
            .enumerate()
            .map(|(i, c)| validate(i, c))
            .collect::<Result<Vec<_>, _>>()?;
        let offset = level.playfield.len();
        let stack = level
            .stack
            .iter()
            .enumerate()
            .map(|(i, c)| validate(offset + i, c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut state = GameState::new();
        for valid in playfield {
            let card = Card::new(self.next_id(), valid.rank, valid.suit, valid.position);
            state.add_playfield_card(card);
        }

        let mut stack = stack.into_iter();
        if let Some(first) = stack.next() {
            let tray = Card::new(self.next_id(), first.rank, first.suit, layout.tray_position);
            state.set_tray_card(Some(tray));
        }
        for (index, valid) in stack.enumerate() {
            let card = Card::new(
                self.next_id(),
                valid.rank,
                valid.suit,
                layout.stack_slot(index),
            );
            state.push_stack_card(card);
        }

        debug!(
            "Generated level: {} playfield, {} stack, tray {}",
            state.playfield_len(),
            state.stack_cards().len(),
            state
                .tray_card()
                .map_or_else(|| "empty".to_string(), |c| c.to_string())
        );
        Ok(state)
    }
}
