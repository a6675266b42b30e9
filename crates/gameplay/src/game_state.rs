//! The three card collections of a level and the score.
//!
//! `GameState` only keeps the collections structurally consistent; which
//! moves are legal is decided by the controller.

use std::collections::BTreeMap;

use crate::card::{Card, CardId};

/// Which collection currently owns a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLocation {
    Playfield,
    /// Index into the stack, 0 = bottom.
    Stack(usize),
    Tray,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameState {
    playfield: BTreeMap<CardId, Card>,
    stack: Vec<Card>,
    tray: Option<Card>,
    score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    // -----------------------------------------------------------------------
    // Playfield
    // -----------------------------------------------------------------------

    pub fn add_playfield_card(&mut self, card: Card) {
        self.playfield.insert(card.id, card);
    }

    /// Remove a playfield card. Returns `None` if it is not on the playfield.
    pub fn remove_playfield_card(&mut self, id: CardId) -> Option<Card> {
        self.playfield.remove(&id)
    }

    pub fn playfield_card(&self, id: CardId) -> Option<&Card> {
        self.playfield.get(&id)
    }

    /// Playfield cards in id order.
    pub fn playfield_cards(&self) -> impl Iterator<Item = &Card> {
        self.playfield.values()
    }

    pub fn playfield_len(&self) -> usize {
        self.playfield.len()
    }

    // -----------------------------------------------------------------------
    // Stack
    // -----------------------------------------------------------------------

    pub fn push_stack_card(&mut self, card: Card) {
        self.stack.push(card);
    }

    pub fn pop_stack_card(&mut self) -> Option<Card> {
        self.stack.pop()
    }

    pub fn top_stack_card(&self) -> Option<&Card> {
        self.stack.last()
    }

    /// Stack cards bottom to top.
    pub fn stack_cards(&self) -> &[Card] {
        &self.stack
    }

    pub fn is_stack_empty(&self) -> bool {
        self.stack.is_empty()
    }

    // -----------------------------------------------------------------------
    // Tray
    // -----------------------------------------------------------------------

    pub fn tray_card(&self) -> Option<&Card> {
        self.tray.as_ref()
    }

    /// Replace the tray occupant. The previous occupant is dropped; take it
    /// first with [`GameState::take_tray_card`] if it is still needed.
    pub fn set_tray_card(&mut self, card: Option<Card>) {
        self.tray = card;
    }

    pub fn take_tray_card(&mut self) -> Option<Card> {
        self.tray.take()
    }

    // -----------------------------------------------------------------------
    // Lookup across collections
    // -----------------------------------------------------------------------

    /// Find a card by id: playfield first, then stack, then tray.
    pub fn find_card(&self, id: CardId) -> Option<&Card> {
        self.playfield
            .get(&id)
            .or_else(|| self.stack.iter().find(|c| c.id == id))
            .or_else(|| self.tray.as_ref().filter(|c| c.id == id))
    }

    pub fn find_card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        if let Some(card) = self.playfield.get_mut(&id) {
            return Some(card);
        }
        if let Some(card) = self.stack.iter_mut().find(|c| c.id == id) {
            return Some(card);
        }
        self.tray.as_mut().filter(|c| c.id == id)
    }

    pub fn locate(&self, id: CardId) -> Option<CardLocation> {
        if self.playfield.contains_key(&id) {
            return Some(CardLocation::Playfield);
        }
        if let Some(index) = self.stack.iter().position(|c| c.id == id) {
            return Some(CardLocation::Stack(index));
        }
        match &self.tray {
            Some(card) if card.id == id => Some(CardLocation::Tray),
            _ => None,
        }
    }

    /// Remove a card from whichever collection owns it, in `find_card` order.
    pub fn take_card(&mut self, id: CardId) -> Option<Card> {
        match self.locate(id)? {
            CardLocation::Playfield => self.playfield.remove(&id),
            CardLocation::Stack(index) => Some(self.stack.remove(index)),
            CardLocation::Tray => self.tray.take(),
        }
    }

    /// Ids of every card currently owned by a collection.
    pub fn card_ids(&self) -> Vec<CardId> {
        self.playfield
            .keys()
            .copied()
            .chain(self.stack.iter().map(|c| c.id))
            .chain(self.tray.iter().map(|c| c.id))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Score and win
    // -----------------------------------------------------------------------

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Take back points awarded earlier. Never goes below zero.
    pub fn subtract_score(&mut self, points: u32) {
        self.score = self.score.saturating_sub(points);
    }

    /// The level is won once the playfield is empty.
    pub fn is_won(&self) -> bool {
        self.playfield.is_empty()
    }
}
