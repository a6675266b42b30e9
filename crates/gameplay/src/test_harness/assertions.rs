//! Assertion helpers for `TestGame` integration tests.

use crate::controller::MoveError;

use super::TestGame;

impl TestGame {
    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_last_input_ok(&self) {
        match self.last_result().map(|e| &e.result) {
            Some(Ok(())) => {}
            other => panic!("Expected last input to succeed, got {other:?}"),
        }
    }

    pub fn assert_last_input_err(&self, expected: MoveError) {
        match self.last_result().map(|e| &e.result) {
            Some(Err(e)) if *e == expected => {}
            other => panic!("Expected last input to fail with {expected:?}, got {other:?}"),
        }
    }

    pub fn assert_score(&self, expected: u32) {
        let score = self.score();
        assert_eq!(score, expected, "Expected score {expected}, got {score}");
    }

    pub fn assert_playfield_len(&self, expected: usize) {
        let len = self.state().playfield_len();
        assert_eq!(len, expected, "Expected {expected} playfield cards, got {len}");
    }

    /// No card id is held by two collections at once.
    pub fn assert_cards_partitioned(&self) {
        let mut ids = self.state().card_ids();
        let total = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), total, "A card is held by two collections");
    }
}
