//! Bounded undo history.

use std::collections::VecDeque;

use super::types::UndoAction;

/// Undo actions, oldest at the front.
///
/// With `max_steps > 0` the history keeps only that many entries; pushing
/// past the bound silently drops the oldest one.
#[derive(Debug, Clone, Default)]
pub struct UndoHistory {
    actions: VecDeque<UndoAction>,
    max_steps: usize,
}

impl UndoHistory {
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            actions: VecDeque::new(),
            max_steps,
        }
    }

    /// Record an action. Evicts the oldest entry if the bound is exceeded.
    pub fn push(&mut self, action: UndoAction) {
        self.actions.push_back(action);
        self.trim();
    }

    /// The most recent action, if any.
    pub fn last(&self) -> Option<&UndoAction> {
        self.actions.back()
    }

    /// Drop the most recent action and return it.
    pub fn remove_last(&mut self) -> Option<UndoAction> {
        self.actions.pop_back()
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn max_steps(&self) -> usize {
        self.max_steps
    }

    /// Change the bound. 0 removes it; a smaller bound trims the oldest
    /// entries right away.
    pub fn set_max_steps(&mut self, max_steps: usize) {
        self.max_steps = max_steps;
        self.trim();
    }

    /// Actions oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &UndoAction> {
        self.actions.iter()
    }

    fn trim(&mut self) {
        if self.max_steps == 0 {
            return;
        }
        let excess = self.actions.len().saturating_sub(self.max_steps);
        self.actions.drain(..excess);
    }
}
