//! The game orchestrator: owns the state and history of the running level,
//! validates player input, and tells the presentation layer what changed.

use bevy::prelude::*;

use crate::card::{can_match, CardId};
use crate::config::GameConfig;
use crate::game_state::{CardLocation, GameState};
use crate::level::{self, LevelConfig, LevelGenerator};
use crate::undo::{self, UndoAction, UndoHistory, UndoOutcome};

use super::errors::{MoveError, StartError};
use super::events::PlayerInput;
use super::presentation::{AnimationTicket, PresentationCommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    /// No level loaded.
    #[default]
    Idle,
    Active,
    Paused,
    /// The playfield was cleared. Only undo is accepted.
    Won,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickKind {
    /// A playfield card was matched onto the tray.
    Match,
    /// The top stack card was drawn onto the tray.
    Draw,
}

/// Result of an accepted card click.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickOutcome {
    pub kind: ClickKind,
    pub card_id: CardId,
    pub target: Vec2,
    /// Acknowledge this ticket to accept the next input.
    pub ticket: AnimationTicket,
    pub won: bool,
}

#[derive(Debug, Clone, Copy)]
struct PendingAnimation {
    ticket: AnimationTicket,
    card_id: CardId,
}

#[derive(Resource, Debug)]
pub struct GameController {
    config: GameConfig,
    generator: LevelGenerator,
    state: Option<GameState>,
    history: UndoHistory,
    phase: GamePhase,
    /// Input guard. Held from the start of a move until its animation is
    /// acknowledged; undo releases it immediately.
    processing: bool,
    pending: Option<PendingAnimation>,
    next_ticket: u64,
    outbox: Vec<PresentationCommand>,
}

impl FromWorld for GameController {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<GameConfig>()
            .cloned()
            .unwrap_or_default();
        Self::new(config)
    }
}

impl GameController {
    pub fn new(config: GameConfig) -> Self {
        let history = UndoHistory::with_max_steps(config.max_undo_steps);
        Self {
            config,
            generator: LevelGenerator::new(),
            state: None,
            history,
            phase: GamePhase::Idle,
            processing: false,
            pending: None,
            next_ticket: 0,
            outbox: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Generate `level` and make it the running game. On failure any previous
    /// game is gone and the controller is idle.
    pub fn start_level(&mut self, level: &LevelConfig) -> Result<(), StartError> {
        self.reset();
        let state = match self.generator.generate(level, &self.config.layout) {
            Ok(state) => state,
            Err(e) => {
                warn!("Failed to start level: {e}");
                return Err(e.into());
            }
        };
        info!(
            "Game started: {} playfield cards, {} stack cards",
            state.playfield_len(),
            state.stack_cards().len()
        );
        let won = state.is_won();
        let score = state.score();
        self.state = Some(state);
        self.phase = GamePhase::Active;
        self.outbox.push(PresentationCommand::Redraw);
        if won {
            info!("Level starts with an empty playfield, game won");
            self.phase = GamePhase::Won;
            self.outbox.push(PresentationCommand::GameWon { score });
        }
        Ok(())
    }

    /// Start one of the built-in levels.
    pub fn start_level_id(&mut self, level_id: u32) -> Result<(), StartError> {
        let level = match level::load_level(level_id) {
            Ok(level) => level,
            Err(e) => {
                self.reset();
                warn!("Failed to load level {level_id}: {e}");
                return Err(e.into());
            }
        };
        self.start_level(&level)
    }

    /// End the game and drop its state and history.
    pub fn stop(&mut self) {
        if self.phase != GamePhase::Idle {
            info!("Game stopped with score {}", self.score());
        }
        self.reset();
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != GamePhase::Active {
            return false;
        }
        self.phase = GamePhase::Paused;
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }
        self.phase = GamePhase::Active;
        true
    }

    fn reset(&mut self) {
        self.state = None;
        self.history.clear();
        self.phase = GamePhase::Idle;
        self.processing = false;
        self.pending = None;
    }

    // -----------------------------------------------------------------------
    // Player input
    // -----------------------------------------------------------------------

    pub fn apply_input(&mut self, input: PlayerInput) -> Result<(), MoveError> {
        match input {
            PlayerInput::ClickCard(card_id) => self.click_card(card_id).map(|_| ()),
            PlayerInput::ClickUndo => self.click_undo().map(|_| ()),
        }
    }

    /// Play a card: match it from the playfield or draw it from the stack.
    pub fn click_card(&mut self, card_id: CardId) -> Result<ClickOutcome, MoveError> {
        if self.phase != GamePhase::Active {
            return Err(MoveError::Inactive);
        }
        if self.processing {
            return Err(MoveError::Busy);
        }
        let Some(state) = self.state.as_mut() else {
            return Err(MoveError::Inactive);
        };

        self.processing = true;
        let result = match state.locate(card_id) {
            Some(CardLocation::Playfield) => {
                execute_match(state, &mut self.history, &self.config, card_id)
                    .map(|target| (ClickKind::Match, target))
            }
            Some(CardLocation::Stack(_)) => {
                execute_draw(state, &mut self.history, &self.config, card_id)
                    .map(|target| (ClickKind::Draw, target))
            }
            Some(CardLocation::Tray) => Err(MoveError::NotInteractive(card_id)),
            None => Err(MoveError::CardNotFound(card_id)),
        };

        let (kind, target) = match result {
            Ok(done) => done,
            Err(e) => {
                self.processing = false;
                debug!("Click on card {card_id} rejected: {e}");
                return Err(e);
            }
        };

        if let Some(card) = state.find_card_mut(card_id) {
            card.moving = true;
        }
        let won = state.is_won();
        let score = state.score();

        let ticket = self.issue_ticket();
        self.pending = Some(PendingAnimation { ticket, card_id });
        self.outbox.push(PresentationCommand::AnimateMove {
            ticket,
            card_id,
            target,
        });
        self.outbox.push(PresentationCommand::Redraw);

        if won {
            info!("Playfield cleared, game won with score {score}");
            self.phase = GamePhase::Won;
            self.outbox.push(PresentationCommand::GameWon { score });
        }

        Ok(ClickOutcome {
            kind,
            card_id,
            target,
            ticket,
            won,
        })
    }

    /// Revert the most recent move.
    ///
    /// Accepted while active or won. The input guard is released as soon as
    /// the state has been restored, without waiting for the undo animation.
    pub fn click_undo(&mut self) -> Result<UndoOutcome, MoveError> {
        if !matches!(self.phase, GamePhase::Active | GamePhase::Won) {
            return Err(MoveError::Inactive);
        }
        if self.processing {
            return Err(MoveError::Busy);
        }
        if !self.history.has_actions() {
            return Err(MoveError::NothingToUndo);
        }
        let Some(state) = self.state.as_mut() else {
            return Err(MoveError::Inactive);
        };

        self.processing = true;
        let result = undo::undo_last(&mut self.history, state, &self.config.layout);
        let still_won = state.is_won();
        self.processing = false;

        let outcome = result?;
        if self.phase == GamePhase::Won && !still_won {
            self.phase = GamePhase::Active;
        }
        let ticket = self.issue_ticket();
        self.outbox.push(PresentationCommand::AnimateUndo {
            ticket,
            card_id: outcome.card_id,
            target: outcome.target,
        });
        self.outbox.push(PresentationCommand::Redraw);
        debug!("Undid {} of card {}", outcome.kind, outcome.card_id);
        Ok(outcome)
    }

    /// Acknowledge a finished animation. Returns `false` for tickets that
    /// are not holding the input guard (undo animations, stale tickets).
    pub fn animation_finished(&mut self, ticket: AnimationTicket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                if let Some(card) = self
                    .state
                    .as_mut()
                    .and_then(|s| s.find_card_mut(pending.card_id))
                {
                    card.moving = false;
                }
                self.pending = None;
                self.processing = false;
                true
            }
            _ => false,
        }
    }

    fn issue_ticket(&mut self) -> AnimationTicket {
        let ticket = AnimationTicket(self.next_ticket);
        self.next_ticket += 1;
        ticket
    }

    /// Take every presentation command emitted since the last call.
    pub fn drain_commands(&mut self) -> Vec<PresentationCommand> {
        std::mem::take(&mut self.outbox)
    }

    // -----------------------------------------------------------------------
    // Queries and settings
    // -----------------------------------------------------------------------

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    /// `true` when no level is running or the running one has been won.
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, GamePhase::Idle | GamePhase::Won)
    }

    pub fn score(&self) -> u32 {
        self.state.as_ref().map_or(0, GameState::score)
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut GameState> {
        self.state.as_mut()
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.phase, GamePhase::Active | GamePhase::Won)
            && !self.processing
            && self.history.has_actions()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn set_max_undo_steps(&mut self, max_steps: usize) {
        self.config.max_undo_steps = max_steps;
        self.history.set_max_steps(max_steps);
    }
}

// ---------------------------------------------------------------------------
// Moves
// ---------------------------------------------------------------------------

/// Move a playfield card onto the tray. Returns the tray coordinate.
fn execute_match(
    state: &mut GameState,
    history: &mut UndoHistory,
    config: &GameConfig,
    card_id: CardId,
) -> Result<Vec2, MoveError> {
    let tray = state.tray_card().ok_or(MoveError::NoTrayCard)?;
    let card = state
        .playfield_card(card_id)
        .ok_or(MoveError::CardNotFound(card_id))?;
    if !can_match(card.rank, tray.rank) {
        return Err(MoveError::RankMismatch {
            card: card.rank,
            tray: tray.rank,
        });
    }

    let to = tray.position;
    history.push(UndoAction::MoveCard {
        card_id,
        from: card.position,
        to,
        previous_tray: Some(tray.clone()),
        points: config.match_points,
    });

    let mut card = state
        .remove_playfield_card(card_id)
        .ok_or(MoveError::CardNotFound(card_id))?;
    card.position = to;
    state.set_tray_card(Some(card));
    state.add_score(config.match_points);
    Ok(to)
}

/// Draw the top stack card onto the tray. Returns the tray coordinate.
fn execute_draw(
    state: &mut GameState,
    history: &mut UndoHistory,
    config: &GameConfig,
    card_id: CardId,
) -> Result<Vec2, MoveError> {
    if state.top_stack_card().map(|c| c.id) != Some(card_id) {
        return Err(MoveError::NotTopOfStack(card_id));
    }
    let mut card = state
        .pop_stack_card()
        .ok_or(MoveError::CardNotFound(card_id))?;

    history.push(UndoAction::StackToTray {
        card_id,
        previous_tray: state.tray_card().cloned(),
    });

    let to = config.layout.tray_position;
    card.position = to;
    state.set_tray_card(Some(card));
    Ok(to)
}
