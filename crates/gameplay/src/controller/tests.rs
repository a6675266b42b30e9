//! Unit tests for the game controller, driven without an ECS world.

use bevy::math::Vec2;

use crate::card::{CardId, Rank, Suit};
use crate::config::GameConfig;
use crate::controller::errors::{MoveError, StartError};
use crate::controller::game_controller::{ClickKind, ClickOutcome, GameController, GamePhase};
use crate::controller::presentation::{AnimationTicket, PresentationCommand};
use crate::level::{default_test_level, CardConfig, LevelConfig, LevelError};
use crate::undo::{UndoError, UndoKind};

// Ids handed out for the built-in level, in generation order.
const QUEEN_CLUBS: CardId = CardId(1);
const TWO_DIAMONDS: CardId = CardId(2);
const THREE_DIAMONDS: CardId = CardId(4);
const ACE_SPADES: CardId = CardId(6);
const TRAY_FOUR_CLUBS: CardId = CardId(7);
const STACK_ACE_HEARTS: CardId = CardId(8);
const STACK_THREE_CLUBS: CardId = CardId(9);

fn started() -> GameController {
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level(&default_test_level()).unwrap();
    controller.drain_commands();
    controller
}

/// Play a click and immediately acknowledge its animation.
fn play(controller: &mut GameController, card_id: CardId) -> ClickOutcome {
    let outcome = controller.click_card(card_id).unwrap();
    assert!(controller.animation_finished(outcome.ticket));
    outcome
}

/// Every card id appears in at most one collection.
fn assert_partitioned(controller: &GameController) {
    let mut ids = controller.state().unwrap().card_ids();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total, "a card is owned by two collections");
}

#[test]
fn test_start_installs_state_and_requests_redraw() {
    let mut controller = GameController::new(GameConfig::default());
    assert_eq!(controller.phase(), GamePhase::Idle);
    controller.start_level(&default_test_level()).unwrap();

    assert_eq!(controller.phase(), GamePhase::Active);
    assert_eq!(controller.score(), 0);
    let state = controller.state().unwrap();
    assert_eq!(state.playfield_len(), 6);
    assert_eq!(state.tray_card().map(|c| c.id), Some(TRAY_FOUR_CLUBS));
    assert_eq!(controller.drain_commands(), vec![PresentationCommand::Redraw]);
    assert!(controller.drain_commands().is_empty());
}

#[test]
fn test_failed_start_leaves_no_game() {
    let mut controller = started();
    play(&mut controller, THREE_DIAMONDS);

    let err = controller.start_level(&LevelConfig::default()).unwrap_err();
    assert_eq!(err, StartError::Level(LevelError::Empty));
    assert_eq!(controller.phase(), GamePhase::Idle);
    assert!(controller.state().is_none());
    assert!(controller.history().is_empty());
    assert_eq!(controller.click_card(QUEEN_CLUBS), Err(MoveError::Inactive));

    let err = controller.start_level_id(99).unwrap_err();
    assert_eq!(err, StartError::Level(LevelError::UnknownLevel(99)));
    assert!(controller.state().is_none());
}

#[test]
fn test_start_level_id_loads_built_in_level() {
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level_id(1).unwrap();
    assert_eq!(controller.state().unwrap().playfield_len(), 6);
}

#[test]
fn test_rank_mismatch_leaves_state_untouched() {
    let mut controller = started();
    let before = controller.state().cloned();

    let err = controller.click_card(QUEEN_CLUBS).unwrap_err();
    assert_eq!(
        err,
        MoveError::RankMismatch {
            card: Rank::Queen,
            tray: Rank::Four
        }
    );
    assert_eq!(controller.state().cloned(), before);
    assert!(!controller.is_processing());
    assert!(controller.history().is_empty());
    assert!(controller.drain_commands().is_empty());
}

/// Q♣ against 4♣, then 3♣, then K: only the King accepts it.
#[test]
fn test_queen_scenario() {
    let queen_pos = Vec2::new(400.0, 1500.0);
    let level = LevelConfig {
        playfield: vec![CardConfig::new(Rank::Queen, Suit::Clubs, queen_pos)],
        stack: vec![
            CardConfig::new(Rank::Four, Suit::Clubs, Vec2::ZERO),
            CardConfig::new(Rank::King, Suit::Hearts, Vec2::ZERO),
            CardConfig::new(Rank::Three, Suit::Clubs, Vec2::ZERO),
        ],
    };
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level(&level).unwrap();
    let (queen, king, three) = (CardId(1), CardId(3), CardId(4));

    assert!(matches!(
        controller.click_card(queen),
        Err(MoveError::RankMismatch { .. })
    ));

    assert_eq!(play(&mut controller, three).kind, ClickKind::Draw);
    assert!(matches!(
        controller.click_card(queen),
        Err(MoveError::RankMismatch { .. })
    ));

    play(&mut controller, king);
    let outcome = play(&mut controller, queen);
    assert_eq!(outcome.kind, ClickKind::Match);
    assert!(outcome.won);
    assert_eq!(controller.phase(), GamePhase::Won);
    assert_eq!(controller.score(), 10);

    let undone = controller.click_undo().unwrap();
    assert_eq!(undone.kind, UndoKind::MoveCard);
    assert_eq!(controller.phase(), GamePhase::Active);
    assert_eq!(controller.score(), 0);
    let state = controller.state().unwrap();
    assert_eq!(state.playfield_card(queen).map(|c| c.position), Some(queen_pos));
    assert_eq!(state.tray_card().map(|c| c.id), Some(king));
    assert!(!state.is_won());
}

#[test]
fn test_match_emits_animation_then_redraw() {
    let mut controller = started();
    let outcome = controller.click_card(THREE_DIAMONDS).unwrap();
    let tray_pos = controller.config().layout.tray_position;
    assert_eq!(outcome.target, tray_pos);
    assert_eq!(
        controller.drain_commands(),
        vec![
            PresentationCommand::AnimateMove {
                ticket: outcome.ticket,
                card_id: THREE_DIAMONDS,
                target: tray_pos,
            },
            PresentationCommand::Redraw,
        ]
    );
    let tray = controller.state().unwrap().tray_card().unwrap();
    assert_eq!(tray.id, THREE_DIAMONDS);
    assert!(tray.moving);

    controller.animation_finished(outcome.ticket);
    assert!(!controller.state().unwrap().tray_card().unwrap().moving);
}

#[test]
fn test_input_rejected_while_animation_pending() {
    let mut controller = started();
    let outcome = controller.click_card(THREE_DIAMONDS).unwrap();
    let before = controller.state().cloned();

    assert_eq!(controller.click_card(TWO_DIAMONDS), Err(MoveError::Busy));
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::Busy);
    assert!(!controller.can_undo());
    assert_eq!(controller.state().cloned(), before);

    // A stale ticket does not release the guard.
    assert!(!controller.animation_finished(AnimationTicket(outcome.ticket.0 + 100)));
    assert!(controller.is_processing());

    assert!(controller.animation_finished(outcome.ticket));
    assert!(!controller.animation_finished(outcome.ticket));
    play(&mut controller, TWO_DIAMONDS);
}

#[test]
fn test_undo_releases_guard_immediately() {
    let mut controller = started();
    play(&mut controller, THREE_DIAMONDS);
    controller.drain_commands();

    let undone = controller.click_undo().unwrap();
    assert!(!controller.is_processing());
    let commands = controller.drain_commands();
    assert!(matches!(
        commands[0],
        PresentationCommand::AnimateUndo { card_id, .. } if card_id == THREE_DIAMONDS
    ));
    assert_eq!(commands[1], PresentationCommand::Redraw);

    // Acknowledging an undo animation is allowed but changes nothing.
    if let PresentationCommand::AnimateUndo { ticket, .. } = commands[0] {
        assert!(!controller.animation_finished(ticket));
    }
    assert_eq!(undone.target, Vec2::new(850.0, 1500.0));
    play(&mut controller, THREE_DIAMONDS);
}

#[test]
fn test_only_top_of_stack_is_playable() {
    let mut controller = started();
    assert_eq!(
        controller.click_card(STACK_ACE_HEARTS),
        Err(MoveError::NotTopOfStack(STACK_ACE_HEARTS))
    );
    assert_eq!(
        controller.click_card(TRAY_FOUR_CLUBS),
        Err(MoveError::NotInteractive(TRAY_FOUR_CLUBS))
    );
    assert_eq!(
        controller.click_card(CardId(500)),
        Err(MoveError::CardNotFound(CardId(500)))
    );

    // Drawing ignores rank adjacency.
    let outcome = play(&mut controller, STACK_THREE_CLUBS);
    assert_eq!(outcome.kind, ClickKind::Draw);
    assert_eq!(outcome.target, controller.config().layout.tray_position);
    play(&mut controller, STACK_ACE_HEARTS);
    assert!(controller.state().unwrap().is_stack_empty());
}

#[test]
fn test_empty_tray_rejects_playfield_clicks() {
    let level = LevelConfig {
        playfield: vec![CardConfig::new(Rank::Two, Suit::Hearts, Vec2::new(1.0, 2.0))],
        stack: Vec::new(),
    };
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level(&level).unwrap();
    assert_eq!(controller.click_card(CardId(1)), Err(MoveError::NoTrayCard));
}

#[test]
fn test_inactive_phases_reject_input() {
    let mut controller = GameController::new(GameConfig::default());
    assert_eq!(controller.click_card(QUEEN_CLUBS), Err(MoveError::Inactive));
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::Inactive);

    controller.start_level(&default_test_level()).unwrap();
    assert!(controller.pause());
    assert!(!controller.pause());
    assert_eq!(controller.click_card(THREE_DIAMONDS), Err(MoveError::Inactive));
    assert!(controller.resume());
    play(&mut controller, THREE_DIAMONDS);

    controller.stop();
    assert!(controller.is_game_over());
    assert!(controller.state().is_none());
    assert_eq!(controller.score(), 0);
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::Inactive);
}

#[test]
fn test_nothing_to_undo() {
    let mut controller = started();
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::NothingToUndo);
    assert!(!controller.is_processing());
}

#[test]
fn test_won_game_only_accepts_undo() {
    let level = LevelConfig {
        playfield: vec![CardConfig::new(Rank::Ace, Suit::Spades, Vec2::new(5.0, 5.0))],
        stack: vec![
            CardConfig::new(Rank::King, Suit::Hearts, Vec2::ZERO),
            CardConfig::new(Rank::Five, Suit::Hearts, Vec2::ZERO),
        ],
    };
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level(&level).unwrap();
    controller.drain_commands();

    let outcome = play(&mut controller, CardId(1));
    assert!(outcome.won);
    assert!(controller.is_game_over());
    assert_eq!(
        controller.drain_commands().last(),
        Some(&PresentationCommand::GameWon { score: 10 })
    );
    assert_eq!(controller.click_card(CardId(3)), Err(MoveError::Inactive));

    controller.click_undo().unwrap();
    assert_eq!(controller.phase(), GamePhase::Active);
    assert!(!controller.is_game_over());
}

#[test]
fn test_undo_everything_restores_initial_state() {
    let mut controller = started();
    let initial = controller.state().cloned().unwrap();

    for card in [
        THREE_DIAMONDS,
        TWO_DIAMONDS,
        ACE_SPADES,
        STACK_THREE_CLUBS,
        STACK_ACE_HEARTS,
    ] {
        play(&mut controller, card);
        assert_partitioned(&controller);
    }
    assert_eq!(controller.score(), 30);
    assert_eq!(controller.history().len(), 5);

    while controller.can_undo() {
        controller.click_undo().unwrap();
        assert_partitioned(&controller);
    }
    assert_eq!(controller.state().cloned().unwrap(), initial);
}

#[test]
fn test_each_undo_reverts_exactly_one_move() {
    let mut controller = started();
    let mut snapshots = vec![controller.state().cloned().unwrap()];
    for card in [THREE_DIAMONDS, STACK_THREE_CLUBS, TWO_DIAMONDS] {
        play(&mut controller, card);
        snapshots.push(controller.state().cloned().unwrap());
    }
    snapshots.pop();
    while let Some(expected) = snapshots.pop() {
        controller.click_undo().unwrap();
        assert_eq!(controller.state().cloned().unwrap(), expected);
    }
}

#[test]
fn test_bounded_history_limits_undo_depth() {
    let config = GameConfig {
        max_undo_steps: 2,
        ..GameConfig::default()
    };
    let mut controller = GameController::new(config);
    controller.start_level(&default_test_level()).unwrap();
    for card in [THREE_DIAMONDS, TWO_DIAMONDS, ACE_SPADES] {
        play(&mut controller, card);
    }
    assert_eq!(controller.history().len(), 2);
    controller.click_undo().unwrap();
    controller.click_undo().unwrap();
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::NothingToUndo);
    // The evicted first match stays applied.
    assert_eq!(controller.score(), 10);

    controller.set_max_undo_steps(0);
    assert_eq!(controller.history().max_steps(), 0);
}

#[test]
fn test_custom_match_points() {
    let config = GameConfig {
        match_points: 25,
        ..GameConfig::default()
    };
    let mut controller = GameController::new(config);
    controller.start_level(&default_test_level()).unwrap();
    play(&mut controller, THREE_DIAMONDS);
    assert_eq!(controller.score(), 25);
    controller.click_undo().unwrap();
    assert_eq!(controller.score(), 0);
}

#[test]
fn test_empty_playfield_level_starts_won() {
    let level = LevelConfig {
        playfield: Vec::new(),
        stack: vec![CardConfig::new(Rank::King, Suit::Spades, Vec2::ZERO)],
    };
    let mut controller = GameController::new(GameConfig::default());
    controller.start_level(&level).unwrap();

    assert_eq!(controller.phase(), GamePhase::Won);
    assert!(controller.is_game_over());
    assert_eq!(
        controller.drain_commands(),
        vec![
            PresentationCommand::Redraw,
            PresentationCommand::GameWon { score: 0 },
        ]
    );
    assert_eq!(controller.click_card(CardId(1)), Err(MoveError::Inactive));
    assert_eq!(controller.click_undo().unwrap_err(), MoveError::NothingToUndo);
}

#[test]
fn test_undo_of_vanished_card_is_reported_and_consumed() {
    let mut controller = started();
    play(&mut controller, THREE_DIAMONDS);
    play(&mut controller, TWO_DIAMONDS);
    assert_eq!(controller.history().len(), 2);

    // The tray card disappears behind the controller's back.
    let removed = controller
        .state_mut()
        .and_then(|state| state.take_tray_card())
        .map(|card| card.id);
    assert_eq!(removed, Some(TWO_DIAMONDS));
    let before = controller.state().cloned();

    let err = controller.click_undo().unwrap_err();
    assert!(matches!(
        err,
        MoveError::Undo(UndoError::CardNotFound { kind: UndoKind::MoveCard, card_id })
            if card_id == TWO_DIAMONDS
    ));
    assert!(!controller.is_processing());
    assert_eq!(controller.history().len(), 1);
    assert_eq!(controller.state().cloned(), before);
    assert!(controller.drain_commands().iter().all(|c| !matches!(
        c,
        PresentationCommand::AnimateUndo { .. }
    )));

    // Only the failed entry is consumed.
    assert!(controller.can_undo());
}
