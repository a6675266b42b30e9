//! Text presenter: prints the table whenever the game asks for a redraw and
//! finishes every animation on the spot.

use bevy::prelude::*;

use gameplay::controller::{AnimationFinished, GameController, PresentationCommand};
use gameplay::game_state::GameState;

pub fn present_to_console(
    mut incoming: EventReader<PresentationCommand>,
    mut finished: EventWriter<AnimationFinished>,
    controller: Res<GameController>,
) {
    let mut redraw = false;
    for command in incoming.read() {
        match command {
            PresentationCommand::AnimateMove {
                ticket,
                card_id,
                target,
            } => {
                println!("  {card_id} -> ({:.0}, {:.0})", target.x, target.y);
                finished.send(AnimationFinished(*ticket));
            }
            PresentationCommand::AnimateUndo {
                card_id, target, ..
            } => {
                println!("  {card_id} back to ({:.0}, {:.0})", target.x, target.y);
            }
            PresentationCommand::Redraw => redraw = true,
            PresentationCommand::GameWon { score } => {
                println!("*** Playfield cleared! Final score: {score} ***");
            }
        }
    }
    if redraw {
        if let Some(state) = controller.state() {
            print!("{}", render_table(state));
        }
    }
}

/// The table as text, one section per collection.
pub fn render_table(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str("playfield:");
    if state.playfield_len() == 0 {
        out.push_str(" (empty)");
    }
    for card in state.playfield_cards() {
        out.push_str(&format!(
            "\n  {:>4}  {:<3} at ({:.0}, {:.0})",
            card.id.to_string(),
            card.to_string(),
            card.position.x,
            card.position.y
        ));
    }

    out.push_str("\nstack:");
    match state.top_stack_card() {
        Some(top) => out.push_str(&format!(
            " {} hidden, top {}",
            state.stack_cards().len() - 1,
            top.id
        )),
        None => out.push_str(" (empty)"),
    }

    out.push_str("\ntray: ");
    match state.tray_card() {
        Some(card) => out.push_str(&format!("{card} {}", card.id)),
        None => out.push_str("(empty)"),
    }
    out.push_str(&format!("\nscore: {}\n", state.score()));
    out
}
