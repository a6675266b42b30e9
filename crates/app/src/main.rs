//! Console front end: plays a level in the terminal, one command per line.
//!
//! ```text
//! tray_match [--level=<level.json>] [--config=<config.json>]
//! ```
//!
//! Without `--level` the built-in level is played.

mod command;
mod console;

use std::io::{BufRead, Write};

use bevy::log::LogPlugin;
use bevy::prelude::*;

use gameplay::config::GameConfig;
use gameplay::controller::{GameController, GamePhase, InputResultLog, LevelRequest, PlayerInput};
use gameplay::level::{self, LevelConfig};
use gameplay::{GameplayPlugin, GameplaySet};

use command::{ConsoleCommand, HELP};
use console::{present_to_console, render_table};

struct Options {
    level_path: Option<String>,
    config_path: Option<String>,
}

fn parse_options() -> Options {
    let mut options = Options {
        level_path: None,
        config_path: None,
    };
    for arg in std::env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--level=") {
            options.level_path = Some(path.to_string());
        } else if let Some(path) = arg.strip_prefix("--config=") {
            options.config_path = Some(path.to_string());
        } else {
            eprintln!("ignoring unknown argument `{arg}`");
        }
    }
    options
}

fn load_config(path: Option<&str>) -> GameConfig {
    let Some(path) = path else {
        return GameConfig::default();
    };
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|text| GameConfig::from_json_str(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => {
            info!("Loaded config from {path}");
            config
        }
        Err(e) => {
            warn!("Could not read config {path}: {e}; using defaults");
            GameConfig::default()
        }
    }
}

fn load_level(path: Option<&str>) -> LevelConfig {
    let Some(path) = path else {
        return level::default_test_level();
    };
    match level::from_path(path) {
        Ok(level) => level,
        Err(e) => {
            warn!("Could not load level {path}: {e}; playing the built-in level");
            level::default_test_level()
        }
    }
}

fn main() {
    let options = parse_options();

    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(LogPlugin {
        filter: "warn,gameplay=info,tray_match=info".to_string(),
        ..default()
    });

    // The log plugin has to be up before anything worth logging happens.
    let config = load_config(options.config_path.as_deref());
    let level = load_level(options.level_path.as_deref());

    app.insert_resource(config);
    app.add_plugins(GameplayPlugin);
    app.add_systems(Update, present_to_console.in_set(GameplaySet::Present));
    app.update();

    app.world_mut().send_event(LevelRequest::Start(level.clone()));
    app.update();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    println!("{HELP}");
    prompt(&mut stdout);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("stdin read error: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            prompt(&mut stdout);
            continue;
        }

        let command = match ConsoleCommand::parse(&line) {
            Ok(c) => c,
            Err(e) => {
                println!("{e}");
                prompt(&mut stdout);
                continue;
            }
        };

        match command {
            ConsoleCommand::Click(card_id) => {
                send_input(&mut app, PlayerInput::ClickCard(card_id));
            }
            ConsoleCommand::Undo => send_input(&mut app, PlayerInput::ClickUndo),
            ConsoleCommand::Show => show(&app),
            ConsoleCommand::Restart => {
                app.world_mut().send_event(LevelRequest::Start(level.clone()));
                app.update();
            }
            ConsoleCommand::Pause => {
                if !app.world_mut().resource_mut::<GameController>().pause() {
                    println!("nothing to pause");
                }
            }
            ConsoleCommand::Resume => {
                if !app.world_mut().resource_mut::<GameController>().resume() {
                    println!("the game is not paused");
                }
            }
            ConsoleCommand::Help => println!("{HELP}"),
            ConsoleCommand::Quit => break,
        }
        prompt(&mut stdout);
    }

    let controller = app.world().resource::<GameController>();
    println!("final score: {}", controller.score());
}

/// Send one input, run a frame, and report a rejection if there was one.
fn send_input(app: &mut App, input: PlayerInput) {
    app.world_mut().send_event(input);
    app.update();
    let latest = app.world().resource::<InputResultLog>().latest();
    if let Some(Err(e)) = latest.map(|entry| &entry.result) {
        println!("rejected: {e}");
    }
}

fn show(app: &App) {
    let controller = app.world().resource::<GameController>();
    match controller.state() {
        Some(state) => print!("{}", render_table(state)),
        None => println!("no level running"),
    }
    if controller.phase() == GamePhase::Paused {
        println!("(paused)");
    }
}

fn prompt(stdout: &mut std::io::Stdout) {
    print!("> ");
    let _ = stdout.flush();
}
