//! Parsing of the console commands typed by the player.

use std::fmt;

use gameplay::card::CardId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Click(CardId),
    Undo,
    Show,
    Restart,
    Pause,
    Resume,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingCardId,
    BadCardId(String),
    Unknown(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty command"),
            ParseError::MissingCardId => write!(f, "click needs a card id, e.g. `click 4`"),
            ParseError::BadCardId(raw) => write!(f, "`{raw}` is not a card id"),
            ParseError::Unknown(word) => write!(f, "unknown command `{word}`, try `help`"),
        }
    }
}

impl std::error::Error for ParseError {}

pub const HELP: &str = "\
commands:
  click <id>   play a playfield card or draw the top stack card (alias: c)
  undo         revert the last move (alias: u)
  show         print the table
  restart      start the level again
  pause        pause the game
  resume       resume a paused game
  quit         exit";

impl ConsoleCommand {
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let Some(word) = words.next() else {
            return Err(ParseError::Empty);
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "click" | "c" => {
                let raw = words.next().ok_or(ParseError::MissingCardId)?;
                let id = raw
                    .trim_start_matches('#')
                    .parse::<u32>()
                    .map_err(|_| ParseError::BadCardId(raw.to_string()))?;
                ConsoleCommand::Click(CardId(id))
            }
            "undo" | "u" => ConsoleCommand::Undo,
            "show" | "s" => ConsoleCommand::Show,
            "restart" => ConsoleCommand::Restart,
            "pause" => ConsoleCommand::Pause,
            "resume" => ConsoleCommand::Resume,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" | "q" => ConsoleCommand::Quit,
            other => return Err(ParseError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}
