use std::fmt;

/// Why a level could not be loaded or turned into a game.
#[derive(Debug, Clone, PartialEq)]
pub enum LevelError {
    /// The level has no cards at all.
    Empty,
    /// No level is registered under this id.
    UnknownLevel(u32),
    /// Reading the level file failed.
    Io(String),
    /// The level text is not valid level JSON.
    Json(String),
    /// A `CardFace` outside 0..=12.
    InvalidRank { entry: usize, face: i64 },
    /// A `CardSuit` outside 0..=3.
    InvalidSuit { entry: usize, suit: i64 },
    /// A position with a NaN or infinite coordinate.
    NonFinitePosition { entry: usize },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Empty => write!(f, "level contains no cards"),
            LevelError::UnknownLevel(id) => write!(f, "no level with id {id}"),
            LevelError::Io(msg) => write!(f, "I/O error: {msg}"),
            LevelError::Json(msg) => write!(f, "invalid level JSON: {msg}"),
            LevelError::InvalidRank { entry, face } => {
                write!(f, "card entry {entry}: face {face} is not in 0..=12")
            }
            LevelError::InvalidSuit { entry, suit } => {
                write!(f, "card entry {entry}: suit {suit} is not in 0..=3")
            }
            LevelError::NonFinitePosition { entry } => {
                write!(f, "card entry {entry}: position is not finite")
            }
        }
    }
}

impl std::error::Error for LevelError {}

impl From<serde_json::Error> for LevelError {
    fn from(e: serde_json::Error) -> Self {
        LevelError::Json(e.to_string())
    }
}

impl From<std::io::Error> for LevelError {
    fn from(e: std::io::Error) -> Self {
        LevelError::Io(e.to_string())
    }
}
