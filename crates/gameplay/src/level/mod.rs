//! Level data, loading, and generation of the initial game state.

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;

pub use config::{CardConfig, LevelConfig, PositionConfig};
pub use error::LevelError;
pub use generator::LevelGenerator;
pub use loader::{default_test_level, from_json_str, from_path, load_level, DEFAULT_LEVEL_ID};
