//! Errors surfaced by the terminal front-end. The game core itself is total
//! and never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("fps must be between {min} and {max}, got {got}")]
    FpsOutOfRange { got: u32, min: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
