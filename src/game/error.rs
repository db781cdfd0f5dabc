use thiserror::Error;

/// Errors raised by the game core
#[derive(Debug, Error)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("drawing surface is unavailable")]
    SurfaceUnavailable,

    #[error("surface is {actual:?} but the canvas is configured as {expected:?}")]
    SurfaceMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },

    #[error("game has not been started")]
    NotStarted,

    #[error("no safe cell left on the board")]
    BoardFull,

    #[error("failed to parse configuration")]
    Config(#[from] toml::de::Error),

    #[error("failed to read configuration")]
    Io(#[from] std::io::Error),
}

pub type GameResult<T> = Result<T, GameError>;
