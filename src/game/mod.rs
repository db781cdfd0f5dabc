//! Core game logic module for Snake
//!
//! This module contains all the game logic without any terminal I/O. The
//! engine paints onto an abstract [`Surface`] and reports progress through
//! [`GameHooks`], so it can be driven by a timer, a test or a replay.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod hooks;
pub mod state;
pub mod surface;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepOutcome};
pub use error::{GameError, GameResult};
pub use geometry::{Coordinate, Grid, Vertices};
pub use hooks::{ChannelHooks, GameEvent, GameHooks};
pub use state::{GamePhase, GameState, Snake};
pub use surface::{Canvas, Paint, Surface};
