//! Cell Snake - a single-player snake game on a fixed-size drawing surface
//!
//! This library provides:
//! - Core game logic and cell geometry (game module)
//! - Tick timer and input scoping (session module)
//! - TUI rendering, input mapping and score keeping (render, input, metrics)
//! - The interactive terminal front end (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod session;
