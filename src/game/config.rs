use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::error::{GameError, GameResult};

/// Largest accepted canvas side, in logical units
pub const MAX_CANVAS_SIDE: u32 = 4096;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the drawing surface in logical units
    pub canvas_width: u32,
    /// Height of the drawing surface in logical units
    pub canvas_height: u32,
    /// Width of one cell
    pub square_width: u32,
    /// Height of one cell
    pub square_height: u32,
    /// Period between two movement ticks
    pub tick_interval_ms: u64,
    /// Random draws tried before falling back to a full scan for a safe cell
    pub max_placement_attempts: u32,
    /// Fixed RNG seed, for reproducible games
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: 100,
            canvas_height: 100,
            square_width: 10,
            square_height: 10,
            tick_interval_ms: 500,
            max_placement_attempts: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom canvas size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas_width: width,
            canvas_height: height,
            ..Default::default()
        }
    }

    /// Default configuration with a fixed seed, for tests and replays
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Parse a configuration from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> GameResult<Self> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> GameResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the canvas and cell sizes describe a playable board
    pub fn validate(&self) -> GameResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(GameError::InvalidConfig(
                "canvas dimensions must be non-zero".into(),
            ));
        }
        if self.canvas_width > MAX_CANVAS_SIDE || self.canvas_height > MAX_CANVAS_SIDE {
            return Err(GameError::InvalidConfig(format!(
                "canvas is {}x{}, the limit is {} per side",
                self.canvas_width, self.canvas_height, MAX_CANVAS_SIDE
            )));
        }
        if self.square_width == 0 || self.square_height == 0 {
            return Err(GameError::InvalidConfig(
                "square dimensions must be non-zero".into(),
            ));
        }
        // Cell centers sit at half a square from the corner
        if self.square_width % 2 != 0 || self.square_height % 2 != 0 {
            return Err(GameError::InvalidConfig(format!(
                "square dimensions must be even, got {}x{}",
                self.square_width, self.square_height
            )));
        }
        if self.square_width > self.canvas_width || self.square_height > self.canvas_height {
            return Err(GameError::InvalidConfig(
                "square does not fit on the canvas".into(),
            ));
        }
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidConfig(
                "tick interval must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.canvas_width, 100);
        assert_eq!(config.canvas_height, 100);
        assert_eq!(config.square_width, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_config() {
        let config = GameConfig::new(200, 80);
        assert_eq!(config.canvas_width, 200);
        assert_eq!(config.canvas_height, 80);
        assert_eq!(config.square_height, 10);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = GameConfig::from_toml_str("tick_interval_ms = 250\nseed = 7\n").unwrap();
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.canvas_width, 100);
    }

    #[test]
    fn test_rejects_odd_square() {
        let result = GameConfig::from_toml_str("square_width = 9");
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_oversized_square() {
        let config = GameConfig {
            square_width: 120,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_huge_canvas() {
        let result = GameConfig::from_toml_str("canvas_width = 3000000000");
        assert!(matches!(result, Err(GameError::InvalidConfig(_))));

        let config = GameConfig::new(MAX_CANVAS_SIDE + 1, 100);
        assert!(config.validate().is_err());
        assert!(GameConfig::new(MAX_CANVAS_SIDE, MAX_CANVAS_SIDE).validate().is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let result = GameConfig::from_toml_str("canvas_width = \"wide\"");
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("snake.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "canvas_width = 60\ncanvas_height = 40").unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.canvas_width, 60);
        assert_eq!(config.canvas_height, 40);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
