//! Game settings
//!
//! Playfield size and pacing, shared read-only by every entity. Settings are
//! only ever read (from JSON or defaults); nothing is written back.

use std::fmt;
use std::time::Duration;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Smallest playfield that still holds the ten brick columns
pub const MIN_PLAYFIELD_WIDTH: i32 = BRICK_COLUMNS * BRICK_WIDTH;
/// Smallest playfield height; deeper levels may need more (see `validate`)
pub const MIN_PLAYFIELD_HEIGHT: i32 = 400;

/// Bottom edge of the brick grid laid out for `level`
fn brick_grid_bottom(level: u32) -> i64 {
    let rows = i64::from(BRICK_BASE_ROWS) + i64::from(level);
    i64::from(BRICK_GRID_OFFSET) + rows * i64::from(BRICK_HEIGHT)
}

/// Error raised while loading settings
#[derive(Debug)]
pub enum SettingsError {
    /// Input was not valid settings JSON
    Parse(serde_json::Error),
    /// Settings parsed but describe an unplayable game
    Invalid(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(err) => write!(f, "failed to parse settings: {err}"),
            SettingsError::Invalid(reason) => write!(f, "invalid settings: {reason}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(err) => Some(err),
            SettingsError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

/// Game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Playfield width in pixels
    pub playfield_width: i32,
    /// Playfield height in pixels (ball below this is lost)
    pub playfield_height: i32,
    /// Last level; clearing it ends the game
    pub max_level: u32,
    /// Score awarded per destroyed brick
    pub points_per_brick: u32,
    /// Host tick cadence in milliseconds
    pub tick_interval_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            max_level: MAX_LEVEL,
            points_per_brick: POINTS_PER_BRICK,
            tick_interval_ms: TICK_INTERVAL_MS,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        log::info!(
            "Loaded settings: {}x{} playfield, {} levels",
            settings.playfield_width,
            settings.playfield_height,
            settings.max_level
        );
        Ok(settings)
    }

    /// Reject settings the simulation cannot play on
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.playfield_width < MIN_PLAYFIELD_WIDTH {
            return Err(SettingsError::Invalid(format!(
                "playfield_width {} is below {MIN_PLAYFIELD_WIDTH}",
                self.playfield_width
            )));
        }
        if self.playfield_height < MIN_PLAYFIELD_HEIGHT {
            return Err(SettingsError::Invalid(format!(
                "playfield_height {} is below {MIN_PLAYFIELD_HEIGHT}",
                self.playfield_height
            )));
        }
        if self.max_level == 0 {
            return Err(SettingsError::Invalid("max_level must be at least 1".into()));
        }
        let grid_bottom = brick_grid_bottom(self.max_level);
        let paddle_top = i64::from(self.paddle_start().y);
        if grid_bottom >= paddle_top {
            return Err(SettingsError::Invalid(format!(
                "max_level {} lays bricks down to y={grid_bottom}, reaching the paddle row at y={paddle_top}",
                self.max_level
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(SettingsError::Invalid(
                "tick_interval_ms must be at least 1".into(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Rightmost x the paddle may rest at
    #[inline]
    pub fn paddle_max_x(&self) -> i32 {
        self.playfield_width - PADDLE_WIDTH
    }

    /// Rightmost x the ball may reach
    #[inline]
    pub fn ball_max_x(&self) -> i32 {
        self.playfield_width - BALL_DIAMETER
    }

    /// Paddle rest position: centred, near the bottom
    pub fn paddle_start(&self) -> IVec2 {
        IVec2::new(
            self.playfield_width / 2 - PADDLE_WIDTH / 2,
            self.playfield_height - PADDLE_BOTTOM_OFFSET,
        )
    }

    /// Ball serve position: playfield centre
    pub fn ball_start(&self) -> IVec2 {
        IVec2::new(self.playfield_width / 2, self.playfield_height / 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let settings = Settings::default();
        assert_eq!(settings.paddle_max_x(), 700);
        assert_eq!(settings.ball_max_x(), 785);
        assert_eq!(settings.paddle_start(), IVec2::new(350, 550));
        assert_eq!(settings.ball_start(), IVec2::new(400, 300));
        assert_eq!(settings.tick_interval(), Duration::from_millis(10));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "max_level": 3 }"#).unwrap();
        assert_eq!(settings.max_level, 3);
        assert_eq!(settings.playfield_width, PLAYFIELD_WIDTH);
        assert_eq!(settings.points_per_brick, POINTS_PER_BRICK);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = Settings::from_json("not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_json_rejects_unplayable() {
        let err = Settings::from_json(r#"{ "playfield_width": 300 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        let err = Settings::from_json(r#"{ "max_level": 0 }"#).unwrap_err();
        assert!(err.to_string().contains("max_level"));

        let err = Settings::from_json(r#"{ "tick_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
    }

    #[test]
    fn test_rejects_levels_whose_bricks_reach_the_paddle() {
        // Level 20 lays 25 rows down to y=760, past a 600px playfield
        let err = Settings::from_json(r#"{ "max_level": 20 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));
        assert!(err.to_string().contains("max_level 20"));

        let err = Settings::from_json(r#"{ "max_level": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, SettingsError::Invalid(_)));

        // Deepest level that still leaves room above the paddle at y=550
        assert!(Settings::from_json(r#"{ "max_level": 12 }"#).is_ok());
        assert!(Settings::from_json(r#"{ "max_level": 13 }"#).is_err());

        // A taller playfield makes room for more levels
        let tall = r#"{ "max_level": 20, "playfield_height": 900 }"#;
        assert_eq!(Settings::from_json(tall).unwrap().max_level, 20);
    }
}
