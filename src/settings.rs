//! Game settings
//!
//! Every tunable the simulation reads lives here. Settings are plain JSON so a
//! partial document only overrides the fields it names; anything missing keeps
//! its default from [`crate::consts`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, ConfigResult};

/// Largest accepted window side; edge plus step sums stay inside `i32`
pub const MAX_WINDOW_EXTENT: i32 = i32::MAX / 4;

/// Playfield dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        }
    }
}

/// Paddle size, speed and the rows both paddles live on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub width: i32,
    pub height: i32,
    /// Pixels moved per tick while a direction is held
    pub speed: i32,
    /// Top edge of the computer's paddle
    pub computer_y: i32,
    /// Top edge of the player's paddle
    pub player_y: i32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
            computer_y: COMPUTER_Y,
            player_y: PLAYER_Y,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallSettings {
    pub diameter: i32,
    /// Vertical speed given on serve
    pub speed_y: i32,
    /// Paddle-hit offset is divided by this to get the new horizontal speed
    pub spin_divisor: i32,
}

impl Default for BallSettings {
    fn default() -> Self {
        Self {
            diameter: BALL_DIAMETER,
            speed_y: BALL_SPEED_Y,
            spin_divisor: BALL_SPIN_DIVISOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpponentSettings {
    /// The computer holds still while its aim point is closer than this to the ball
    pub dead_zone: i32,
}

impl Default for OpponentSettings {
    fn default() -> Self {
        Self {
            dead_zone: OPPONENT_DEAD_ZONE,
        }
    }
}

/// All governing constants of a match
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window: WindowSettings,
    pub paddle: PaddleSettings,
    pub ball: BallSettings,
    pub opponent: OpponentSettings,
    /// Minimum milliseconds between two processed ticks
    pub frame_interval_ms: u64,
    /// Points needed to win a match
    pub winning_score: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            paddle: PaddleSettings::default(),
            ball: BallSettings::default(),
            opponent: OpponentSettings::default(),
            frame_interval_ms: FRAME_INTERVAL_MS,
            winning_score: WINNING_SCORE,
        }
    }
}

impl Settings {
    /// Parse and validate settings from a JSON document
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file on disk
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Pretty-printed JSON, suitable for writing a settings file
    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> ConfigResult<()> {
        let w = self.window;
        let p = self.paddle;
        let b = self.ball;

        for (field, extent) in [("window.width", w.width), ("window.height", w.height)] {
            if extent <= 0 || extent > MAX_WINDOW_EXTENT {
                return Err(ConfigError::invalid(
                    field,
                    format!("must be between 1 and {}, got {}", MAX_WINDOW_EXTENT, extent),
                ));
            }
        }

        if p.width <= 0 || p.width >= w.width {
            return Err(ConfigError::invalid(
                "paddle.width",
                format!("must be between 1 and {}, got {}", w.width - 1, p.width),
            ));
        }
        if p.height <= 0 || p.height >= w.height {
            return Err(ConfigError::invalid(
                "paddle.height",
                format!("must be between 1 and {}, got {}", w.height - 1, p.height),
            ));
        }
        if p.speed <= 0 || p.speed > w.width - p.width {
            return Err(ConfigError::invalid(
                "paddle.speed",
                format!("must be between 1 and {}, got {}", w.width - p.width, p.speed),
            ));
        }
        for (field, y) in [("paddle.computer_y", p.computer_y), ("paddle.player_y", p.player_y)] {
            if y < 0 || y > w.height - p.height {
                return Err(ConfigError::invalid(
                    field,
                    format!("paddle row {} does not fit a window {} high", y, w.height),
                ));
            }
        }
        if p.computer_y > p.player_y - p.height {
            return Err(ConfigError::invalid(
                "paddle.computer_y",
                "computer paddle must sit above the player paddle",
            ));
        }

        if b.diameter <= 0 || b.diameter >= w.width || b.diameter >= w.height {
            return Err(ConfigError::invalid(
                "ball.diameter",
                format!("must be positive and fit the window, got {}", b.diameter),
            ));
        }
        if b.speed_y <= 0 || b.speed_y >= w.height {
            return Err(ConfigError::invalid(
                "ball.speed_y",
                format!("must be between 1 and {}, got {}", w.height - 1, b.speed_y),
            ));
        }
        if b.spin_divisor <= 0 {
            return Err(ConfigError::invalid(
                "ball.spin_divisor",
                format!("must be positive, got {}", b.spin_divisor),
            ));
        }

        if self.opponent.dead_zone < 0 {
            return Err(ConfigError::invalid(
                "opponent.dead_zone",
                format!("must not be negative, got {}", self.opponent.dead_zone),
            ));
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::invalid("frame_interval_ms", "must be at least 1"));
        }
        if self.winning_score == 0 {
            return Err(ConfigError::invalid("winning_score", "must be at least 1"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.winning_score, 10);
        assert_eq!(settings.frame_interval_ms, 1000 / 30);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "winning_score": 3, "ball": { "spin_divisor": 4 } }"#).unwrap();
        assert_eq!(settings.winning_score, 3);
        assert_eq!(settings.ball.spin_divisor, 4);
        assert_eq!(settings.ball.diameter, BALL_DIAMETER);
        assert_eq!(settings.paddle, PaddleSettings::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_rejects_zero_winning_score() {
        let err = Settings::from_json(r#"{ "winning_score": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "winning_score", .. }));
    }

    #[test]
    fn test_rejects_negative_dead_zone() {
        let err = Settings::from_json(r#"{ "opponent": { "dead_zone": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "opponent.dead_zone", .. }));
    }

    #[test]
    fn test_rejects_zero_frame_interval() {
        let err = Settings::from_json(r#"{ "frame_interval_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "frame_interval_ms", .. }));
    }

    #[test]
    fn test_huge_paddle_row_is_rejected_not_overflowed() {
        let err = Settings::from_json(r#"{ "paddle": { "computer_y": 2147483647 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle.computer_y", .. }));

        let err = Settings::from_json(r#"{ "paddle": { "height": 2147483647 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle.height", .. }));

        let err = Settings::from_json(r#"{ "paddle": { "player_y": 2147483647 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle.player_y", .. }));
    }

    #[test]
    fn test_rejects_paddle_speed_beyond_travel() {
        let mut settings = Settings::default();
        settings.paddle.speed = i32::MAX;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle.speed", .. }));

        // Largest step that still fits the free travel is fine
        settings.paddle.speed = settings.window.width - settings.paddle.width;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_rejects_ball_faster_than_window() {
        let mut settings = Settings::default();
        settings.ball.speed_y = i32::MAX;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball.speed_y", .. }));

        settings.ball.speed_y = settings.window.height;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_ball_larger_than_window() {
        let mut settings = Settings::default();
        settings.ball.diameter = i32::MAX;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "ball.diameter", .. }));
    }

    #[test]
    fn test_rejects_oversized_window() {
        let mut settings = Settings::default();
        settings.window.height = i32::MAX;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window.height", .. }));
    }

    #[test]
    fn test_rejects_negative_window() {
        let mut settings = Settings::default();
        settings.window.width = -800;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "window.width", .. }));
    }

    #[test]
    fn test_rejects_zero_spin_divisor() {
        let mut settings = Settings::default();
        settings.ball.spin_divisor = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_rejects_paddle_wider_than_window() {
        let mut settings = Settings::default();
        settings.paddle.width = settings.window.width;
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "paddle.width", .. }));
    }

    #[test]
    fn test_rejects_swapped_paddle_rows() {
        let mut settings = Settings::default();
        settings.paddle.computer_y = 550;
        settings.paddle.player_y = 30;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse settings"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load("/definitely/not/here/settings.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
