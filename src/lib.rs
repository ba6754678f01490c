//! Paddle Battle - a classic top/bottom Pong engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, ball, opponent, score)
//! - `app`: Stack-based screen state machine and fixed-timestep driver
//! - `renderer`: Declarative frame composition for each screen
//! - `platform`: Input, render and clock boundaries
//! - `settings`: Data-driven game constants

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::{App, AppState, StateStack, TickStatus};
pub use error::{ConfigError, ConfigResult};
pub use settings::Settings;

/// Default game constants
pub mod consts {
    /// Playfield size
    pub const WINDOW_WIDTH: i32 = 800;
    pub const WINDOW_HEIGHT: i32 = 600;

    /// Frames per second the driver aims for
    pub const FRAMES_PER_SECOND: u64 = 30;
    /// Minimum milliseconds between processed ticks
    pub const FRAME_INTERVAL_MS: u64 = 1000 / FRAMES_PER_SECOND;

    /// Paddle rows (top edge)
    pub const COMPUTER_Y: i32 = 30;
    pub const PLAYER_Y: i32 = 550;

    /// Paddle defaults
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 20;
    pub const PADDLE_SPEED: i32 = 10;

    /// Ball defaults
    pub const BALL_DIAMETER: i32 = 20;
    pub const BALL_SPEED_Y: i32 = 10;
    /// Paddle-hit offset divisor
    pub const BALL_SPIN_DIVISOR: i32 = 5;

    /// Computer ignores aim errors smaller than this
    pub const OPPONENT_DEAD_ZONE: i32 = 10;

    pub const WINNING_SCORE: u32 = 10;
}
