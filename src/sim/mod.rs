//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, integer math only
//! - Injected RNG only
//! - No rendering or platform dependencies

pub mod ball;
pub mod collision;
pub mod entity;
pub mod opponent;
pub mod rng;
pub mod score;
pub mod state;
pub mod tick;

pub use ball::ScoreEvent;
pub use collision::{Direction, ball_hits_paddle, ball_hits_side_wall, hits_side_wall};
pub use entity::{Entity, Field};
pub use opponent::{AimPoint, Opponent};
pub use rng::{GameRng, RandomSource};
pub use score::{MatchOutcome, Score, Side};
pub use state::GameWorld;
pub use tick::{TickInput, TickReport, tick};
