//! Match state
//!
//! `GameWorld` is the single owner of everything the simulation mutates. The
//! app driver holds one and lends it out by `&mut` for each tick.

use glam::IVec2;

use super::ball;
use super::entity::{Entity, Field};
use super::opponent::Opponent;
use super::rng::RandomSource;
use super::score::Score;
use crate::settings::Settings;

/// Paddles, ball, score and computer steering for one session
#[derive(Debug, Clone)]
pub struct GameWorld<R> {
    pub field: Field,
    /// Computer paddle (top)
    pub computer: Entity,
    /// Player paddle (bottom)
    pub player: Entity,
    pub ball: Entity,
    pub score: Score,
    pub opponent: Opponent,
    pub rng: R,
    /// Vertical speed a serve gives the ball
    pub serve_speed: i32,
    pub spin_divisor: i32,
}

impl<R: RandomSource> GameWorld<R> {
    /// Lay out a fresh session: paddles centered on their rows, ball centered at rest
    ///
    /// `settings` are expected to be validated already.
    pub fn new(settings: &Settings, rng: R) -> Self {
        let field = Field::new(settings.window.width, settings.window.height);
        let p = settings.paddle;
        let paddle_size = IVec2::new(p.width, p.height);
        let paddle_x = field.centered(paddle_size).x;
        let paddle_speed = IVec2::new(p.speed, 0);

        let ball_size = IVec2::splat(settings.ball.diameter);

        Self {
            field,
            computer: Entity::new(IVec2::new(paddle_x, p.computer_y), paddle_size, paddle_speed),
            player: Entity::new(IVec2::new(paddle_x, p.player_y), paddle_size, paddle_speed),
            ball: Entity::new(field.centered(ball_size), ball_size, IVec2::ZERO),
            score: Score::new(settings.winning_score),
            opponent: Opponent::new(settings.opponent.dead_zone),
            rng,
            serve_speed: settings.ball.speed_y,
            spin_divisor: settings.ball.spin_divisor,
        }
    }

    /// Launch the ball if it is waiting for a serve
    pub fn serve(&mut self) -> bool {
        let served = ball::serve(&mut self.ball, self.serve_speed);
        if served {
            log::debug!("Ball served");
        }
        served
    }

    /// Ball back to center, at rest
    pub fn reset_ball(&mut self) {
        ball::reset(&mut self.ball, self.field);
    }
}
