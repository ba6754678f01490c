//! Computer-controlled paddle
//!
//! The computer does not play perfectly. It picks a spot on its own paddle
//! (left edge, right edge or center) and tries to line that spot up with the
//! ball. The choice is sticky: it is only re-rolled when the ball changes
//! horizontal direction, so the paddle tracks smoothly instead of jittering,
//! and an edge aim sometimes makes it miss.

use serde::{Deserialize, Serialize};

use super::collision::{Direction, hits_side_wall};
use super::entity::Entity;
use super::rng::RandomSource;

/// Spot on the computer's paddle it tries to hit the ball with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AimPoint {
    LeftEdge,
    RightEdge,
    Center,
}

impl AimPoint {
    const ALL: [AimPoint; 3] = [AimPoint::LeftEdge, AimPoint::RightEdge, AimPoint::Center];

    /// Uniform pick among the three aim points
    pub fn roll(rng: &mut impl RandomSource) -> Self {
        let index = rng.next_index(Self::ALL.len() as u32) as usize;
        Self::ALL[index % Self::ALL.len()]
    }

    /// Screen x of this aim point on `paddle`
    pub fn x_on(self, paddle: &Entity) -> i32 {
        match self {
            AimPoint::LeftEdge => paddle.left(),
            AimPoint::RightEdge => paddle.right(),
            AimPoint::Center => paddle.center_x(),
        }
    }
}

/// Steering state for the computer paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opponent {
    aim: Option<AimPoint>,
    /// Sign of the ball's `vx` when the aim was last rolled
    last_direction: i32,
    dead_zone: i32,
}

impl Opponent {
    pub fn new(dead_zone: i32) -> Self {
        Self {
            aim: None,
            last_direction: 0,
            dead_zone,
        }
    }

    /// Current aim point (None until the first step)
    pub fn aim(&self) -> Option<AimPoint> {
        self.aim
    }

    /// Move `paddle` one step toward the ball, returning the direction moved
    ///
    /// Does nothing while the aim point is inside the dead zone, or when the
    /// move would reach a side wall. Blocked moves are dropped, not clamped.
    pub fn step(
        &mut self,
        paddle: &mut Entity,
        ball: &Entity,
        field_width: i32,
        rng: &mut impl RandomSource,
    ) -> Option<Direction> {
        let direction = ball.vel.x.signum();
        let aim = match self.aim {
            Some(aim) if direction == self.last_direction => aim,
            _ => {
                let aim = AimPoint::roll(rng);
                log::trace!("Computer re-aims at {:?} (ball direction {})", aim, direction);
                self.aim = Some(aim);
                self.last_direction = direction;
                aim
            }
        };

        let aim_x = aim.x_on(paddle);
        let ball_x = ball.center_x();
        if (aim_x - ball_x).abs() < self.dead_zone {
            return None;
        }

        let dir = if aim_x > ball_x {
            Direction::Left
        } else {
            Direction::Right
        };
        let speed = paddle.vel.x;
        if hits_side_wall(paddle, dir, speed, field_width) {
            return None;
        }

        paddle.pos.x += match dir {
            Direction::Left => -speed,
            Direction::Right => speed,
        };
        Some(dir)
    }
}
