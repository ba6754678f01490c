//! Collision detection for rectangles on the playfield
//!
//! All checks are look-ahead or band tests on integer edges; none of them
//! move anything. Resolving a hit is up to the caller.

use super::entity::Entity;
use super::score::Side;

/// Horizontal direction of a prospective move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Direction of travel for a signed horizontal velocity (None when still)
    pub fn of(vx: i32) -> Option<Self> {
        match vx.signum() {
            -1 => Some(Direction::Left),
            1 => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Check whether moving `step` pixels in `dir` would touch or cross a side wall
///
/// Touching the wall counts as a hit, so a paddle moved only while this
/// returns false always keeps a gap to both walls.
pub fn hits_side_wall(entity: &Entity, dir: Direction, step: i32, field_width: i32) -> bool {
    let next_edge = match dir {
        Direction::Left => entity.left() - step,
        Direction::Right => entity.right() + step,
    };
    next_edge <= 0 || next_edge >= field_width
}

/// Check whether the ball's next move along its own velocity reaches a side wall
pub fn ball_hits_side_wall(ball: &Entity, field_width: i32) -> bool {
    match Direction::of(ball.vel.x) {
        Some(dir) => hits_side_wall(ball, dir, ball.vel.x.abs(), field_width),
        None => false,
    }
}

/// Check whether the ball is caught by the paddle defending `side`
///
/// The ball must be moving toward that paddle, its leading edge must be inside
/// the paddle's vertical band, and the two must overlap horizontally. A ball
/// already moving away is never caught, so a bounce cannot re-trigger.
pub fn ball_hits_paddle(ball: &Entity, paddle: &Entity, side: Side) -> bool {
    let in_band = match side {
        // Player paddle is at the bottom; leading edge is the ball's bottom
        Side::Player => ball.vel.y > 0 && (paddle.top()..=paddle.bottom()).contains(&ball.bottom()),
        Side::Computer => ball.vel.y < 0 && (paddle.top()..=paddle.bottom()).contains(&ball.top()),
    };
    in_band && ball.overlaps_x(paddle)
}
