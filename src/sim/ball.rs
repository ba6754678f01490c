//! Ball movement, bounces and misses

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::{ball_hits_paddle, ball_hits_side_wall};
use super::entity::{Entity, Field};
use super::score::Side;

/// The ball left the field past a paddle; `scorer` gets the point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEvent {
    pub scorer: Side,
}

/// Advance the ball by one tick
///
/// Order matters and follows the classic game:
/// 1. Move by the current velocity.
/// 2. Reflect `vx` if the next move would reach a side wall. The position is
///    never clamped, the reflection only shows on the following move.
/// 3. Bounce off the player (bottom) paddle, then the computer (top) paddle.
///    The new `vx` is the hit offset from the paddle center divided by
///    `spin_divisor`, truncated toward zero; `vy` flips.
/// 4. Report a miss if the ball crossed the top or bottom edge.
///
/// The caller is responsible for recording the point and re-serving.
pub fn advance(
    ball: &mut Entity,
    top: &Entity,
    bottom: &Entity,
    field: Field,
    spin_divisor: i32,
) -> Option<ScoreEvent> {
    ball.pos += ball.vel;

    if ball_hits_side_wall(ball, field.width) {
        ball.vel.x = -ball.vel.x;
    }

    if ball_hits_paddle(ball, bottom, Side::Player) {
        bounce_off(ball, bottom, spin_divisor);
    }
    if ball_hits_paddle(ball, top, Side::Computer) {
        bounce_off(ball, top, spin_divisor);
    }

    if ball.top() < 0 {
        Some(ScoreEvent { scorer: Side::Player })
    } else if ball.bottom() > field.height {
        Some(ScoreEvent {
            scorer: Side::Computer,
        })
    } else {
        None
    }
}

fn bounce_off(ball: &mut Entity, paddle: &Entity, spin_divisor: i32) {
    let offset = ball.center_x() - paddle.center_x();
    ball.vel.x = offset / spin_divisor;
    ball.vel.y = -ball.vel.y;
}

/// Launch a resting ball toward the player. Returns false if it was already moving.
pub fn serve(ball: &mut Entity, speed_y: i32) -> bool {
    if !ball.is_at_rest() {
        return false;
    }
    ball.vel.y = speed_y;
    true
}

/// Put the ball back in the middle of the field, at rest
pub fn reset(ball: &mut Entity, field: Field) {
    ball.pos = field.centered(ball.size);
    ball.vel = IVec2::ZERO;
}
