//! Fixed timestep simulation tick
//!
//! One call advances a match in progress by exactly one frame.

use super::ball::{self, ScoreEvent};
use super::collision::{Direction, hits_side_wall};
use super::entity::Entity;
use super::rng::RandomSource;
use super::score::MatchOutcome;
use super::state::GameWorld;

/// Player controls held during this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub scored: Option<ScoreEvent>,
    pub outcome: Option<MatchOutcome>,
}

/// Advance the match by one tick
///
/// Player paddle first, then the ball (and any point it produces), then the
/// computer paddle.
pub fn tick<R: RandomSource>(world: &mut GameWorld<R>, input: &TickInput) -> TickReport {
    let width = world.field.width;
    if input.left {
        nudge(&mut world.player, Direction::Left, width);
    }
    if input.right {
        nudge(&mut world.player, Direction::Right, width);
    }

    let mut report = TickReport::default();
    if let Some(event) = ball::advance(
        &mut world.ball,
        &world.computer,
        &world.player,
        world.field,
        world.spin_divisor,
    ) {
        report.scored = Some(event);
        report.outcome = world.score.record(event.scorer);
        log::debug!(
            "{:?} scores (player {} - computer {})",
            event.scorer,
            world.score.player,
            world.score.computer
        );
        world.reset_ball();
    }

    world
        .opponent
        .step(&mut world.computer, &world.ball, width, &mut world.rng);

    report
}

/// Move a paddle one speed step unless that would reach a side wall
fn nudge(paddle: &mut Entity, dir: Direction, field_width: i32) {
    let speed = paddle.vel.x;
    if hits_side_wall(paddle, dir, speed, field_width) {
        return;
    }
    paddle.pos.x += match dir {
        Direction::Left => -speed,
        Direction::Right => speed,
    };
}
