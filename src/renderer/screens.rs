//! Frame layout for each screen

use super::frame::{Color, Frame, Rect};
use crate::sim::{Entity, GameWorld};

/// Text size used on every screen
pub const TEXT_SIZE: u32 = 12;

/// Sprite sheet origins (each sprite is as large as its entity)
pub const PADDLE_SPRITE: (i32, i32) = (0, 0);
pub const BALL_SPRITE: (i32, i32) = (100, 0);

/// Score readout positions
pub const COMPUTER_SCORE_POS: (i32, i32) = (10, 10);
pub const PLAYER_SCORE_POS: (i32, i32) = (150, 10);

const PROMPT_X: i32 = 350;
const QUIT_PROMPT: &str = "Quit Game (Y or N)?";

fn line(frame: &mut Frame, text: &str, y: i32) {
    frame.text(text, PROMPT_X, y, TEXT_SIZE, Color::WHITE, Color::BLACK);
}

pub fn menu() -> Frame {
    let mut frame = Frame::cleared();
    line(&mut frame, "Start (G)ame", 250);
    line(&mut frame, "(Q)uit Game", 270);
    frame
}

pub fn confirm_exit() -> Frame {
    let mut frame = Frame::cleared();
    line(&mut frame, QUIT_PROMPT, 260);
    frame
}

pub fn won() -> Frame {
    let mut frame = Frame::cleared();
    line(&mut frame, "You Win!!!", 250);
    line(&mut frame, QUIT_PROMPT, 270);
    frame
}

pub fn lost() -> Frame {
    let mut frame = Frame::cleared();
    line(&mut frame, "You Lose.", 250);
    line(&mut frame, QUIT_PROMPT, 270);
    frame
}

fn sprite_src(origin: (i32, i32), entity: &Entity) -> Rect {
    Rect::new(origin.0, origin.1, entity.size.x, entity.size.y)
}

/// Paddles, ball and both scores
pub fn playing<R>(world: &GameWorld<R>) -> Frame {
    let mut frame = Frame::cleared();
    frame
        .sprite(sprite_src(PADDLE_SPRITE, &world.computer), Rect::of(&world.computer))
        .sprite(sprite_src(PADDLE_SPRITE, &world.player), Rect::of(&world.player))
        .sprite(sprite_src(BALL_SPRITE, &world.ball), Rect::of(&world.ball));

    let (cx, cy) = COMPUTER_SCORE_POS;
    let (px, py) = PLAYER_SCORE_POS;
    frame
        .text(
            format!("Computer Score: {}", world.score.computer),
            cx,
            cy,
            TEXT_SIZE,
            Color::GREEN,
            Color::BLACK,
        )
        .text(
            format!("Player Score: {}", world.score.player),
            px,
            py,
            TEXT_SIZE,
            Color::GREEN,
            Color::BLACK,
        );
    frame
}
