//! Draw commands handed to the render sink
//!
//! A `Frame` is built from scratch every processed tick and owns all of its
//! data, so a sink may keep it around (or ship it to another thread) without
//! ever seeing a half-updated world.

use serde::{Deserialize, Serialize};

use crate::sim::Entity;

/// RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Score readout
    pub const GREEN: Color = Color::rgb(66, 239, 16);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Screen or sprite-sheet rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Screen region currently covered by `entity`
    pub fn of(entity: &Entity) -> Self {
        Self::new(entity.pos.x, entity.pos.y, entity.size.x, entity.size.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Fill the whole screen with black
    Clear,
    /// Copy `src` from the sprite sheet to `dest` on screen
    Sprite { src: Rect, dest: Rect },
    /// Shaded text with its top-left corner at (x, y)
    Text {
        text: String,
        x: i32,
        y: i32,
        size: u32,
        fg: Color,
        bg: Color,
    },
}

/// Everything to show for one tick, in draw order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Start a frame with a cleared screen
    pub fn cleared() -> Self {
        Self {
            commands: vec![DrawCommand::Clear],
        }
    }

    pub fn sprite(&mut self, src: Rect, dest: Rect) -> &mut Self {
        self.commands.push(DrawCommand::Sprite { src, dest });
        self
    }

    pub fn text(&mut self, text: impl Into<String>, x: i32, y: i32, size: u32, fg: Color, bg: Color) -> &mut Self {
        self.commands.push(DrawCommand::Text {
            text: text.into(),
            x,
            y,
            size,
            fg,
            bg,
        });
        self
    }

    /// All text lines in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
