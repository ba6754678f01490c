//! Axis-aligned entity geometry
//!
//! Everything on the playfield is a rectangle in integer screen coordinates:
//! `pos` is the top-left corner, `size` never changes after creation, and
//! `vel` is in pixels per tick.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Playfield bounds, origin at the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub width: i32,
    pub height: i32,
}

impl Field {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Top-left position that centers a `size` rectangle in the field
    pub fn centered(&self, size: IVec2) -> IVec2 {
        IVec2::new(self.width / 2 - size.x / 2, self.height / 2 - size.y / 2)
    }
}

/// A moving rectangle (paddle or ball)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub pos: IVec2,
    pub size: IVec2,
    /// Paddles only use `vel.x`, as a speed magnitude
    pub vel: IVec2,
}

impl Entity {
    pub fn new(pos: IVec2, size: IVec2, vel: IVec2) -> Self {
        Self { pos, size, vel }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Horizontal center, truncated like the rest of the integer math
    #[inline]
    pub fn center_x(&self) -> i32 {
        self.pos.x + self.size.x / 2
    }

    /// Whether the two rectangles touch or overlap horizontally
    pub fn overlaps_x(&self, other: &Entity) -> bool {
        self.left() <= other.right() && self.right() >= other.left()
    }

    /// Ball is at rest (waiting for a serve)
    pub fn is_at_rest(&self) -> bool {
        self.vel == IVec2::ZERO
    }
}
