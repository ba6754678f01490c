//! Frame composition
//!
//! The engine never draws anything itself. Each processed tick it describes
//! the screen as a list of draw commands and hands that to the platform's
//! render sink.

pub mod frame;
pub mod screens;

pub use frame::{Color, DrawCommand, Frame, Rect};
