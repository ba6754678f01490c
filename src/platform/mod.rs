//! Platform abstraction layer
//!
//! The engine talks to the outside world only through these traits:
//! - Time/ticks (`Clock`)
//! - Input events (`InputSource`)
//! - Frame output (`RenderSink`)

pub mod input;
pub mod render;
pub mod time;

pub use input::{InputEvent, InputSource, Key, ScriptedInput};
pub use render::RenderSink;
pub use time::{Clock, SystemClock};
