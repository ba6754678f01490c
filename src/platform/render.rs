//! Render sink

use crate::renderer::Frame;

/// Receives one complete frame per processed tick
pub trait RenderSink {
    fn present(&mut self, frame: &Frame);
}

/// Keeps every presented frame (tests, recordings)
impl RenderSink for Vec<Frame> {
    fn present(&mut self, frame: &Frame) {
        self.push(frame.clone());
    }
}
