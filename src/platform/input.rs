//! Input events

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Escape,
    Space,
    Left,
    Right,
    Y,
    N,
    G,
    Q,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Non-blocking source of input events
pub trait InputSource {
    /// Next pending event, or None if nothing happened since the last poll
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Input source fed from a queue, for tests and scripted runs
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            queue: events.into_iter().collect(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    /// Queue a key press followed by its release
    pub fn tap(&mut self, key: Key) {
        self.push(InputEvent::KeyDown(key));
        self.push(InputEvent::KeyUp(key));
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl InputSource for ScriptedInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.pop_front()
    }
}
