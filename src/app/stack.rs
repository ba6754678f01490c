//! Screen stack

use super::state::{AppState, Transition};

/// Stack of screens; the top one is active, an empty stack means the app is done
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateStack {
    states: Vec<AppState>,
}

impl StateStack {
    pub fn new() -> Self {
        Self { states: Vec::new() }
    }

    /// Stack the app starts with: the quit prompt at the bottom, the menu on top
    ///
    /// Leaving the menu exposes the quit prompt, and answering yes there pops
    /// the last entry and ends the app.
    pub fn initial() -> Self {
        Self {
            states: vec![AppState::ConfirmExit, AppState::Menu],
        }
    }

    pub fn push(&mut self, state: AppState) {
        self.states.push(state);
    }

    pub fn pop(&mut self) -> Option<AppState> {
        self.states.pop()
    }

    pub fn clear(&mut self) {
        self.states.clear();
    }

    pub fn top(&self) -> Option<&AppState> {
        self.states.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut AppState> {
        self.states.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Bottom to top
    pub fn as_slice(&self) -> &[AppState] {
        &self.states
    }

    /// Carry out a transition requested by the active screen
    pub fn apply(&mut self, transition: Transition) {
        match transition {
            Transition::Stay => {}
            Transition::Push(state) => self.push(state),
            Transition::Pop => {
                self.pop();
            }
            Transition::Restart => {
                self.pop();
                self.push(AppState::ConfirmExit);
                self.push(AppState::Menu);
            }
            Transition::Quit => self.clear(),
            Transition::ClearAndPush(state) => {
                self.clear();
                self.push(state);
            }
        }
    }
}
