//! Application driver
//!
//! Owns the screen stack, the game world and the frame clock. Each processed
//! tick it drains pending input into the active screen, runs that screen's
//! frame logic and presents the resulting frame. Ticks are gated to a fixed
//! interval; calls that arrive early do nothing.

pub mod stack;
pub mod state;

pub use stack::StateStack;
pub use state::{AppState, Transition};

use crate::error::ConfigResult;
use crate::platform::{Clock, InputSource, RenderSink};
use crate::settings::Settings;
use crate::sim::{GameWorld, RandomSource};

/// Result of one `run_tick` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Not enough time has passed since the last processed tick
    Idle,
    /// A tick was processed
    Ran,
    /// The screen stack is empty
    Terminated,
}

pub struct App<R> {
    settings: Settings,
    stack: StateStack,
    world: GameWorld<R>,
    /// Timestamp of the last processed tick
    frame_clock: u64,
    ticks: u64,
}

impl<R: RandomSource> App<R> {
    /// Validate `settings` and set up a session starting at `now_ms`
    pub fn new(settings: Settings, rng: R, now_ms: u64) -> ConfigResult<Self> {
        settings.validate()?;
        let world = GameWorld::new(&settings, rng);
        Ok(Self {
            settings,
            stack: StateStack::initial(),
            world,
            frame_clock: now_ms,
            ticks: 0,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stack(&self) -> &StateStack {
        &self.stack
    }

    /// Active screen, None once the app has ended
    pub fn state(&self) -> Option<&AppState> {
        self.stack.top()
    }

    pub fn world(&self) -> &GameWorld<R> {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut GameWorld<R> {
        &mut self.world
    }

    pub fn is_terminated(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of processed ticks so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Process one tick if at least one frame interval has passed since the last
    pub fn run_tick(
        &mut self,
        now_ms: u64,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
    ) -> TickStatus {
        if self.stack.is_empty() {
            return TickStatus::Terminated;
        }
        if now_ms.saturating_sub(self.frame_clock) < self.settings.frame_interval_ms {
            return TickStatus::Idle;
        }

        while let Some(event) = input.poll_event() {
            let Some(state) = self.stack.top_mut() else {
                break;
            };
            log::trace!("{:?} <- {:?}", state, event);
            let transition = state.handle_event(event, &mut self.world);
            self.apply(transition);
        }

        if let Some(state) = self.stack.top().copied() {
            let transition = state.update(&mut self.world);
            self.apply(transition);
        }

        // A finished match shows its end screen right away
        if let Some(state) = self.stack.top() {
            let frame = state.draw(&self.world);
            sink.present(&frame);
        }

        self.frame_clock = now_ms;
        self.ticks += 1;

        if self.stack.is_empty() {
            log::info!("Screen stack empty after {} ticks, shutting down", self.ticks);
            TickStatus::Terminated
        } else {
            TickStatus::Ran
        }
    }

    /// Drive the app until the screen stack empties; returns the ticks processed
    ///
    /// Between ticks the clock is asked to wait out the rest of the frame
    /// interval rather than spinning.
    pub fn run(
        &mut self,
        input: &mut impl InputSource,
        sink: &mut impl RenderSink,
        clock: &mut impl Clock,
    ) -> u64 {
        log::info!(
            "Running at {} ms per frame, first to {} wins",
            self.settings.frame_interval_ms,
            self.settings.winning_score
        );
        loop {
            let now = clock.now_ms();
            match self.run_tick(now, input, sink) {
                TickStatus::Terminated => break,
                TickStatus::Ran => {}
                TickStatus::Idle => {
                    let due = self.frame_clock.saturating_add(self.settings.frame_interval_ms);
                    clock.wait_ms(due.saturating_sub(now).max(1));
                }
            }
        }
        self.ticks
    }

    fn apply(&mut self, transition: Transition) {
        if transition == Transition::Stay {
            return;
        }
        let before = self.stack.top().copied();
        self.stack.apply(transition);
        log::info!("{:?}: {:?} -> {:?}", transition, before, self.stack.top());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{InputEvent, Key, ScriptedInput};
    use crate::renderer::Frame;
    use crate::sim::{GameRng, TickInput};

    fn app() -> App<GameRng> {
        App::new(Settings::default(), GameRng::new(9), 0).unwrap()
    }

    #[test]
    fn test_rejects_invalid_settings() {
        let mut settings = Settings::default();
        settings.winning_score = 0;
        assert!(App::new(settings, GameRng::new(1), 0).is_err());
    }

    #[test]
    fn test_tick_is_gated_by_interval() {
        let mut app = app();
        let mut input = ScriptedInput::default();
        let mut frames: Vec<Frame> = Vec::new();

        assert_eq!(app.run_tick(10, &mut input, &mut frames), TickStatus::Idle);
        assert_eq!(app.run_tick(32, &mut input, &mut frames), TickStatus::Idle);
        assert!(frames.is_empty());

        assert_eq!(app.run_tick(33, &mut input, &mut frames), TickStatus::Ran);
        assert_eq!(frames.len(), 1);
        // Clock restarts from the processed tick
        assert_eq!(app.run_tick(60, &mut input, &mut frames), TickStatus::Idle);
        assert_eq!(app.run_tick(66, &mut input, &mut frames), TickStatus::Ran);
        assert_eq!(app.ticks(), 2);
    }

    #[test]
    fn test_idle_tick_leaves_input_queued() {
        let mut app = app();
        let mut input = ScriptedInput::new([InputEvent::KeyDown(Key::G)]);
        let mut frames: Vec<Frame> = Vec::new();
        app.run_tick(5, &mut input, &mut frames);
        assert!(!input.is_empty());
        assert_eq!(app.state(), Some(&AppState::Menu));
    }

    #[test]
    fn test_start_game_draws_playfield() {
        let mut app = app();
        let mut input = ScriptedInput::new([InputEvent::KeyDown(Key::G)]);
        let mut frames: Vec<Frame> = Vec::new();
        app.run_tick(33, &mut input, &mut frames);

        assert_eq!(app.state(), Some(&AppState::Playing(TickInput::default())));
        let texts: Vec<_> = frames[0].texts().collect();
        assert_eq!(texts, vec!["Computer Score: 0", "Player Score: 0"]);
    }

    #[test]
    fn test_quit_event_terminates() {
        let mut app = app();
        let mut input = ScriptedInput::new([InputEvent::Quit, InputEvent::KeyDown(Key::G)]);
        let mut frames: Vec<Frame> = Vec::new();
        assert_eq!(app.run_tick(40, &mut input, &mut frames), TickStatus::Terminated);
        assert!(app.is_terminated());
        assert!(frames.is_empty());
        // Events after the app ended stay unread
        assert!(!input.is_empty());
        assert_eq!(app.run_tick(1000, &mut input, &mut frames), TickStatus::Terminated);
    }
}
