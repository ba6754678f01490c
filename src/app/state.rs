//! Screens and their input handling
//!
//! Each screen is a variant carrying only what it needs. Input handlers return
//! a `Transition` instead of touching the stack themselves; the driver applies
//! it.

use crate::platform::{InputEvent, Key};
use crate::renderer::{Frame, screens};
use crate::sim::{self, GameWorld, MatchOutcome, RandomSource, TickInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Menu,
    /// Match in progress, with the movement keys currently held
    Playing(TickInput),
    /// "Quit Game (Y or N)?" prompt; also the bottom of the initial stack
    ConfirmExit,
    Won,
    Lost,
}

/// Stack change requested by the active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stay,
    Push(AppState),
    Pop,
    /// Pop, then push the quit prompt and the menu (start over)
    Restart,
    /// Empty the stack; the app ends
    Quit,
    /// Drop every screen and show this one alone
    ClearAndPush(AppState),
}

impl AppState {
    /// React to one input event. Events a screen does not care about are ignored.
    pub fn handle_event<R: RandomSource>(&mut self, event: InputEvent, world: &mut GameWorld<R>) -> Transition {
        use InputEvent::{KeyDown, KeyUp};

        match (self, event) {
            (_, InputEvent::Quit) => Transition::Quit,

            (AppState::Menu, KeyDown(Key::G)) => Transition::Push(AppState::Playing(TickInput::default())),
            (AppState::Menu, KeyDown(Key::Q | Key::Escape)) => Transition::Pop,

            (AppState::Playing(_), KeyDown(Key::Escape)) => Transition::Pop,
            (AppState::Playing(_), KeyDown(Key::Space)) => {
                world.serve();
                Transition::Stay
            }
            (AppState::Playing(held), KeyDown(Key::Left)) => {
                held.left = true;
                Transition::Stay
            }
            (AppState::Playing(held), KeyDown(Key::Right)) => {
                held.right = true;
                Transition::Stay
            }
            (AppState::Playing(held), KeyUp(Key::Left)) => {
                held.left = false;
                Transition::Stay
            }
            (AppState::Playing(held), KeyUp(Key::Right)) => {
                held.right = false;
                Transition::Stay
            }

            (AppState::ConfirmExit | AppState::Won | AppState::Lost, KeyDown(Key::Y | Key::Escape)) => {
                Transition::Pop
            }
            (AppState::ConfirmExit | AppState::Won | AppState::Lost, KeyDown(Key::N)) => Transition::Restart,

            _ => Transition::Stay,
        }
    }

    /// Per-frame logic. Only a match in progress has any; a finished match
    /// replaces the whole stack with the matching end screen.
    pub fn update<R: RandomSource>(&self, world: &mut GameWorld<R>) -> Transition {
        let AppState::Playing(held) = self else {
            return Transition::Stay;
        };

        match sim::tick(world, held).outcome {
            Some(MatchOutcome::PlayerWon) => {
                log::info!("Match over: player wins");
                Transition::ClearAndPush(AppState::Won)
            }
            Some(MatchOutcome::ComputerWon) => {
                log::info!("Match over: computer wins");
                Transition::ClearAndPush(AppState::Lost)
            }
            None => Transition::Stay,
        }
    }

    /// What this screen looks like right now
    pub fn draw<R>(&self, world: &GameWorld<R>) -> Frame {
        match self {
            AppState::Menu => screens::menu(),
            AppState::Playing(_) => screens::playing(world),
            AppState::ConfirmExit => screens::confirm_exit(),
            AppState::Won => screens::won(),
            AppState::Lost => screens::lost(),
        }
    }
}
