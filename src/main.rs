//! Paddle Battle headless demo
//!
//! Runs the real engine against a scripted player that starts a match, serves
//! whenever the ball is waiting and accepts the end screen's quit prompt. No
//! window is opened; frames go to the log instead.
//!
//! Usage: `paddle-battle [settings.json] [poll-budget]`

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use std::collections::VecDeque;

    use paddle_battle::platform::{InputEvent, InputSource, Key, RenderSink};
    use paddle_battle::renderer::Frame;

    /// Presses G, Space and Y every tick, then closes the window when its budget runs out
    pub struct DemoInput {
        burst: VecDeque<InputEvent>,
        polls_left: u64,
    }

    impl DemoInput {
        const BURST: [InputEvent; 3] = [
            InputEvent::KeyDown(Key::G),
            InputEvent::KeyDown(Key::Space),
            InputEvent::KeyDown(Key::Y),
        ];

        pub fn new(polls: u64) -> Self {
            Self {
                burst: VecDeque::from(Self::BURST),
                polls_left: polls,
            }
        }
    }

    impl InputSource for DemoInput {
        fn poll_event(&mut self) -> Option<InputEvent> {
            if self.polls_left == 0 {
                return Some(InputEvent::Quit);
            }
            self.polls_left -= 1;

            // An empty poll ends this tick's burst; the next tick starts a new one
            match self.burst.pop_front() {
                Some(event) => Some(event),
                None => {
                    self.burst.extend(Self::BURST);
                    None
                }
            }
        }
    }

    /// Traces every frame as JSON
    #[derive(Default)]
    pub struct LogSink {
        pub frames: u64,
    }

    impl RenderSink for LogSink {
        fn present(&mut self, frame: &Frame) {
            self.frames += 1;
            if log::log_enabled!(log::Level::Trace) {
                match serde_json::to_string(frame) {
                    Ok(json) => log::trace!("frame {}: {}", self.frames, json),
                    Err(err) => log::warn!("could not encode frame {}: {}", self.frames, err),
                }
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use paddle_battle::platform::{Clock, SystemClock};
    use paddle_battle::sim::GameRng;
    use paddle_battle::{App, Settings};

    env_logger::init();
    log::info!("Paddle Battle (headless demo) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(err) => {
                log::error!("{}", err);
                return std::process::ExitCode::FAILURE;
            }
        },
        None => Settings::default(),
    };
    let polls = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(polls)) => polls,
        Some(Err(err)) => {
            log::error!("invalid poll budget: {}", err);
            return std::process::ExitCode::FAILURE;
        }
        None => 6_000,
    };

    let rng = GameRng::new(rand::random());
    log::info!("Match seed: {}", rng.seed());

    let mut clock = SystemClock::new();
    let mut app = match App::new(settings, rng, clock.now_ms()) {
        Ok(app) => app,
        Err(err) => {
            log::error!("{}", err);
            return std::process::ExitCode::FAILURE;
        }
    };

    let mut input = demo::DemoInput::new(polls);
    let mut sink = demo::LogSink::default();
    let ticks = app.run(&mut input, &mut sink, &mut clock);

    let score = &app.world().score;
    log::info!(
        "Finished after {} ticks ({} frames), last score: player {} - computer {}",
        ticks,
        sink.frames,
        score.player,
        score.computer
    );
    std::process::ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser front end; the library is the product on wasm
}
