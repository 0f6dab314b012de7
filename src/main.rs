//! Flap Rush entry point
//!
//! The browser build is driven from JS through `flap_rush::web::WebGame`.
//! Natively this binary runs the game headless in demo mode and prints a
//! JSON summary of the runs:
//!
//! ```text
//! flap-rush [seed] [seconds]
//! ```

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::cell::RefCell;
    use std::rc::Rc;

    use serde::Serialize;

    use flap_rush::audio::NullAudio;
    use flap_rush::game::{Game, HostEvents};
    use flap_rush::persistence::MemoryStorage;
    use flap_rush::render::{DrawList, NoAssets, Screen};

    /// Simulated display refresh
    const FRAME_DT: f32 = 1.0 / 60.0;

    #[derive(Debug, Serialize)]
    struct RunReport {
        score: u32,
        stars: u32,
        frames: u64,
        seconds: f32,
    }

    #[derive(Debug, Serialize)]
    struct Summary {
        seed: u64,
        simulated_seconds: f32,
        best: u32,
        runs: Vec<RunReport>,
        /// Draw commands in the last rendered frame
        last_frame_commands: usize,
    }

    /// Collects game-over notifications
    #[derive(Clone, Default)]
    struct ReportHost(Rc<RefCell<Vec<(u32, u32)>>>);

    impl HostEvents for ReportHost {
        fn on_score_changed(&mut self, score: u32) {
            log::debug!("Score: {score}");
        }

        fn on_game_over_screen(&mut self, score: u32, high_score: u32, stars: u32) {
            log::info!("Game over screen: {score} (best {high_score}, {stars} stars)");
            self.0.borrow_mut().push((score, stars));
        }
    }

    fn parse_args() -> (u64, f32) {
        let mut args = std::env::args().skip(1);
        let seed = args
            .next()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0x5EED);
        let seconds = args
            .next()
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(120.0);
        (seed, seconds)
    }

    pub fn run() {
        env_logger::init();
        let (seed, seconds) = parse_args();
        log::info!("Flap Rush (native, headless) - seed {seed}, {seconds}s of demo play");

        let host = ReportHost::default();
        let mut game = Game::new(
            seed,
            Box::new(MemoryStorage::new()),
            Box::new(NullAudio),
            Box::new(host.clone()),
        );
        game.set_idle_mode(true);

        let mut runs = Vec::new();
        let mut run_start_frame = 0u64;
        let total_frames = (seconds / FRAME_DT).round() as u64;
        let mut draw_list = DrawList::new();

        for frame in 0..total_frames {
            game.frame(FRAME_DT);

            if let Screen::GameOver { .. } = game.screen() {
                let state = game.state();
                let stars = host.0.borrow().last().map_or(0, |(_, s)| *s);
                runs.push(RunReport {
                    score: state.score,
                    stars,
                    frames: state.frame_count,
                    seconds: state.elapsed,
                });
                log::info!(
                    "Run {} ended after {} frames with {} points",
                    runs.len(),
                    frame - run_start_frame,
                    state.score
                );
                game.restart();
                run_start_frame = frame;
            }
        }

        draw_list.clear();
        game.render(&NoAssets, &mut draw_list);

        let summary = Summary {
            seed,
            simulated_seconds: seconds,
            best: game.state().high_score,
            runs,
            last_frame_commands: draw_list.len(),
        };
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode summary: {e}"),
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    headless::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is flap_rush::web::WebGame, this is just to satisfy the compiler
}
