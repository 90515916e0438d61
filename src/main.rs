//! Brick Breaker entry point
//!
//! Headless native host: runs the simulation on its fixed interval with the
//! autopilot at the paddle, builds a frame each loop and prints the final
//! snapshot as JSON. Windowing and text rendering belong to a real host.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::thread;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use clap::Parser;

    use brick_breaker::renderer::{draw_list, tessellate};
    use brick_breaker::sim::{GameState, TickInput, tick};
    use brick_breaker::{FixedStep, Settings};

    /// Upper bound on simulated play so a ball stuck in a loop cannot run forever
    const MAX_DEMO_TICKS: u64 = 500_000;

    #[derive(Parser, Debug)]
    #[command(name = "brick-breaker")]
    #[command(about = "Run a headless brick breaker game with the autopilot at the paddle")]
    struct Cli {
        /// Settings JSON file (defaults to an 800x600 playfield, 5 levels)
        settings: Option<PathBuf>,
        /// Run ticks back-to-back instead of waiting out the tick interval
        #[arg(long)]
        fast: bool,
    }

    fn load_settings(path: Option<&Path>) -> Result<Settings> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Settings::default());
        };
        let json = fs::read_to_string(path)
            .with_context(|| format!("cannot read settings file {}", path.display()))?;
        Settings::from_json(&json)
            .with_context(|| format!("cannot load settings from {}", path.display()))
    }

    pub fn run() -> Result<()> {
        env_logger::init();
        let cli = Cli::parse();
        log::info!("Brick Breaker (headless) starting...");

        let settings = load_settings(cli.settings.as_deref())?;

        let mut state = GameState::new(settings);
        for event in &state.events {
            log::trace!("{event:?}");
        }
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut step = FixedStep::new(settings.tick_interval());
        let mut last_time = Instant::now();
        let mut frames: u64 = 0;

        while !state.is_over() && state.time_ticks < MAX_DEMO_TICKS {
            let ticks = if cli.fast {
                1
            } else {
                thread::sleep(step.interval());
                let now = Instant::now();
                let ticks = step.advance(now - last_time);
                last_time = now;
                ticks
            };

            for _ in 0..ticks {
                tick(&mut state, &input);
                for event in &state.events {
                    log::trace!("{event:?}");
                }
            }

            // Stand-in for presentation: build the frame a renderer would draw
            let frame = draw_list(&state.snapshot(), &settings);
            let vertices = tessellate(&frame);
            frames += 1;
            if frames % 1000 == 0 {
                log::debug!(
                    "Frame {frames}: {} commands, {} vertices, score {}",
                    frame.len(),
                    vertices.len(),
                    state.score
                );
            }
        }

        if !state.is_over() {
            log::warn!("Stopped after {MAX_DEMO_TICKS} ticks without finishing");
        }

        let json = serde_json::to_string_pretty(&state.snapshot())
            .context("failed to serialize final snapshot")?;
        println!("{json}");
        Ok(())
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Browser hosts drive `brick_breaker::sim::tick` directly
}
