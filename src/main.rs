//! Laser Duel entry point
//!
//! Runs a scripted, headless duel in real time and logs the outcome.
//! Set `LASER_DUEL_TUNING` to a JSON file to override gameplay tuning and
//! `RUST_LOG` to control verbosity.

use anyhow::{Context, Result};

use laser_duel::Game;
use laser_duel::Tuning;
use laser_duel::assets::ProceduralAssets;
use laser_duel::platform::{RecordingSurface, ScriptedInput, ThrottledClock};

/// Environment variable naming an optional tuning file
const TUNING_ENV: &str = "LASER_DUEL_TUNING";

/// Strafing passes in the demo script
const DEMO_PASSES: u32 = 8;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Laser Duel (headless) starting...");

    let tuning = match std::env::var_os(TUNING_ENV) {
        Some(path) => Tuning::load(&path)
            .with_context(|| format!("failed to load tuning from {}", path.to_string_lossy()))?,
        None => Tuning::default(),
    };

    let mut assets = ProceduralAssets::new();
    let mut game = Game::new(tuning, &mut assets).context("failed to load sprites")?;

    let mut input = ScriptedInput::demo(DEMO_PASSES);
    let mut surface = RecordingSurface::new();
    let mut clock = ThrottledClock::new();

    let summary = game.run(&mut input, &mut surface, &mut clock);
    log::info!(
        "Duel over after {} frames ({} ms): health {}, {} hits taken, {} player shots, {} enemy shots",
        summary.frames,
        summary.elapsed_ms,
        summary.player_health,
        summary.hits_taken,
        summary.player_shots,
        summary.enemy_shots
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
