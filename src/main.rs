//! Bubble Pop headless driver
//!
//! Runs the simulation with a scripted player at a fixed tick rate and
//! reports the outcome. Usage: `bubble-pop [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use std::path::PathBuf;

    use anyhow::Context;
    use bubble_pop::Settings;
    use bubble_pop::sim::{GameEvent, GamePhase, GameState, TickInput, tick};
    use glam::Vec2;
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;

    env_logger::init();
    log::info!("Bubble Pop (headless) starting...");

    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(&PathBuf::from(path)),
        None => Settings::default(),
    };
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Seed: {}", seed);

    let geometry = settings.geometry();
    let mut state = GameState::new(seed, geometry);
    // Player aim is independent of the board's color stream
    let mut player = Pcg32::seed_from_u64(seed.wrapping_add(1));

    let mut input = TickInput {
        start: true,
        ..Default::default()
    };
    let mut shots = 0;
    let mut games = 1;
    let mut best = 0;

    while shots < settings.scripted_shots {
        if state.phase == GamePhase::Playing && state.projectile.is_none() {
            let target = Vec2::new(
                player.random_range(0.0..geometry.width),
                player.random_range(0.0..geometry.height * 0.5),
            );
            input.aim = Some(target);
            input.fire = Some(target);
        }

        tick(&mut state, &input);
        input = TickInput::default();

        for event in state.drain_events() {
            match event {
                GameEvent::Fired { .. } => shots += 1,
                GameEvent::Snapped { .. } if settings.dump_snapshots => {
                    let json = serde_json::to_string(&state.snapshot())
                        .context("serializing snapshot")?;
                    println!("{json}");
                }
                GameEvent::GameOver { score } => {
                    best = best.max(score);
                    println!("Game {games} over: score {score}");
                    if settings.auto_restart {
                        games += 1;
                        input.start = true;
                    }
                }
                _ => {}
            }
        }

        if state.phase == GamePhase::GameOver && !settings.auto_restart {
            break;
        }
    }

    best = best.max(state.score);
    println!(
        "Fired {shots} shots over {games} game(s); best score {best}, {} bubbles on board",
        state.board.len()
    );
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No headless driver on the web; the library is embedded by a host page
}
