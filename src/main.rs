use foragers::simulation::ecosystem::Ecosystem;
use foragers::simulation::params::Params;
use foragers::simulation::stats::StatsHistory;
use macroquad::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod graphics;

const MAX_TICKS_PER_FRAME: u32 = 64;

fn load_params() -> Params {
    let Some(path) = std::env::args().nth(1) else {
        return Params::default();
    };
    match Params::load_from_file(&path) {
        Ok(params) => {
            info!(%path, "loaded params");
            params
        }
        Err(e) => {
            warn!(%path, error = %e, "failed to load params, using defaults");
            Params::default()
        }
    }
}

#[macroquad::main("Foragers")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = load_params();
    let mut history = StatsHistory::new(params.stats_interval, params.max_stats_samples);
    let stats_path = params.stats_path.clone();
    let mut ecosystem = Ecosystem::new(params);

    let mut paused = false;
    let mut ticks_per_frame: u32 = 1;

    info!("Starting forager simulation");

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }
        if is_key_pressed(KeyCode::R) {
            ecosystem.restart();
            history.clear();
        }
        if is_key_pressed(KeyCode::P) {
            paused = !paused;
        }
        if is_key_pressed(KeyCode::Right) {
            ticks_per_frame = (ticks_per_frame + 1).min(MAX_TICKS_PER_FRAME);
        }
        if is_key_pressed(KeyCode::Left) {
            ticks_per_frame = ticks_per_frame.saturating_sub(1).max(1);
        }

        if !paused {
            for _ in 0..ticks_per_frame {
                let summary = ecosystem.tick();
                history.record(&summary);
                if summary.extinct {
                    paused = true;
                    break;
                }
            }
        }

        clear_background(BLACK);
        graphics::draw_food(&ecosystem);
        graphics::draw_organisms(&ecosystem);
        graphics::draw_hud(&ecosystem, ticks_per_frame, paused);

        next_frame().await
    }

    if let Some(path) = stats_path {
        match history.save_to_file(&path) {
            Ok(()) => info!(%path, samples = history.len(), "saved statistics"),
            Err(e) => warn!(%path, error = %e, "failed to save statistics"),
        }
    }
}
