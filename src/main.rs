use std::time::Instant;

use anyhow::{Context, Result};
use macroquad::prelude::*;
use species_game::config::AppConfig;
use species_game::simulation::game::Game;
use species_game::telemetry::client::HttpFeedFetcher;
use species_game::telemetry::poller::Poller;
use tracing::{error, info};

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Soil Life".to_owned(),
        window_width: 1280,
        window_height: 720,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_tracing();

    if let Err(err) = run().await {
        error!("{err:#}");
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .try_init();
}

async fn run() -> Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    let fetcher =
        HttpFeedFetcher::new(&config.telemetry).context("failed to build telemetry client")?;
    let mut poller = Poller::new(fetcher, &config.telemetry);
    let mut game = Game::new(config.simulation);
    let mut ui_state = ui::UIState::new();

    info!(
        base_url = %config.telemetry.base_url,
        interval_secs = config.telemetry.poll_interval_secs,
        "starting"
    );

    loop {
        poller.drain(chrono::Utc::now());
        poller.tick(Instant::now());

        let now_ms = get_time() * 1000.0;

        if is_mouse_button_pressed(MouseButton::Left) && !ui_state.pointer_over_ui {
            let screen_pos = Vec2::from(mouse_position());
            if graphics::on_canvas(screen_pos, &game.params) {
                game.click(graphics::to_world(screen_pos, &game.params), now_ms);
            }
        }

        game.update(now_ms);
        ui_state.update_history(&game.ecosystem);

        clear_background(Color::from_rgba(20, 20, 24, 255));
        graphics::draw_canvas_background(&game.params);

        if !ui::draw_screen(&game) {
            graphics::draw_food(&game.ecosystem.food, &game.params);
            graphics::draw_creatures(&game.ecosystem.creatures, &game.params);
            graphics::draw_hud(&game, now_ms);
        }

        ui::draw_ui(&mut ui_state, &mut game, poller.board());
        ui::process_egui();

        next_frame().await
    }
}
