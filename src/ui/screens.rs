use macroquad::prelude::*;
use species_game::simulation::game::{Game, GameState};
use species_game::simulation::params::Params;

/// Draws the full-canvas screens shown outside a running round.
///
/// # Returns
///
/// `true` if a screen was drawn and the simulation canvas should be skipped.
pub fn draw_screen(game: &Game) -> bool {
    match game.state {
        GameState::Cover => {
            draw_centered(
                &game.params,
                &[
                    ("Soil Life", 56.0, WHITE),
                    ("An ecosystem in your hands", 28.0, LIGHTGRAY),
                    ("Click to continue", 22.0, GRAY),
                ],
            );
            true
        }
        GameState::Menu => {
            draw_centered(
                &game.params,
                &[
                    ("How to play", 40.0, WHITE),
                    ("Click the soil to drop food for hungry creatures.", 22.0, LIGHTGRAY),
                    ("Tune temperature, humidity and pH in the Simulation tab.", 22.0, LIGHTGRAY),
                    ("Keep them alive for 60 seconds.", 22.0, LIGHTGRAY),
                    ("Click to start", 22.0, GRAY),
                ],
            );
            true
        }
        GameState::GameOverAllDead => {
            draw_centered(
                &game.params,
                &[
                    ("Game over", 48.0, RED),
                    ("Every creature has died.", 26.0, LIGHTGRAY),
                    ("Click to play again", 22.0, GRAY),
                ],
            );
            true
        }
        GameState::GameOverTimeUp { survivors } => {
            let line = format!("{} creatures survived.", survivors);
            draw_centered(
                &game.params,
                &[
                    ("Time's up!", 48.0, GOLD),
                    (line.as_str(), 26.0, LIGHTGRAY),
                    ("Click to play again", 22.0, GRAY),
                ],
            );
            true
        }
        GameState::Playing => false,
    }
}

fn draw_centered(params: &Params, lines: &[(&str, f32, Color)]) {
    let canvas = crate::graphics::canvas_size(params);
    let center_x = canvas.x / 2.0;
    let mut y = canvas.y / 2.0 - lines.len() as f32 * 20.0;

    for (text, font_size, color) in lines {
        let text_size = measure_text(text, None, *font_size as u16, 1.0);
        draw_text(text, center_x - text_size.width / 2.0, y, *font_size, *color);
        y += font_size * 1.5;
    }
}
