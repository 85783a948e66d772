use macroquad::prelude::*;
use species_game::simulation::creature::Creature;
use species_game::simulation::food::FoodSource;
use species_game::simulation::game::Game;
use species_game::simulation::params::Params;

/// Width reserved on the right for the egui side panel.
pub const SIDE_PANEL_WIDTH: f32 = 360.0;

/// Maps world coordinates onto the canvas left of the side panel.
trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Vec2 {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        *self * canvas_scale(params)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        self * canvas_scale(params)
    }
}

/// Size of the simulation canvas in screen pixels.
pub fn canvas_size(params: &Params) -> Vec2 {
    vec2(params.box_width, params.box_height).to_screen(params)
}

fn canvas_scale(params: &Params) -> f32 {
    let canvas_w = (screen_width() - SIDE_PANEL_WIDTH).max(1.0);
    let scale_x = canvas_w / params.box_width;
    let scale_y = screen_height() / params.box_height;
    scale_x.min(scale_y)
}

/// Converts a screen position back into world units.
pub fn to_world(screen_pos: Vec2, params: &Params) -> Vec2 {
    screen_pos / canvas_scale(params)
}

/// Checks whether a screen position falls on the simulation canvas.
pub fn on_canvas(screen_pos: Vec2, params: &Params) -> bool {
    let size = canvas_size(params);
    screen_pos.x >= 0.0 && screen_pos.y >= 0.0 && screen_pos.x < size.x && screen_pos.y < size.y
}

pub fn draw_canvas_background(params: &Params) {
    let size = canvas_size(params);
    draw_rectangle(0.0, 0.0, size.x, size.y, Color::from_rgba(46, 36, 28, 255));
}

pub fn draw_food(food: &[FoodSource], params: &Params) {
    for food_item in food {
        let screen_pos = food_item.pos.to_screen(params);
        let alpha = (food_item.energy / params.food_energy).clamp(0.2, 1.0);
        draw_circle(
            screen_pos.x,
            screen_pos.y,
            food_item.radius.to_screen(params),
            Color::new(0.45, 0.85, 0.35, alpha),
        );
    }
}

pub fn draw_creatures(creatures: &[Creature], params: &Params) {
    for creature in creatures {
        let screen_pos = creature.pos.to_screen(params);
        let screen_radius = (creature.size / 2.0).to_screen(params);
        let [r, g, b] = creature.species.color_class().rgb();

        draw_circle(
            screen_pos.x,
            screen_pos.y,
            screen_radius,
            Color::from_rgba(r, g, b, 255),
        );

        // facing
        let nose = screen_pos + Vec2::from_angle(creature.heading) * screen_radius * 1.4;
        draw_line(screen_pos.x, screen_pos.y, nose.x, nose.y, 2.0, WHITE);

        // energy bar
        let bar_width = 20.0;
        let bar_height = 2.0;
        let bar_x = screen_pos.x - bar_width / 2.0;
        let bar_y = screen_pos.y - screen_radius - bar_height - 2.0;
        draw_rectangle(
            bar_x,
            bar_y,
            bar_width,
            bar_height,
            Color::from_rgba(100, 100, 100, 200),
        );
        draw_rectangle(
            bar_x,
            bar_y,
            bar_width * (creature.energy / params.max_energy).clamp(0.0, 1.0),
            bar_height,
            Color::from_rgba(255, 220, 60, 255),
        );
    }
}

pub fn draw_hud(game: &Game, now_ms: f64) {
    let text = format!(
        "Time left: {:.0}s   Creatures: {}   Food: {}   Conditions: {:.0}%",
        (game.remaining_ms(now_ms) / 1000.0).ceil(),
        game.ecosystem.population(),
        game.ecosystem.food.len(),
        game.conditions() * 100.0
    );
    draw_text(&text, 12.0, 24.0, 22.0, WHITE);
}
