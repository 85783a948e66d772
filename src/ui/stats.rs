use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};
use species_game::simulation::event_log::{EventColor, EventLog};
use species_game::simulation::game::{Game, GameState};
use species_game::simulation::species::ColorClass;
use std::collections::VecDeque;
use std::ops::RangeInclusive;

use super::ui::UIState;

pub(super) fn draw_simulation_panel(ui: &mut egui::Ui, state: &UIState, game: &mut Game) {
    ui.heading("Environment");

    // frozen once the round is over, until the next click resets it
    let editable = !game.state.is_terminal();
    let mut environment = game.ecosystem.environment;
    if ui
        .add_enabled(editable, env_slider(&mut environment.temperature, 0.0..=45.0, "Temperature (°C)"))
        .changed()
    {
        game.set_temperature(environment.temperature);
    }
    if ui
        .add_enabled(editable, env_slider(&mut environment.humidity, 0.0..=100.0, "Humidity (%)"))
        .changed()
    {
        game.set_humidity(environment.humidity);
    }
    if ui
        .add_enabled(editable, env_slider(&mut environment.ph, 3.0..=11.0, "pH"))
        .changed()
    {
        game.set_ph(environment.ph);
    }

    let conditions = game.conditions();
    let progress_bar = egui::ProgressBar::new(conditions)
        .text(format!("Conditions {}%", (conditions * 100.0) as u32));
    ui.add(progress_bar);

    let params = &game.params;
    ui.small(format!(
        "Optimal: {:.0}-{:.0} °C, {:.0}-{:.0} %, pH {:.1}-{:.1}",
        params.temperature_range.min,
        params.temperature_range.max,
        params.humidity_range.min,
        params.humidity_range.max,
        params.ph_range.min,
        params.ph_range.max
    ));

    ui.separator();

    let ecosystem = &game.ecosystem;
    let state_text = match game.state {
        GameState::Cover | GameState::Menu => "Waiting to start",
        GameState::Playing => "Playing",
        GameState::GameOverAllDead => "All creatures died",
        GameState::GameOverTimeUp { .. } => "Time up",
    };
    ui.label(format!("State: {}", state_text));
    ui.label(format!("Frame: {}", ecosystem.frame));
    ui.label(format!("Creatures: {}", ecosystem.population()));
    ui.label(format!("Food: {}", ecosystem.food.len()));
    ui.label(format!("Births: {}  Deaths: {}", ecosystem.births, ecosystem.deaths));
    ui.label(format!("Avg Energy: {:.1}", ecosystem.average_energy()));

    let counts = ecosystem.population_by_class();
    ui.collapsing("Population by group", |ui| {
        for class in ColorClass::ALL {
            let [r, g, b] = class.rgb();
            ui.colored_label(
                egui::Color32::from_rgb(r, g, b),
                format!("{}: {}", class.name(), counts.get(&class).copied().unwrap_or(0)),
            );
        }
    });

    egui::CollapsingHeader::new("Recent events")
        .default_open(game.state == GameState::Playing)
        .show(ui, |ui| draw_recent_events(ui, &ecosystem.event_log));

    ui.separator();

    ui.heading("Population Over Time");
    draw_population_plot(ui, &state.population_history, &state.food_history);
}

fn draw_population_plot(
    ui: &mut egui::Ui,
    creature_data: &VecDeque<(f64, f64)>,
    food_data: &VecDeque<(f64, f64)>,
) {
    if creature_data.is_empty() && food_data.is_empty() {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(150.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nFrame: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            if !creature_data.is_empty() {
                let points: PlotPoints = creature_data.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(egui::Color32::from_rgb(100, 150, 255))
                    .name("Creatures");
                plot_ui.line(line);
            }

            if !food_data.is_empty() {
                let points: PlotPoints = food_data.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(egui::Color32::from_rgb(100, 200, 100))
                    .name("Food");
                plot_ui.line(line);
            }
        });
}

fn env_slider<'a>(value: &'a mut f32, range: RangeInclusive<f32>, text: &str) -> egui::Slider<'a> {
    egui::Slider::new(value, range).text(text)
}

fn event_color(color: EventColor) -> egui::Color32 {
    match color {
        EventColor::Birth => egui::Color32::from_rgb(100, 255, 100),
        EventColor::Death => egui::Color32::from_rgb(150, 150, 150),
        EventColor::Feeding => egui::Color32::from_rgb(255, 200, 100),
        EventColor::FoodPlaced => egui::Color32::from_rgb(100, 200, 255),
    }
}

fn draw_recent_events(ui: &mut egui::Ui, log: &EventLog) {
    if log.events().is_empty() {
        ui.weak("Nothing has happened yet.");
        return;
    }

    egui::Grid::new("recent_events")
        .num_columns(2)
        .striped(true)
        .show(ui, |ui| {
            for event in log.events() {
                ui.monospace(event.frame.to_string());
                ui.colored_label(event_color(event.color), &event.description);
                ui.end_row();
            }
        });
}
