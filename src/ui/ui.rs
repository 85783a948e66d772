use egui_macroquad::egui;
use species_game::shell::state::{ShellState, Tab};
use species_game::simulation::ecosystem::Ecosystem;
use species_game::simulation::game::Game;
use species_game::telemetry::poller::TelemetryBoard;
use std::collections::VecDeque;

use super::{cards, sensors, stats};
use crate::graphics::SIDE_PANEL_WIDTH;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub shell: ShellState,
    pub population_history: VecDeque<(f64, f64)>,
    pub food_history: VecDeque<(f64, f64)>,
    /// Set while egui owns the pointer, so canvas clicks are ignored.
    pub pointer_over_ui: bool,
    last_update_frame: u64,
    update_interval: u64,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            shell: ShellState::new(),
            population_history: VecDeque::new(),
            food_history: VecDeque::new(),
            pointer_over_ui: false,
            last_update_frame: 0,
            update_interval: 30, // twice a second at 60 fps
        }
    }

    pub fn update_history(&mut self, ecosystem: &Ecosystem) {
        // ecosystem was reset
        if ecosystem.frame < self.last_update_frame {
            self.population_history.clear();
            self.food_history.clear();
            self.last_update_frame = 0;
        }

        if ecosystem.frame - self.last_update_frame >= self.update_interval {
            self.last_update_frame = ecosystem.frame;
            let frame = ecosystem.frame as f64;

            self.population_history
                .push_back((frame, ecosystem.population() as f64));
            self.food_history
                .push_back((frame, ecosystem.food.len() as f64));

            if self.population_history.len() > MAX_HISTORY_POINTS {
                self.population_history.pop_front();
            }
            if self.food_history.len() > MAX_HISTORY_POINTS {
                self.food_history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &mut UIState, game: &mut Game, board: &TelemetryBoard) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        egui_ctx.set_visuals(visuals);

        egui::SidePanel::right("shell_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .show(egui_ctx, |ui| {
                let mut tab = state.shell.tab();
                ui.horizontal(|ui| {
                    for candidate in Tab::ALL {
                        ui.selectable_value(&mut tab, candidate, candidate.label());
                    }
                });
                state.shell.select_tab(tab);
                ui.separator();

                egui::ScrollArea::vertical().show(ui, |ui| match tab {
                    Tab::Species => cards::draw_species_cards(ui, &mut state.shell),
                    Tab::Organisms => cards::draw_organism_cards(ui, &mut state.shell),
                    Tab::Sensors => sensors::draw_sensors_panel(ui, board),
                    Tab::Simulation => stats::draw_simulation_panel(ui, state, game),
                });
            });

        cards::draw_card_modal(egui_ctx, &mut state.shell);

        state.pointer_over_ui = egui_ctx.wants_pointer_input() || egui_ctx.is_pointer_over_area();
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}
