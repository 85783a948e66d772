use egui_macroquad::egui;
use species_game::shell::cards::{self, Card};
use species_game::shell::state::ShellState;

pub(super) fn draw_species_cards(ui: &mut egui::Ui, shell: &mut ShellState) {
    ui.heading("Soil Species");
    ui.label("Four groups of soil life live in the simulation.");
    ui.add_space(6.0);
    for card in cards::species_cards() {
        draw_card(ui, &card, shell);
    }
}

pub(super) fn draw_organism_cards(ui: &mut egui::Ui, shell: &mut ShellState) {
    ui.heading("Organisms");
    ui.label("Click a card to learn more.");
    ui.add_space(6.0);
    for card in cards::organism_cards() {
        draw_card(ui, &card, shell);
    }
}

fn draw_card(ui: &mut egui::Ui, card: &Card, shell: &mut ShellState) {
    let [r, g, b] = card.color;
    let accent = egui::Color32::from_rgb(r, g, b);

    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.5, accent))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.colored_label(accent, "●");
                ui.strong(card.title);
            });
            ui.label(egui::RichText::new(card.role).italics());
            if ui.button("More...").clicked() {
                shell.open(card.id);
            }
        });
    ui.add_space(4.0);
}

pub(super) fn draw_card_modal(egui_ctx: &egui::Context, shell: &mut ShellState) {
    let Some(id) = shell.modal() else {
        return;
    };
    let card = cards::card(id);
    let [r, g, b] = card.color;

    let mut open = true;
    egui::Window::new(card.title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(egui_ctx, |ui| {
            ui.colored_label(egui::Color32::from_rgb(r, g, b), card.role);
            ui.separator();
            ui.label(card.description);
            ui.add_space(8.0);
            if ui.button("Close").clicked() {
                shell.close();
            }
        });

    if !open {
        shell.close();
    }
}
