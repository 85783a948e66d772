use egui_macroquad::egui;
use species_game::shell::sparkline;
use species_game::telemetry::feed::{FeedKind, FeedReading};
use species_game::telemetry::poller::TelemetryBoard;

const CHART_WIDTH: f32 = 300.0;
const CHART_HEIGHT: f32 = 60.0;

pub(super) fn draw_sensors_panel(ui: &mut egui::Ui, board: &TelemetryBoard) {
    ui.heading("Live Sensors");
    ui.label("Refreshed every 30 seconds.");
    ui.add_space(6.0);

    for kind in FeedKind::ALL {
        let reading = board.reading(kind);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_width(ui.available_width());
            draw_reading(ui, kind, reading);
        });
        ui.add_space(4.0);
    }
}

fn draw_reading(ui: &mut egui::Ui, kind: FeedKind, reading: &FeedReading) {
    ui.horizontal(|ui| {
        ui.strong(kind.label());
        if reading.loading {
            ui.spinner();
        }
    });

    match reading.value {
        Some(value) => {
            ui.label(egui::RichText::new(format!("{:.1} {}", value, kind.unit())).size(22.0));
        }
        None if reading.loading => {
            ui.label("Loading...");
        }
        None => {
            ui.label("No data");
        }
    }

    if let Some(error) = &reading.error {
        ui.colored_label(egui::Color32::from_rgb(255, 110, 110), error);
    }

    if let Some(updated) = reading.last_updated {
        let local = updated.with_timezone(&chrono::Local);
        ui.small(format!("Updated {}", local.format("%H:%M:%S")));
    }
    if let Some(fetched) = reading.fetched_at {
        let age = chrono::Utc::now().signed_duration_since(fetched).num_seconds();
        ui.small(format!("Fetched {}s ago", age.max(0)));
    }

    if kind.keeps_history() && reading.history.len() > 1 {
        draw_sparkline(ui, &reading.history);
    }
}

fn draw_sparkline(ui: &mut egui::Ui, history: &[f64]) {
    let (response, painter) =
        ui.allocate_painter(egui::vec2(CHART_WIDTH, CHART_HEIGHT), egui::Sense::hover());
    let rect = response.rect;

    painter.rect_filled(rect, 2.0, egui::Color32::from_rgb(30, 30, 40));

    let points: Vec<egui::Pos2> = sparkline::normalize(history, rect.width(), rect.height())
        .into_iter()
        .map(|[x, y]| rect.min + egui::vec2(x, y))
        .collect();

    painter.add(egui::Shape::line(
        points,
        egui::Stroke::new(1.5, egui::Color32::from_rgb(100, 200, 255)),
    ));
}
