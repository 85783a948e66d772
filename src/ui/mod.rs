// UI module - handles all user interface rendering

mod cards;
mod screens;
mod sensors;
mod stats;
mod ui;

// Re-export the public interface
pub use screens::draw_screen;
pub use ui::{UIState, draw_ui, process_egui};
