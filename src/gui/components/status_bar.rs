// src/gui/components/status_bar.rs
use eframe::egui::{self, RichText};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    ui.horizontal(|ui| {
        ui.label(&app.status);
        let notes = &app.data.notes;
        if !notes.is_empty() {
            ui.separator();
            ui.label(RichText::new(format!("{} warning(s)", notes.len())).color(ui.visuals().warn_fg_color))
                .on_hover_text(notes.join("\n"));
        }
    });
}
