// src/gui/components/facts.rs
use eframe::egui::{self, RichText};

use crate::analysis::Facts;

/// Two-column label/value grid.
pub fn draw(ui: &mut egui::Ui, id: &str, facts: &Facts) {
    egui::Grid::new(id)
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            for (label, value) in facts {
                ui.label(label);
                ui.label(RichText::new(value).strong());
                ui.end_row();
            }
        });
}
