// src/gui/components/empty_state.rs
//
// Shown instead of the tabs when the data directory holds no dataset at all.

use eframe::egui::{self, RichText};

use crate::config::consts::API_KEY_VAR;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 4.0);
        ui.heading("No data found");
        ui.add_space(8.0);
        ui.label(format!("Nothing to show in {}.", app.state.data_dir.display()));
        ui.label(format!(
            "Run the collector first: set {API_KEY_VAR} (or put it in .env), then `collect --teams 10`."
        ));
        ui.label(RichText::new("Each dataset is loaded on its own, so even a partial run is enough.").weak());
        ui.add_space(12.0);
        if ui.button("Refresh").clicked() {
            logf!("UI: Refresh from empty state");
            app.reload();
        }
    });
}
