// src/gui/components/menu.rs
use eframe::egui;

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.menu_button("File", |ui| {
            if ui.button("Refresh Data").clicked() {
                logf!("UI: Refresh");
                app.reload();
                ui.close();
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                logf!("UI: Exit");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });
        ui.menu_button("Help", |ui| {
            if ui.button("About").clicked() {
                app.state.show_about = true;
                ui.close();
            }
        });
    });
}

pub fn about_window(ctx: &egui::Context, open: &mut bool) {
    egui::Window::new("About")
        .open(open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.heading(concat!("cbb_stats ", env!("CARGO_PKG_VERSION")));
            ui.label(env!("CARGO_PKG_DESCRIPTION"));
            ui.label("Charts are built from the JSON files the collector writes.");
        });
}
