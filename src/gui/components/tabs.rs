// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. Views are cached
// per tab, so switching never recomputes anything by itself.

use eframe::egui;
use crate::gui::{app::App, router};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        for page in router::all_pages() {
            let selected = page.kind() == app.state.page;

            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                logf!("UI: Tab switch {:?} → {:?}", app.state.page, page.kind());
                app.state.page = page.kind();
            }
        }
    });
}
