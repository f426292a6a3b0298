// src/gui/components/picker.rs
use eframe::egui;

pub const ALL_TEAMS: &str = "All Teams";

/// Team combo box. With `allow_all`, a leading "All Teams" entry maps to `None`.
/// Returns true when the selection changed this frame.
pub fn team_combo(
    ui: &mut egui::Ui,
    id: &str,
    selected: &mut Option<String>,
    options: &[String],
    allow_all: bool,
) -> bool {
    let before = selected.clone();
    ui.label("Team:");
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected.as_deref().unwrap_or(ALL_TEAMS).to_owned())
        .width(240.0)
        .height(400.0)
        .show_ui(ui, |ui| {
            if allow_all {
                ui.selectable_value(selected, None, ALL_TEAMS);
            }
            for name in options {
                ui.selectable_value(selected, Some(name.clone()), name);
            }
        });

    let changed = *selected != before;
    if changed {
        logf!("UI: {id} → {}", selected.as_deref().unwrap_or(ALL_TEAMS));
    }
    changed
}
