// src/gui/pages/team.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::components::{chart, facts, picker};

use super::{AppCtx, Page};

pub struct TeamPage;

pub static PAGE: TeamPage = TeamPage;

impl Page for TeamPage {
    fn label(&self) -> &'static str { "Team Analysis" }
    fn kind(&self) -> PageKind { PageKind::Team }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.horizontal(|ui| {
            if ctx.views.team_names.is_empty() {
                ui.label("No teams loaded (teams.json missing or empty)");
                return;
            }
            picker::team_combo(ui, "team_pick", &mut ctx.gui.team, &ctx.views.team_names, false);
        });
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        let Some(team) = ctx.gui.team.clone() else {
            chart::empty(ui, "Select a team");
            return;
        };
        let view = ctx.views.team(ctx.data, &team);

        ui.columns(2, |cols| {
            cols[0].heading(&view.team);
            facts::draw(&mut cols[0], "team_facts", &view.overview);
            chart::draw(&mut cols[1], &view.record);
        });
        ui.add_space(8.0);
        chart::pair(ui, &view.points_distribution, &view.points_trend);
        ui.add_space(8.0);
        chart::pair(ui, &view.shooting, &view.four_factors);
    }
}
