// src/gui/pages/games.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::components::{chart, picker};

use super::{AppCtx, Page};

pub struct GamesPage;

pub static PAGE: GamesPage = GamesPage;

impl Page for GamesPage {
    fn label(&self) -> &'static str { "Game Analysis" }
    fn kind(&self) -> PageKind { PageKind::Games }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.horizontal(|ui| {
            picker::team_combo(ui, "games_team", &mut ctx.gui.games_team, &ctx.views.game_teams, true);
        });
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        if ctx.data.games.is_none() {
            chart::empty(ui, "No game data loaded (games.json missing or unreadable)");
            return;
        }
        let view = ctx.views.games(ctx.data, ctx.gui.games_team.clone());

        ui.label(format!("{} scored games, {} without a final score", view.scored, view.unscored));
        ui.add_space(4.0);
        chart::pair(ui, &view.total_points, &view.differential);
        ui.add_space(8.0);
        chart::draw(ui, &view.timeline);
    }
}
