// src/gui/pages/win_loss.rs
use eframe::egui;

use crate::config::options::PageKind;
use crate::gui::components::{chart, facts, picker};

use super::{AppCtx, Page};

pub struct WinLossPage;

pub static PAGE: WinLossPage = WinLossPage;

impl Page for WinLossPage {
    fn label(&self) -> &'static str { "Win/Loss" }
    fn kind(&self) -> PageKind { PageKind::WinLoss }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.horizontal(|ui| {
            picker::team_combo(ui, "win_loss_team", &mut ctx.gui.win_loss_team, &ctx.views.game_teams, true);
        });
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        if ctx.data.games.is_none() {
            chart::empty(ui, "No game data loaded (games.json missing or unreadable)");
            return;
        }
        let view = ctx.views.win_loss(ctx.data, ctx.gui.win_loss_team.clone());

        if !view.facts.is_empty() {
            facts::draw(ui, "win_loss_facts", &view.facts);
            ui.add_space(8.0);
        }
        chart::pair(ui, &view.breakdown, &view.differential);
        ui.add_space(8.0);
        chart::draw(ui, &view.running_pct);
    }
}
