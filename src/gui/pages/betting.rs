// src/gui/pages/betting.rs
use eframe::egui::{self, RichText};
use egui_extras::DatePickerButton;

use crate::config::options::PageKind;
use crate::gui::components::{chart, facts, picker};

use super::{AppCtx, Page};

pub struct BettingPage;

pub static PAGE: BettingPage = BettingPage;

impl Page for BettingPage {
    fn label(&self) -> &'static str { "Betting Lines" }
    fn kind(&self) -> PageKind { PageKind::Betting }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        let b = &mut ctx.gui.betting;
        ui.horizontal(|ui| {
            picker::team_combo(ui, "betting_team", &mut b.team, &ctx.views.betting_teams, true);
            ui.separator();

            let Some((first, last)) = ctx.views.betting_span else {
                ui.label(RichText::new("No dated lines").weak());
                return;
            };

            if ui.checkbox(&mut b.range_enabled, "Date range").changed() {
                logf!("UI: Betting date range {}", if b.range_enabled { "on" } else { "off" });
            }
            if !b.range_enabled {
                ui.label(RichText::new(format!("{first} to {last}")).weak());
                return;
            }

            ui.label("From");
            ui.add(DatePickerButton::new(b.from.get_or_insert(first)).id_salt("betting_from"));
            ui.label("To");
            ui.add(DatePickerButton::new(b.to.get_or_insert(last)).id_salt("betting_to"));
        });
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        if ctx.data.betting_lines.is_none() {
            chart::empty(ui, "No betting lines loaded (betting_lines.json missing or unreadable)");
            return;
        }
        let filter = ctx.gui.betting.filter();
        let inverted = matches!((filter.from, filter.to), (Some(f), Some(t)) if f > t);
        let view = ctx.views.betting(ctx.data, filter);

        if inverted {
            ui.colored_label(ui.visuals().warn_fg_color, "Start date is after end date; nothing matches");
        }
        facts::draw(ui, "betting_facts", &view.facts);
        ui.add_space(8.0);
        chart::pair(ui, &view.spread_distribution, &view.over_under_distribution);
        ui.add_space(8.0);
        chart::pair(ui, &view.spread_trend, &view.total_vs_line);
    }
}
