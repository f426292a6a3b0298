// src/gui/pages/summary.rs
use eframe::egui::{self, RichText};

use crate::config::options::PageKind;
use crate::gui::components::{chart, facts};

use super::{AppCtx, Page};

pub struct SummaryPage;

pub static PAGE: SummaryPage = SummaryPage;

impl Page for SummaryPage {
    fn label(&self) -> &'static str { "Summary" }
    fn kind(&self) -> PageKind { PageKind::Summary }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        let view = ctx.views.summary(ctx.data);

        ui.heading("Data Collection Overview");
        match &view.overview {
            Some(rows) => facts::draw(ui, "summary_facts", rows),
            None => {
                ui.label(RichText::new("summary.json not found in the data directory").weak());
            }
        }
        ui.add_space(12.0);
        chart::pair(ui, &view.top_wins, &view.win_pct);
    }
}
