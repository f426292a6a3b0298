// src/gui/pages/correlation.rs
use eframe::egui;

use crate::analysis::MetricGroup;
use crate::config::options::PageKind;
use crate::gui::components::chart;

use super::{AppCtx, Page};

pub struct CorrelationPage;

pub static PAGE: CorrelationPage = CorrelationPage;

impl Page for CorrelationPage {
    fn label(&self) -> &'static str { "Correlations" }
    fn kind(&self) -> PageKind { PageKind::Correlation }

    fn draw_controls(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        ui.horizontal(|ui| {
            ui.label("Metrics:");
            let before = ctx.gui.metrics;
            egui::ComboBox::from_id_salt("metric_group")
                .selected_text(before.label())
                .show_ui(ui, |ui| {
                    for g in MetricGroup::ALL {
                        ui.selectable_value(&mut ctx.gui.metrics, g, g.label());
                    }
                });
            ui.weak(ctx.gui.metrics.metric_names().join(", "));
            if ctx.gui.metrics != before {
                logf!("UI: Metric group {:?} → {:?}", before, ctx.gui.metrics);
            }
        });
    }

    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx) {
        if ctx.data.team_stats.is_none() {
            chart::empty(ui, "No team statistics loaded (team_stats.json missing or unreadable)");
            return;
        }
        let group = ctx.gui.metrics;
        chart::draw(ui, ctx.views.correlation(ctx.data, group));
    }
}
