// src/gui/components/chart.rs
//
// Draws an `analysis::Chart`. Plots go through egui_plot; the correlation
// heatmap is a painted grid since egui_plot has no heatmap primitive.

use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, LineStyle, Plot, PlotUi, Points};

use crate::analysis::{chart::from_day_number, Chart, ChartBody, Matrix, Series, Style, XAxis};

pub const HEIGHT: f32 = 260.0;
const CELL: [f32; 2] = [72.0, 28.0];

const FILL: Color32 = Color32::from_rgb(70, 130, 180);
const ACCENT: Color32 = Color32::from_rgb(214, 39, 40);

pub fn draw(ui: &mut egui::Ui, chart: &Chart) {
    ui.vertical(|ui| {
        ui.label(RichText::new(&chart.title).strong());
        match &chart.body {
            ChartBody::Placeholder(why) => empty(ui, why),
            ChartBody::Heatmap(m) => heatmap(ui, &chart.title, m),
            _ => plot(ui, chart),
        }
        if let Some(note) = &chart.note {
            ui.label(RichText::new(note).small().weak());
        }
    });
}

/// Two charts side by side.
pub fn pair(ui: &mut egui::Ui, left: &Chart, right: &Chart) {
    ui.columns(2, |cols| {
        draw(&mut cols[0], left);
        draw(&mut cols[1], right);
    });
}

/// Framed box with a centred message, same footprint as a plot.
pub fn empty(ui: &mut egui::Ui, why: &str) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), HEIGHT), Sense::hover());
    let visuals = ui.visuals();
    ui.painter().rect_stroke(rect, 4.0, visuals.widgets.noninteractive.bg_stroke, egui::StrokeKind::Inside);
    ui.painter().text(
        rect.center(),
        Align2::CENTER_CENTER,
        why,
        FontId::proportional(14.0),
        visuals.weak_text_color(),
    );
}

/// Axis formatter that shows `labels[i]` at integer position `i`.
fn categories(labels: Vec<String>) -> impl Fn(GridMark, &RangeInclusive<f64>) -> String {
    move |mark, _| {
        let i = mark.value.round();
        if (mark.value - i).abs() > 1e-6 || i < 0.0 {
            return s!();
        }
        labels.get(i as usize).cloned().unwrap_or_default()
    }
}

fn plot(ui: &mut egui::Ui, chart: &Chart) {
    let mut plot = Plot::new(&chart.title)
        .height(HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone());

    if chart.x_axis == XAxis::Days {
        plot = plot.x_axis_formatter(|mark, _| {
            from_day_number(mark.value).map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
        });
    }

    match &chart.body {
        ChartBody::Bars { bars, horizontal: false } => {
            plot = plot.x_axis_formatter(categories(bars.iter().map(|b| b.label.clone()).collect()));
        }
        ChartBody::Bars { bars, horizontal: true } => {
            // first bar on top
            plot = plot.y_axis_formatter(categories(bars.iter().rev().map(|b| b.label.clone()).collect()));
        }
        ChartBody::Lines(series) if series.len() > 1 => plot = plot.legend(Legend::default()),
        ChartBody::Scatter { diagonal: true, .. } => plot = plot.legend(Legend::default()),
        _ => {}
    }

    plot.show(ui, |pui| match &chart.body {
        ChartBody::Histogram(bins) => {
            let bars = bins
                .iter()
                .map(|b| Bar::new(b.mid(), b.count as f64).width(b.width()))
                .collect();
            pui.bar_chart(BarChart::new(&chart.title, bars).color(FILL));
        }
        ChartBody::Bars { bars, horizontal } => {
            let n = bars.len();
            let items = bars
                .iter()
                .enumerate()
                .map(|(i, b)| {
                    let pos = if *horizontal { (n - 1 - i) as f64 } else { i as f64 };
                    Bar::new(pos, b.value).width(0.7).name(&b.label)
                })
                .collect();
            let chart = BarChart::new(&chart.title, items).color(FILL);
            pui.bar_chart(if *horizontal { chart.horizontal() } else { chart });
        }
        ChartBody::Lines(series) => series.iter().for_each(|s| line(pui, s)),
        ChartBody::Scatter { points, diagonal } => {
            pui.points(Points::new("Games", points.clone()).radius(3.0).color(FILL));
            if *diagonal {
                let lo = points.iter().flat_map(|p| *p).fold(f64::INFINITY, f64::min);
                let hi = points.iter().flat_map(|p| *p).fold(f64::NEG_INFINITY, f64::max);
                pui.line(
                    Line::new("Perfect prediction", vec![[lo, lo], [hi, hi]])
                        .style(LineStyle::dashed_loose())
                        .color(ACCENT),
                );
            }
        }
        ChartBody::Heatmap(_) | ChartBody::Placeholder(_) => {}
    });
}

fn line(pui: &mut PlotUi, s: &Series) {
    match s.style {
        Style::Solid => pui.line(Line::new(&s.name, s.points.clone()).color(FILL).width(2.0)),
        Style::Dashed => pui.line(
            Line::new(&s.name, s.points.clone())
                .style(LineStyle::dashed_loose())
                .color(ACCENT)
                .width(2.0),
        ),
        Style::Markers => {
            pui.line(Line::new(&s.name, s.points.clone()).color(FILL).width(1.0));
            pui.points(Points::new(&s.name, s.points.clone()).radius(3.0).color(FILL));
        }
    }
}

/// Diverging blue-white-red for -1..=1; grey for undefined.
fn diverging(v: f64) -> Color32 {
    if v.is_nan() {
        return Color32::from_gray(170);
    }
    let t = v.clamp(-1.0, 1.0);
    let fade = |c: u8, k: f64| (255.0 - (255.0 - f64::from(c)) * k).round() as u8;
    let (r, g, b) = if t >= 0.0 { (214, 39, 40) } else { (31, 119, 180) };
    let k = t.abs();
    Color32::from_rgb(fade(r, k), fade(g, k), fade(b, k))
}

fn heatmap(ui: &mut egui::Ui, id: &str, m: &Matrix) {
    egui::ScrollArea::horizontal().id_salt(("heatmap_scroll", id)).show(ui, |ui| {
        egui::Grid::new(id).spacing([2.0, 2.0]).show(ui, |ui| {
            ui.label("");
            for l in &m.labels {
                ui.label(RichText::new(l).small());
            }
            ui.end_row();

            for (label, row) in m.labels.iter().zip(&m.cells) {
                ui.label(RichText::new(label).small());
                for v in row {
                    let (rect, resp) = ui.allocate_exact_size(egui::vec2(CELL[0], CELL[1]), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, diverging(*v));
                    let text = if v.is_nan() { s!("n/a") } else { format!("{v:.2}") };
                    ui.painter().text(rect.center(), Align2::CENTER_CENTER, text, FontId::monospace(12.0), Color32::BLACK);
                    if v.is_nan() {
                        resp.on_hover_text("Undefined: one of the metrics is constant");
                    }
                }
                ui.end_row();
            }
        });
    });
}
