// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::{options::PageKind, state::GuiState},
    data::DataBundle,
};

use super::views::ViewCache;

pub mod betting;
pub mod correlation;
pub mod games;
pub mod summary;
pub mod team;
pub mod win_loss;

/// What a page gets to work with for one frame. Pages never touch disk;
/// reloading is the app's job.
pub struct AppCtx<'a> {
    pub data: &'a DataBundle,
    pub gui: &'a mut GuiState,
    pub views: &'a mut ViewCache,
}

pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Filters and pickers above the charts.
    fn draw_controls(&self, _ui: &mut egui::Ui, _ctx: &mut AppCtx) {}

    /// Page body, drawn inside a vertical scroll area.
    fn draw(&self, ui: &mut egui::Ui, ctx: &mut AppCtx);
}
