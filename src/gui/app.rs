// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{config::state::GuiState, data::DataBundle};

use super::{
    components,
    pages::{AppCtx, Page},
    router,
    views::ViewCache,
};

pub fn run(options: eframe::NativeOptions, data_dir: PathBuf) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "College Basketball Stats",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(GuiState::new(data_dir))))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: GuiState,

    // what is on disk, as of the last load
    pub data: DataBundle,
    pub views: ViewCache,

    pub status: String,
}

impl App {
    pub fn new(state: GuiState) -> Self {
        let mut app = Self {
            state,
            data: DataBundle::default(),
            views: ViewCache::default(),
            status: s!("Idle"),
        };
        app.reload();
        logf!("Init: data dir={}, page={:?}", app.state.data_dir.display(), app.state.page);
        app
    }

    /// Re-read every dataset from the data directory. The only way loaded
    /// data ever changes while the window is open.
    pub fn reload(&mut self) {
        self.data = DataBundle::load(&self.state.data_dir);
        self.views = ViewCache::new(&self.data);
        self.state.retain_known(&self.views.team_names, &self.views.game_teams);
        self.status = self.data.status_line();
        logf!("Reload: {}", self.status);
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_for(self.state.page) }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            components::menu::draw(ui, self);
        });
        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });
        components::menu::about_window(ctx, &mut self.state.show_about);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.data.is_empty() {
                components::empty_state::draw(ui, self);
                return;
            }

            components::tabs::draw(ui, self);
            ui.separator();

            let page = self.current_page();
            let mut actx = AppCtx { data: &self.data, gui: &mut self.state, views: &mut self.views };
            page.draw_controls(ui, &mut actx);
            ui.separator();

            egui::ScrollArea::vertical()
                .id_salt(("page_scroll", page.label()))
                .auto_shrink([false; 2])
                .show(ui, |ui| page.draw(ui, &mut actx));
        });
    }
}
