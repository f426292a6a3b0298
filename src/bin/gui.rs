// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::PathBuf;

use cbb_stats::{config::consts::{DEFAULT_OUT_DIR, LOG_FILE}, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init(LOG_FILE);

    // optional first argument: the data directory
    let dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("College Basketball Stats")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, dir) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
