// src/gui/components/mod.rs
pub mod chart;
pub mod empty_state;
pub mod facts;
pub mod menu;
pub mod picker;
pub mod status_bar;
pub mod tabs;
