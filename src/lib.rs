// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod error;
pub mod config;
pub mod model;
pub mod core;
pub mod progress;

pub mod file;
pub mod csv;
pub mod store;
pub mod collect;
pub mod data;
pub mod analysis;
pub mod gui;

#[cfg(feature = "cli")]
pub mod cli;
