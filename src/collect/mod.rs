// src/collect/mod.rs
mod collect;
pub mod fetch;

pub use collect::{run, run_live, run_with, Failure, RunReport};
pub use fetch::Endpoint;
