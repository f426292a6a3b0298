// src/bin/cli.rs
use cbb_stats::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
