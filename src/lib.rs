//! garmin2labradar library root.
//! Exposes CLI parser, high-level run() function, and the conversion modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::Cli;
use config::Config;
use errors::AppResult;

/// Apply the command line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(id) = &cli.device_id {
        cfg.device_id = id.clone();
    }
    if let Some(no) = &cli.series_no {
        cfg.series_no = no.clone();
    }
    if cli.strict {
        cfg.strict = true;
    }
    if cli.no_dated_dir {
        cfg.dated_subdir = false;
    }
    if let Some(dir) = &cli.out_dir {
        cfg.output_dir = Some(dir.clone());
    }
    if let Some(d) = cli.delimiter {
        cfg.delimiter = Some(d);
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ carica config (file esplicito oppure quello standard)
    let mut cfg = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // 3️⃣ override da riga di comando
    apply_overrides(&cli, &mut cfg);

    cli::commands::convert::handle(&cli, &cfg)
}
