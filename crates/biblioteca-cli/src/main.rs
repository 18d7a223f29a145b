//! Biblioteca CLI
//!
//! Interactive text menu for managing a personal book collection.

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use biblioteca_core::{Config, Library};

mod output;
mod prompt;
mod shell;

use shell::Shell;

#[derive(Parser)]
#[command(name = "biblioteca")]
#[command(about = "Biblioteca - Personal book tracker")]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config);

    let library = Library::open_with_config(&config)
        .with_context(|| format!("Failed to open library at {:?}", config.db_path))?;

    Shell::new(library, io::stdin().lock(), io::stdout()).run()
}

/// Initialize file logging
///
/// Only initializes if `log_level` is set in the config file.
/// Logs go to a file so they never mix with the menu.
fn init_logging(config: &Config) {
    let Some(level) = config.log_level.as_deref() else {
        return;
    };

    let log_path = config.log_path();
    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file {:?}: {}", log_path, e);
            return;
        }
    };

    let env_filter = EnvFilter::new(format!("biblioteca_core={},biblioteca={}", level, level));

    // Ignore error if already initialized
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .try_init();

    info!("Logging initialized to {:?}", log_path);
}
