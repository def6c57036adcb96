mod app;
mod config;
mod error;
mod page;
mod paths;
mod sample;

use std::fs::{self, File};
use std::path::PathBuf;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::config::DemoConfig;
use crate::error::DemoError;

/// Install the file logger. The terminal is busy drawing the page, so logs
/// never go to stdout or stderr.
fn init_logging(config: &DemoConfig) -> Result<Option<PathBuf>, DemoError> {
    let level = LevelFilter::from(config.log_level);
    if level == LevelFilter::Off {
        return Ok(None);
    }

    let path = config
        .log_file
        .clone()
        .or_else(paths::log_file)
        .ok_or(DemoError::NoLogDir)?;
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path).map_err(|source| DemoError::LogFile {
        path: path.clone(),
        source,
    })?;
    WriteLogger::init(level, Config::default(), file)?;
    Ok(Some(path))
}

fn run(config: &DemoConfig) -> Result<(), DemoError> {
    if let Some(path) = init_logging(config)? {
        log::info!("logging to {}", path.display());
    }
    let users = sample::load_users()?;
    app::run(config, users)
}

fn main() {
    let config = DemoConfig::parse();
    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
