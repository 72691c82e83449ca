use anyhow::{Context, Result};
use clap::Parser;
use listerm::backend::create_backend;
use listerm::config::Config;
use listerm::logger::Logger;
use listerm::ui;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "listerm")]
#[command(about = "Manage task lists from the terminal")]
struct Cli {
    /// Configuration file to use instead of the default lookup
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,

    /// JSON file with the task lists to start from (memory backend)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Record debug-level messages
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };
    if let Some(seed) = cli.seed {
        config.backend.seed_file = Some(seed);
    }

    let logger = Logger::from_config(config.logging.enabled)?;
    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    logger.install(level)?;

    let user = config.session.user();
    let backend = create_backend(&config.backend, &user.id)?;
    log::info!("Starting listerm with the {} backend", backend.backend_type());

    let result = ui::run_app(backend, user, &config, logger.clone()).await;

    logger.flush();
    result
}
