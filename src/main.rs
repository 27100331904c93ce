//! Gatehouse - A themed terminal login screen
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use gatehouse_app::config;
use tracing::info;

/// Gatehouse - A themed terminal login screen
#[derive(Parser, Debug)]
#[command(name = "gatehouse")]
#[command(about = "A themed terminal login screen", long_about = None)]
struct Args {
    /// Directory holding .gatehouse/config.toml
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Write a default .gatehouse/config.toml and exit
    #[arg(long)]
    init: bool,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let base_path = args
        .path
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    if args.init {
        let path = config::init_config_dir(&base_path)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    gatehouse_core::logging::init()?;

    let settings = config::load_settings(&base_path);
    info!("Loaded settings from {}", base_path.display());

    gatehouse_tui::run(settings).await?;
    Ok(())
}
