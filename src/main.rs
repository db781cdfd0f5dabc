use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cell_snake::game::GameConfig;
use cell_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "cell_snake")]
#[command(version, about = "Snake on a fixed-size cell surface")]
struct Cli {
    /// TOML file with game settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between two moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas units per terminal cell
    #[arg(long, default_value = "5")]
    scale: u32,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "cell_snake=info".into()))
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_interval_ms = tick_ms;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    config.validate().context("Invalid configuration")?;

    let mut human_mode = HumanMode::new(config, cli.scale)?;
    human_mode.run().await?;

    Ok(())
}
