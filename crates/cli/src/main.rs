//! tanktrack CLI - interactive water tank construction tracker.

mod session;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tanktrack_core::Level;
use tanktrack_store::{default_site, load_seed, TankStore};

use session::Session;

#[derive(Parser)]
#[command(name = "tanktrack")]
#[command(about = "Water tank construction progress tracker", long_about = None)]
struct Cli {
    /// JSON seed file describing the site (defaults to the built-in one)
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Level tab to start on
    #[arg(long, default_value = "N00")]
    level: String,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level: tracing::Level = cli.log_level.parse()?;
    tracing_subscriber::fmt().with_max_level(log_level).init();

    let seed = match &cli.seed {
        Some(path) => load_seed(path)
            .with_context(|| format!("loading seed file {}", path.display()))?,
        None => default_site(),
    };
    let level: Level = cli.level.parse()?;

    let store = TankStore::from_seed(seed);
    let stdin = io::stdin();
    Session::new(store, level).run(stdin.lock(), io::stdout())
}
