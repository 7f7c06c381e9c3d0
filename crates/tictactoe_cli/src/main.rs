//! tictactoe - play against the computer in the terminal.

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_cli::{
    Cli, GameConfig, KeyboardInput, RawModeGuard, ScreenRenderer, Session, logging,
};
use tictactoe_engine::GameState;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;
    if let Some(seed) = cli.seed {
        config = config.with_seed(Some(seed));
    }
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    logging::init(config.log_file(), config.log_filter())?;
    info!(config = %cli.config.display(), seed = ?config.seed(), "Starting tictactoe");

    let rng = match config.seed() {
        Some(seed) => StdRng::seed_from_u64(*seed),
        None => StdRng::from_os_rng(),
    };

    let renderer = ScreenRenderer::new(std::io::stdout(), config.labels());
    let mut session = Session::new(KeyboardInput::new(), renderer, rng);
    let state = {
        let _raw = RawModeGuard::enable()?;
        session.run(GameState::new())?
    };

    info!(status = ?state.status(), "Exiting");
    Ok(())
}
