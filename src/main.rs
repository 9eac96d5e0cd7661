use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::ai::{RandomAgent, SamplingStrategy};
use gomoku::config::AppConfig;
use gomoku::game::GameState;
use gomoku::ui::App;

/// Play five-in-a-row against a random opponent.
#[derive(Parser)]
#[command(name = "gomoku", about = "Play Gomoku against a random opponent")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Override number of board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override number of board columns
    #[arg(long)]
    cols: Option<usize>,

    /// How the opponent draws its cell: rejection or empty-cells
    #[arg(long)]
    strategy: Option<String>,

    /// Seed the opponent for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the board on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(strategy) = cli.strategy.as_deref() {
        config.opponent.strategy = match strategy {
            "rejection" => SamplingStrategy::Rejection,
            "empty-cells" => SamplingStrategy::EmptyCells,
            other => bail!(
                "unknown strategy '{}' (expected 'rejection' or 'empty-cells')",
                other
            ),
        };
    }
    if cli.seed.is_some() {
        config.opponent.seed = cli.seed;
    }
    config.validate().context("invalid settings")?;

    let game_state = GameState::new(config.board.rows, config.board.cols)?;
    let opponent = match config.opponent.seed {
        Some(seed) => RandomAgent::with_seed(config.opponent.strategy, seed),
        None => RandomAgent::new(config.opponent.strategy),
    };

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut app = App::new(game_state, stdin, stdout, opponent);
    app.run().context("game aborted")?;

    Ok(())
}
