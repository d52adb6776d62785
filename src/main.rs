use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use opcalc::calculator::{AngleMode, Precision};
use opcalc::config::Config;
use opcalc::session::{LineInput, Repl};

/// Interactive calculator: pick an operator, enter operands, get a result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a config file (defaults to <config dir>/opcalc/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start in degrees mode for sin, cos and tan
    #[arg(long)]
    degrees: bool,

    /// Initial output precision: auto or 0-10
    #[arg(long, value_name = "DIGITS")]
    precision: Option<Precision>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    let mut state = config.session_state()?;
    if cli.degrees {
        state.angle_mode = AngleMode::Degrees;
    }
    if let Some(precision) = cli.precision {
        state.precision = precision;
    }
    info!(angle_mode = %state.angle_mode, precision = %state.precision, "Starting session");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut repl = Repl::new(LineInput::new(stdin.lock()), stdout.lock(), state)
        .with_export_path(config.export_path.clone())
        .with_banner(config.banner);
    repl.run()
}
