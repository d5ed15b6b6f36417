//! RPS-Plus CLI - Command-line interface
//!
//! Commands:
//! - play: Play one best-of-three game against the random bot
//! - simulate: Play many bot-vs-bot games and report statistics
//! - rules: Print the rules

mod play_cmd;
mod simulate_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use play_cmd::PlayArgs;
use simulate_cmd::SimulateArgs;

#[derive(Parser)]
#[command(name = "rpsplus")]
#[command(about = "Rock-Paper-Scissors-Plus referee")]
struct Cli {
    /// Random seed for reproducible bots
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game against the bot
    Play(PlayArgs),
    /// Simulate bot-vs-bot games
    Simulate(SimulateArgs),
    /// Print the rules
    Rules,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Simulate(args) => simulate_cmd::run(args, cli.seed),
        Commands::Rules => {
            println!("{}", rpsplus_core::referee::rules_banner());
            Ok(())
        }
    }
}

/// Logs go to stderr; RUST_LOG overrides the default level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
