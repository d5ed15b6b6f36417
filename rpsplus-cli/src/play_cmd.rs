//! Play command - one game against the random bot
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: play_game(), report_final()
//! - Level 3: play_round()
//! - Level 4: output utilities

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use clap::Args;

use rpsplus_core::referee::{final_summary, rules_banner};
use rpsplus_core::{BotConfig, GameState, MoveSource, RandomBot, Referee, MAX_ROUNDS};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct PlayArgs {
    /// Comma-separated moves to play instead of reading stdin
    #[arg(long, value_delimiter = ',', value_name = "MOVES")]
    pub moves: Option<Vec<String>>,

    /// Output round reports and final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the rules banner
    #[arg(long)]
    pub quiet: bool,
}

/// Output options for a game
#[derive(Clone, Copy, Debug, Default)]
struct PlayOptions {
    json: bool,
    prompt: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run play command
///
/// 1. Set up the bot and referee
/// 2. Feed moves from --moves or stdin until the game ends
/// 3. Report the final result
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let config = match seed {
        Some(s) => BotConfig::default().with_seed(s),
        None => BotConfig::default(),
    };
    let mut referee = Referee::new(RandomBot::new(&config));

    tracing::info!("Starting game (seed={:?}, scripted={})", seed, args.moves.is_some());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.json && !args.quiet {
        writeln!(out, "{}", rules_banner())?;
    }

    let state = match args.moves {
        Some(moves) => {
            let options = PlayOptions {
                json: args.json,
                prompt: false,
            };
            play_game(&mut referee, moves.into_iter().map(Ok), &mut out, options)?
        }
        None => {
            let options = PlayOptions {
                json: args.json,
                prompt: !args.json,
            };
            let stdin = io::stdin();
            play_game(&mut referee, stdin.lock().lines(), &mut out, options)?
        }
    };

    report_final(&state, &mut out, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Play rounds until the game is over; fails if input runs out first
fn play_game<B, I, W>(
    referee: &mut Referee<B>,
    mut inputs: I,
    out: &mut W,
    options: PlayOptions,
) -> Result<GameState>
where
    B: MoveSource,
    I: Iterator<Item = io::Result<String>>,
    W: Write,
{
    while !referee.is_over() {
        if options.prompt {
            write!(out, "\nYour move: ")?;
            out.flush()?;
        }

        let line = match inputs.next() {
            Some(line) => line.context("Failed to read move")?,
            None => bail!(
                "Input ended after {} of {} rounds",
                referee.state().round(),
                MAX_ROUNDS
            ),
        };

        play_round(referee, &line, out, options)?;
    }

    Ok(referee.state().clone())
}

/// Print the end-of-game summary
fn report_final<W: Write>(state: &GameState, out: &mut W, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", state.to_json()?)?;
    } else {
        writeln!(out, "\n{}", final_summary(state))?;
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_round<B: MoveSource, W: Write>(
    referee: &mut Referee<B>,
    token: &str,
    out: &mut W,
    options: PlayOptions,
) -> Result<()> {
    let report = referee.play_turn(token)?;

    if options.json {
        writeln!(out, "{}", serde_json::to_string(&report)?)?;
    } else {
        writeln!(out, "\n{}", report.message)?;
    }
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
