//! Simulate command - bot-vs-bot games
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: simulate_games(), report_results()
//! - Level 3: play_single_game(), compute_statistics()
//! - Level 4: formatting utilities

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use rpsplus_core::{
    FinalResult, GameState, MoveSource, RandomBot, Referee, Verdict,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value = "100")]
    pub games: usize,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    result: FinalResult,
    user_score: u32,
    bot_score: u32,
    wasted_rounds: usize,
    user_bomb_used: bool,
    bot_bomb_used: bool,
}

/// Aggregated simulation results
#[derive(Clone, Debug, serde::Serialize)]
struct SimulationResults {
    total_games: usize,
    user_wins: usize,
    bot_wins: usize,
    draws: usize,
    wasted_rounds: usize,
    user_bombs: usize,
    bot_bombs: usize,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Play the requested number of games
/// 2. Aggregate statistics
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    tracing::info!("Starting simulation: {} games (seed={:?})", args.games, seed);

    let games = simulate_games(args.games, seed)?;
    let results = compute_statistics(&games);

    report_results(&results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn simulate_games(count: usize, seed: Option<u64>) -> Result<Vec<GameRecord>> {
    let mut rng = create_rng(seed);
    let mut games = Vec::with_capacity(count);

    for game_num in 0..count {
        let mut user = RandomBot::with_seed(rng.gen());
        let bot = RandomBot::with_seed(rng.gen());

        let record = play_single_game(game_num + 1, &mut user, bot)
            .with_context(|| format!("Game {} failed", game_num + 1))?;

        tracing::debug!(
            "Game {}: {:?} ({}-{})",
            record.game_number,
            record.result,
            record.user_score,
            record.bot_score
        );

        games.push(record);
    }

    Ok(games)
}

fn report_results(results: &SimulationResults, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
    } else {
        print_text_results(results);
    }
    Ok(())
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Play one full game; `user` supplies the left side's tokens
fn play_single_game<U: MoveSource, B: MoveSource>(
    game_number: usize,
    user: &mut U,
    bot: B,
) -> Result<GameRecord> {
    let mut referee = Referee::new(bot);

    while !referee.is_over() {
        let token = user
            .next_token(referee.state().user_bomb_used())
            .context("User move source ran out of moves")?;
        referee.play_turn(&token)?;
    }

    let state = referee.into_state();
    record_from_state(game_number, &state)
}

fn record_from_state(game_number: usize, state: &GameState) -> Result<GameRecord> {
    let result = state
        .final_result()
        .context("Game ended without a final result")?;

    Ok(GameRecord {
        game_number,
        result,
        user_score: state.user_score(),
        bot_score: state.bot_score(),
        wasted_rounds: state
            .history()
            .iter()
            .filter(|r| r.outcome == Verdict::Wasted)
            .count(),
        user_bomb_used: state.user_bomb_used(),
        bot_bomb_used: state.bot_bomb_used(),
    })
}

fn compute_statistics(games: &[GameRecord]) -> SimulationResults {
    let count = |result: FinalResult| games.iter().filter(|g| g.result == result).count();

    SimulationResults {
        total_games: games.len(),
        user_wins: count(FinalResult::UserWins),
        bot_wins: count(FinalResult::BotWins),
        draws: count(FinalResult::Draw),
        wasted_rounds: games.iter().map(|g| g.wasted_rounds).sum(),
        user_bombs: games.iter().filter(|g| g.user_bomb_used).count(),
        bot_bombs: games.iter().filter(|g| g.bot_bomb_used).count(),
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(part: usize, total: usize) -> f32 {
    if total > 0 {
        part as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

fn print_text_results(results: &SimulationResults) {
    let total = results.total_games;

    println!("\n=== Simulation Results ===");
    println!("Total games: {}", total);
    println!("User wins:   {} ({:.1}%)", results.user_wins, percent(results.user_wins, total));
    println!("Bot wins:    {} ({:.1}%)", results.bot_wins, percent(results.bot_wins, total));
    println!("Draws:       {} ({:.1}%)", results.draws, percent(results.draws, total));
    println!("Wasted:      {} rounds", results.wasted_rounds);
    println!(
        "Bombs used:  user {} / bot {}",
        results.user_bombs, results.bot_bombs
    );
}

// ============================================================================
// TESTS
// ============================================================================
