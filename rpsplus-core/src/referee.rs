//! Referee text: rules banner, per-round calls, end-of-game summary
//!
//! Purely presentational. Nothing here feeds back into the state.

use crate::game::{FinalResult, GameState};
use crate::resolve::RoundOutcome;
use crate::validate::ValidationResult;

/// Rules shown before the first round
pub const RULES: &[&str] = &[
    "1. Best of 3 rounds",
    "2. rock, paper, scissors, bomb",
    "3. Bomb beats all (once per player)",
    "4. Invalid = wasted round",
    "5. Auto-end after 3 rounds",
];

/// Banner with title and rules
pub fn rules_banner() -> String {
    let rule = "=".repeat(60);
    let mut out = format!("{}\n ROCK-PAPER-SCISSORS-PLUS REFEREE\nRules:\n", rule);
    for line in RULES {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&rule);
    out
}

/// `Score: You U | Bot B`
pub fn score_line(state: &GameState) -> String {
    format!("Score: You {} | Bot {}", state.user_score(), state.bot_score())
}

/// Call for a round that has already been applied to `state`
pub fn round_message(state: &GameState, outcome: &RoundOutcome) -> String {
    let round = state.round();
    let call = match outcome {
        RoundOutcome::Draw { user, .. } => format!("Round {}: Draw! Both played {}.", round, user),
        RoundOutcome::UserWins { user, bot } => {
            format!("Round {}: You win! {} beats {}.", round, user, bot)
        }
        RoundOutcome::BotWins { user, bot } => {
            format!("Round {}: Bot wins! {} beats {}.", round, bot, user)
        }
        RoundOutcome::Wasted { user, bot } => {
            let reason = match (user, bot) {
                (ValidationResult::Invalid(reason), _) => format!("your move: {}", reason),
                (_, ValidationResult::Invalid(reason)) => format!("bot move: {}", reason),
                _ => "no valid pair".to_string(),
            };
            format!("Round {}: Invalid move ({})! Round wasted.", round, reason)
        }
    };
    format!("{}\n{}", call, score_line(state))
}

/// Final score plus verdict; empty verdict line while the game is running
pub fn final_summary(state: &GameState) -> String {
    let verdict = match state.final_result() {
        Some(FinalResult::UserWins) => "Result: User wins!",
        Some(FinalResult::BotWins) => "Result: Bot wins!",
        Some(FinalResult::Draw) => "Result: Draw!",
        None => "Result: game still in progress",
    };
    format!(
        "GAME OVER\nFinal Score → You: {} | Bot: {}\n{}",
        state.user_score(),
        state.bot_score(),
        verdict
    )
}
