//! Game state and round application

use serde::{Deserialize, Serialize};

use crate::resolve::{RoundOutcome, Verdict};
use crate::validate::MoveLabel;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Rounds per game; the game ends once this many have been played
pub const MAX_ROUNDS: u8 = 3;

// ============================================================================
// CORE TYPES
// ============================================================================

/// State machine misuse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("game is over after {round} rounds; no further rounds can be applied")]
    InvalidTransition { round: u8 },

    #[error("bot move source ran out of moves")]
    BotExhausted,

    #[error("inconsistent game state: {0}")]
    InvalidState(String),
}

/// One entry in the game history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round number
    pub round: u8,
    pub user: MoveLabel,
    pub bot: MoveLabel,
    pub outcome: Verdict,
}

/// End-of-game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalResult {
    UserWins,
    BotWins,
    Draw,
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Game state. Owned by whoever drives the game; mutated once per round.
///
/// Deserialized snapshots are checked against the round/history invariants.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    round: u8,
    user_score: u32,
    bot_score: u32,
    user_bomb_used: bool,
    bot_bomb_used: bool,
    game_over: bool,
    history: Vec<RoundRecord>,
}

/// Unchecked wire form of [`GameState`]
#[derive(Deserialize)]
struct RawGameState {
    round: u8,
    user_score: u32,
    bot_score: u32,
    user_bomb_used: bool,
    bot_bomb_used: bool,
    game_over: bool,
    history: Vec<RoundRecord>,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        let invalid = |msg: String| Err(GameError::InvalidState(msg));

        if raw.round > MAX_ROUNDS {
            return invalid(format!("round {} exceeds {}", raw.round, MAX_ROUNDS));
        }
        if raw.history.len() != raw.round as usize {
            return invalid(format!(
                "round {} but {} history entries",
                raw.round,
                raw.history.len()
            ));
        }
        if raw.game_over != (raw.round >= MAX_ROUNDS) {
            return invalid(format!("game_over={} at round {}", raw.game_over, raw.round));
        }
        if raw.user_score + raw.bot_score > raw.round as u32 {
            return invalid(format!(
                "score {}-{} after {} rounds",
                raw.user_score, raw.bot_score, raw.round
            ));
        }
        let numbered = raw
            .history
            .iter()
            .enumerate()
            .all(|(i, r)| r.round as usize == i + 1);
        if !numbered {
            return invalid("history rounds out of sequence".to_string());
        }

        Ok(Self {
            round: raw.round,
            user_score: raw.user_score,
            bot_score: raw.bot_score,
            user_bomb_used: raw.user_bomb_used,
            bot_bomb_used: raw.bot_bomb_used,
            game_over: raw.game_over,
            history: raw.history,
        })
    }
}

impl GameState {
    /// Fresh game: round 0, no score, both bombs available
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Rounds played so far
    pub fn round(&self) -> u8 {
        self.round
    }

    pub fn user_score(&self) -> u32 {
        self.user_score
    }

    pub fn bot_score(&self) -> u32 {
        self.bot_score
    }

    pub fn user_bomb_used(&self) -> bool {
        self.user_bomb_used
    }

    pub fn bot_bomb_used(&self) -> bool {
        self.bot_bomb_used
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Winner of a finished game, `None` while rounds remain
    pub fn final_result(&self) -> Option<FinalResult> {
        if !self.game_over {
            return None;
        }
        Some(if self.user_score > self.bot_score {
            FinalResult::UserWins
        } else if self.bot_score > self.user_score {
            FinalResult::BotWins
        } else {
            FinalResult::Draw
        })
    }

    /// JSON snapshot for presentation layers
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    // ========================================================================
    // TRANSITIONS
    // ========================================================================

    /// Apply a resolved round, return the new state
    pub fn apply(&self, outcome: &RoundOutcome) -> Result<Self, GameError> {
        let mut next = self.clone();
        next.apply_in_place(outcome)?;
        Ok(next)
    }

    /// Apply a resolved round to this state.
    ///
    /// Fails without touching anything if the game is already over.
    pub fn apply_in_place(&mut self, outcome: &RoundOutcome) -> Result<&RoundRecord, GameError> {
        if self.game_over || self.round >= MAX_ROUNDS {
            return Err(GameError::InvalidTransition { round: self.round });
        }

        let record = RoundRecord {
            round: self.round + 1,
            user: outcome.user_label(),
            bot: outcome.bot_label(),
            outcome: outcome.verdict(),
        };
        self.history.push(record);

        match outcome.verdict() {
            Verdict::UserWins => self.user_score += 1,
            Verdict::BotWins => self.bot_score += 1,
            Verdict::Draw | Verdict::Wasted => {}
        }

        // A rejected reuse attempt is Invalid, so it never lands here
        if outcome.user_validation().spends_bomb() {
            self.user_bomb_used = true;
        }
        if outcome.bot_validation().spends_bomb() {
            self.bot_bomb_used = true;
        }

        self.round += 1;
        if self.round >= MAX_ROUNDS {
            self.game_over = true;
        }

        if outcome.is_wasted() {
            tracing::info!("Round {} wasted: {} vs {}", record.round, record.user, record.bot);
        } else {
            tracing::info!(
                "Round {}: {} vs {} -> {:?} (score {}-{})",
                record.round,
                record.user,
                record.bot,
                record.outcome,
                self.user_score,
                self.bot_score
            );
        }
        if self.game_over {
            tracing::info!("Game over: {:?}", self.final_result());
        }

        Ok(&self.history[self.history.len() - 1])
    }
}

/// Apply `outcome` to `state` by value
pub fn apply(state: GameState, outcome: &RoundOutcome) -> Result<GameState, GameError> {
    let mut state = state;
    state.apply_in_place(outcome)?;
    Ok(state)
}

// ============================================================================
// TESTS
// ============================================================================
