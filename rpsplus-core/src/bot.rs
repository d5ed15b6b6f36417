//! Bot move sources
//!
//! The referee asks a [`MoveSource`] for one token per round. Tokens still go
//! through the validator, so a source that ignores its bomb flag only wastes
//! rounds; it can never spend a second bomb.

use std::collections::VecDeque;

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use crate::moves::{Move, ALL_MOVES, BASIC_MOVES};

/// Supplies one raw move token per round
pub trait MoveSource {
    /// Next token, given whether this side has already spent its bomb.
    /// `None` means the source has nothing left to play.
    fn next_token(&mut self, bomb_used: bool) -> Option<String>;
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Random bot configuration
#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl BotConfig {
    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

// ============================================================================
// RANDOM BOT
// ============================================================================

/// Picks uniformly among the moves still legal for it
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new(config: &BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self { rng }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(&BotConfig::default().with_seed(seed))
    }

    /// Pick a move: bomb is only a candidate while unspent
    pub fn choose(&mut self, bomb_used: bool) -> Move {
        let candidates: &[Move] = if bomb_used { &BASIC_MOVES } else { &ALL_MOVES };
        candidates[self.rng.gen_range(0..candidates.len())]
    }
}

impl MoveSource for RandomBot {
    fn next_token(&mut self, bomb_used: bool) -> Option<String> {
        Some(self.choose(bomb_used).name().to_string())
    }
}

// ============================================================================
// SCRIPTED SOURCE
// ============================================================================

/// Plays a fixed list of tokens in order, ignoring the bomb flag
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    tokens: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl MoveSource for ScriptedSource {
    fn next_token(&mut self, _bomb_used: bool) -> Option<String> {
        self.tokens.pop_front()
    }
}

// ============================================================================
// TESTS
// ============================================================================
