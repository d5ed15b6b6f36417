//! Move definitions and token normalization

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// CONSTANTS
// ============================================================================

/// The three classic moves (what the bot picks from once its bomb is spent)
pub const BASIC_MOVES: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

/// Every canonical move, bomb included
pub const ALL_MOVES: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

/// Accepted spellings -> canonical move. Tokens are lowercased and trimmed
/// before lookup.
const SYNONYMS: &[(&str, Move)] = &[
    ("rock", Move::Rock),
    ("r", Move::Rock),
    ("stone", Move::Rock),
    ("paper", Move::Paper),
    ("p", Move::Paper),
    ("sheet", Move::Paper),
    ("scissors", Move::Scissors),
    ("scissor", Move::Scissors),
    ("s", Move::Scissors),
    ("bomb", Move::Bomb),
    ("b", Move::Bomb),
];

// ============================================================================
// MOVE
// ============================================================================

/// A canonical move
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    /// Beats everything else; usable once per player per game
    Bomb,
}

impl Move {
    /// Canonical lowercase name
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Normalize a raw token and map it through the synonym table
    pub fn parse(token: &str) -> Option<Self> {
        let normalized = token.trim().to_lowercase();
        SYNONYMS
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|&(_, mv)| mv)
    }

    /// True if `self` strictly beats `other`
    pub fn beats(self, other: Move) -> bool {
        match (self, other) {
            (Move::Bomb, Move::Bomb) => false,
            (Move::Bomb, _) => true,
            (_, Move::Bomb) => false,
            (Move::Rock, Move::Scissors)
            | (Move::Scissors, Move::Paper)
            | (Move::Paper, Move::Rock) => true,
            _ => false,
        }
    }

    pub fn is_bomb(self) -> bool {
        self == Move::Bomb
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// TESTS
// ============================================================================
