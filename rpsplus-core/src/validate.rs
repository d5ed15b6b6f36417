//! Move validation
//!
//! A raw token from either side goes through [`validate`] before it can take
//! part in a round. Invalid input is data, never an error: the round that
//! carries it is simply wasted.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::moves::Move;

/// Why a token was rejected
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum InvalidReason {
    #[error("unrecognized move '{0}'")]
    Unrecognized(String),

    #[error("bomb already used")]
    BombReused,
}

/// Outcome of validating one side's token
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    Valid(Move),
    Invalid(InvalidReason),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The accepted move, if any
    pub fn valid_move(&self) -> Option<Move> {
        match self {
            ValidationResult::Valid(mv) => Some(*mv),
            ValidationResult::Invalid(_) => None,
        }
    }

    /// True only for a legally played bomb
    pub fn spends_bomb(&self) -> bool {
        self.valid_move() == Some(Move::Bomb)
    }

    /// History label for this side
    pub fn label(&self) -> MoveLabel {
        match self {
            ValidationResult::Valid(mv) => MoveLabel::Played(*mv),
            ValidationResult::Invalid(_) => MoveLabel::Invalid,
        }
    }
}

/// What the history records for one side of a round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveLabel {
    Played(Move),
    Invalid,
}

impl fmt::Display for MoveLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveLabel::Played(mv) => write!(f, "{}", mv),
            MoveLabel::Invalid => f.write_str("invalid"),
        }
    }
}

/// Normalize and validate a raw move token.
///
/// `bomb_already_used` is the submitting side's own flag. Pure: the caller
/// decides what to do with the result.
pub fn validate(raw_token: &str, bomb_already_used: bool) -> ValidationResult {
    let result = match Move::parse(raw_token) {
        None => {
            let token = raw_token.trim().to_string();
            ValidationResult::Invalid(InvalidReason::Unrecognized(token))
        }
        Some(Move::Bomb) if bomb_already_used => {
            ValidationResult::Invalid(InvalidReason::BombReused)
        }
        Some(mv) => ValidationResult::Valid(mv),
    };

    tracing::debug!("validate {:?} (bomb_used={}) -> {:?}", raw_token, bomb_already_used, result);

    result
}

// ============================================================================
// TESTS
// ============================================================================
