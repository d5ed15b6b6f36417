//! Round resolution

use serde::{Deserialize, Serialize};

use crate::moves::Move;
use crate::validate::{MoveLabel, ValidationResult};

/// Fieldless round verdict (what history and statistics keep)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Draw,
    UserWins,
    BotWins,
    Wasted,
}

/// Result of resolving one round, with both sides' moves attached.
///
/// Only [`resolve`] builds outcomes, so the verdict always agrees with the
/// moves it carries. Callers can inspect variants but not construct them:
///
/// ```compile_fail
/// use rpsplus_core::{Move, RoundOutcome};
///
/// let forged = RoundOutcome::UserWins { user: Move::Rock, bot: Move::Paper };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    #[non_exhaustive]
    Draw { user: Move, bot: Move },
    #[non_exhaustive]
    UserWins { user: Move, bot: Move },
    #[non_exhaustive]
    BotWins { user: Move, bot: Move },
    /// At least one side was invalid; nobody scores
    #[non_exhaustive]
    Wasted {
        user: ValidationResult,
        bot: ValidationResult,
    },
}

impl RoundOutcome {
    pub fn verdict(&self) -> Verdict {
        match self {
            RoundOutcome::Draw { .. } => Verdict::Draw,
            RoundOutcome::UserWins { .. } => Verdict::UserWins,
            RoundOutcome::BotWins { .. } => Verdict::BotWins,
            RoundOutcome::Wasted { .. } => Verdict::Wasted,
        }
    }

    pub fn is_wasted(&self) -> bool {
        matches!(self, RoundOutcome::Wasted { .. })
    }

    /// User side as it was validated
    pub fn user_validation(&self) -> ValidationResult {
        match self {
            RoundOutcome::Draw { user, .. }
            | RoundOutcome::UserWins { user, .. }
            | RoundOutcome::BotWins { user, .. } => ValidationResult::Valid(*user),
            RoundOutcome::Wasted { user, .. } => user.clone(),
        }
    }

    /// Bot side as it was validated
    pub fn bot_validation(&self) -> ValidationResult {
        match self {
            RoundOutcome::Draw { bot, .. }
            | RoundOutcome::UserWins { bot, .. }
            | RoundOutcome::BotWins { bot, .. } => ValidationResult::Valid(*bot),
            RoundOutcome::Wasted { bot, .. } => bot.clone(),
        }
    }

    pub fn user_label(&self) -> MoveLabel {
        self.user_validation().label()
    }

    pub fn bot_label(&self) -> MoveLabel {
        self.bot_validation().label()
    }
}

/// Resolve a round. `user` is the left side, `bot` the right.
///
/// Priority: any invalid side wastes the round; bomb against bomb draws; a
/// lone bomb wins; otherwise classic rock-paper-scissors.
pub fn resolve(user: &ValidationResult, bot: &ValidationResult) -> RoundOutcome {
    let (user_move, bot_move) = match (user.valid_move(), bot.valid_move()) {
        (Some(u), Some(b)) => (u, b),
        _ => {
            return RoundOutcome::Wasted {
                user: user.clone(),
                bot: bot.clone(),
            }
        }
    };

    let outcome = if user_move.beats(bot_move) {
        RoundOutcome::UserWins {
            user: user_move,
            bot: bot_move,
        }
    } else if bot_move.beats(user_move) {
        RoundOutcome::BotWins {
            user: user_move,
            bot: bot_move,
        }
    } else {
        RoundOutcome::Draw {
            user: user_move,
            bot: bot_move,
        }
    };

    tracing::debug!("resolve {} vs {} -> {:?}", user_move, bot_move, outcome.verdict());

    outcome
}

// ============================================================================
// TESTS
// ============================================================================
