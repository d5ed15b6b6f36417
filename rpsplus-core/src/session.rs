//! Turn driver: bot move -> validation -> resolution -> state update

use serde::Serialize;

use crate::bot::MoveSource;
use crate::game::{FinalResult, GameError, GameState, RoundRecord};
use crate::referee;
use crate::resolve::{resolve, RoundOutcome};
use crate::validate::validate;

/// Everything a presentation layer needs after one round
#[derive(Clone, Debug, Serialize)]
pub struct TurnReport {
    pub outcome: RoundOutcome,
    pub record: RoundRecord,
    pub state: GameState,
    pub message: String,
}

/// Owns one game and the bot playing it
pub struct Referee<B: MoveSource> {
    state: GameState,
    bot: B,
}

impl<B: MoveSource> Referee<B> {
    pub fn new(bot: B) -> Self {
        Self {
            state: GameState::new(),
            bot,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn final_result(&self) -> Option<FinalResult> {
        self.state.final_result()
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Play one round against the bot with the user's raw token
    pub fn play_turn(&mut self, user_token: &str) -> Result<TurnReport, GameError> {
        if self.state.is_over() {
            return Err(GameError::InvalidTransition {
                round: self.state.round(),
            });
        }

        let bot_token = self
            .bot
            .next_token(self.state.bot_bomb_used())
            .ok_or(GameError::BotExhausted)?;

        let user = validate(user_token, self.state.user_bomb_used());
        let bot = validate(&bot_token, self.state.bot_bomb_used());
        let outcome = resolve(&user, &bot);

        let record = *self.state.apply_in_place(&outcome)?;
        let message = referee::round_message(&self.state, &outcome);

        Ok(TurnReport {
            outcome,
            record,
            state: self.state.clone(),
            message,
        })
    }
}
